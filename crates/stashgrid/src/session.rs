//! # Stash Session
//!
//! Owns the catalog and all mutable view state: selected tab, filter
//! inputs, cached grid layout and the tooltip anchor.
//!
//! ## Event handling
//!
//! ```text
//! EventReceiver ──drain──> [e1, e2, ... en] ──apply──> state
//!                                                       │
//!                          filter recomputed once <─────┘
//! ```
//!
//! `pump` applies a whole batch before recomputing the filter, so a burst
//! of keystrokes costs one pipeline run and only the last committed
//! combination is ever served. `apply` recomputes immediately.
//!
//! The grid layout is resolved once per tab selection on the unfiltered
//! item list, so filtering never moves a visible item.

use stashgrid_catalog::{Catalog, Item, ItemId, Tab, TabId};
use stashgrid_ui::{
    filter_items, resolve, socket_colours, stack_badge, style, CategorySelector, Color, FilterQuery,
    GridLayout, ItemDetail, Point, RaritySelector, Size, TooltipManager,
};

use crate::config::StashConfig;
use crate::error::StashResult;
use crate::events::{EventReceiver, StashEvent};
use crate::frame::{ItemCell, StashFrame, TabEntry, TooltipView};
use crate::SAMPLE_CATALOG;

/// Application state of one stash viewer.
#[derive(Debug)]
pub struct StashSession {
    catalog: Catalog,
    selected: Option<TabId>,
    layout: GridLayout,
    query: FilterQuery,
    visible: Vec<ItemId>,
    tooltip: TooltipManager,
    filter_dirty: bool,
    filter_runs: u64,
}

impl StashSession {
    /// Creates a session over a loaded catalog, selecting its first tab.
    #[must_use]
    pub fn new(catalog: Catalog, config: &StashConfig) -> Self {
        let mut session = Self {
            catalog,
            selected: None,
            layout: GridLayout::default(),
            query: FilterQuery::default(),
            visible: Vec::new(),
            tooltip: TooltipManager::new(config.viewport, config.tooltip),
            filter_dirty: true,
            filter_runs: 0,
        };
        if let Some(first) = session.catalog.first_tab().map(|t| t.id.clone()) {
            session.select_tab(first);
        }
        session.refresh();
        session
    }

    /// Loads the configured catalog (or the bundled sample) and starts a
    /// session.
    ///
    /// # Errors
    ///
    /// Returns the catalog error if the file cannot be read or validated.
    pub fn from_config(config: &StashConfig) -> StashResult<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::from_toml_str(SAMPLE_CATALOG)?,
        };
        Ok(Self::new(catalog, config))
    }

    /// Applies one event and brings the filtered view up to date.
    pub fn apply(&mut self, event: StashEvent) {
        self.apply_deferred(event);
        self.refresh();
    }

    /// Drains the receiver and applies the batch in order.
    ///
    /// The filter is recomputed at most once, after the last event.
    /// Returns the number of events applied.
    pub fn pump(&mut self, receiver: &EventReceiver) -> usize {
        let events = receiver.drain();
        let count = events.len();
        for event in events {
            self.apply_deferred(event);
        }
        self.refresh();
        count
    }

    fn apply_deferred(&mut self, event: StashEvent) {
        match event {
            StashEvent::SelectTab(tab_id) => self.select_tab(tab_id),
            StashEvent::SearchChanged(search) => {
                if search != self.query.search {
                    self.query.search = search;
                    self.filter_dirty = true;
                }
            }
            StashEvent::RarityChanged(value) => {
                let rarity = RaritySelector::parse(&value);
                if rarity != self.query.rarity {
                    self.query.rarity = rarity;
                    self.filter_dirty = true;
                }
            }
            StashEvent::CategoryChanged(value) => {
                let category = CategorySelector::parse(&value);
                if category != self.query.category {
                    self.query.category = category;
                    self.filter_dirty = true;
                }
            }
            StashEvent::PointerEntered { item_id, x, y } => {
                if self.is_hoverable(&item_id) {
                    self.tooltip.show(item_id, Point::new(x, y));
                } else {
                    tracing::debug!(item = %item_id, "pointer over undrawn item, ignoring");
                }
            }
            StashEvent::PointerMoved { x, y } => self.tooltip.move_anchor(Point::new(x, y)),
            StashEvent::PointerLeft => self.tooltip.hide(),
            StashEvent::PanelMeasured { width, height } => {
                let panel = Size::new(width, height);
                if panel.is_positive() {
                    self.tooltip.measure(panel);
                } else {
                    tracing::warn!(width, height, "ignoring non-positive panel size");
                }
            }
            StashEvent::ViewportResized { width, height } => {
                let viewport = Size::new(width, height);
                if viewport.is_positive() {
                    self.tooltip.set_viewport(viewport);
                } else {
                    tracing::warn!(width, height, "ignoring non-positive viewport size");
                }
            }
        }
    }

    fn select_tab(&mut self, tab_id: TabId) {
        let Some(tab) = self.catalog.tab(&tab_id) else {
            tracing::warn!(tab = %tab_id, "ignoring selection of unknown tab");
            return;
        };
        self.layout = resolve(tab.columns(), &tab.items);
        tracing::debug!(tab = %tab_id, columns = tab.columns(), "tab selected");
        self.selected = Some(tab_id);
        self.tooltip.hide();
        self.filter_dirty = true;
    }

    /// An item can anchor the tooltip only if it is drawn right now.
    fn is_hoverable(&self, item_id: &str) -> bool {
        self.selected_tab()
            .and_then(|tab| tab.item(item_id))
            .is_some_and(|item| self.layout.is_placed(item_id) && self.query.matches(item))
    }

    fn refresh(&mut self) {
        if !self.filter_dirty {
            return;
        }
        self.filter_dirty = false;
        self.filter_runs += 1;

        let items: &[Item] = self
            .selected_tab()
            .map(|tab| tab.items.as_slice())
            .unwrap_or_default();
        let filtered = filter_items(items, &self.query);
        let visible: Vec<ItemId> = self
            .layout
            .visible(&filtered)
            .into_iter()
            .map(|(item, _)| item.id.clone())
            .collect();
        tracing::debug!(input = items.len(), output = visible.len(), "filter recomputed");
        self.visible = visible;

        // A cell hidden by the filter can no longer hold the pointer.
        let anchor_hidden = self
            .tooltip
            .anchored_item()
            .is_some_and(|anchored| !self.visible.iter().any(|id| id == anchored));
        if anchor_hidden {
            self.tooltip.hide();
        }
    }

    /// The catalog this session views.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selected tab, if the catalog has any.
    #[must_use]
    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected.as_deref().and_then(|id| self.catalog.tab(id))
    }

    /// Current filter inputs.
    #[must_use]
    pub const fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Resolved layout of the selected tab.
    #[must_use]
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Tooltip state.
    #[must_use]
    pub const fn tooltip(&self) -> &TooltipManager {
        &self.tooltip
    }

    /// Number of filter pipeline runs so far.
    #[must_use]
    pub const fn filter_runs(&self) -> u64 {
        self.filter_runs
    }

    /// Visible items of the selected tab, in catalog order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        let Some(tab) = self.selected_tab() else {
            return Vec::new();
        };
        self.visible.iter().filter_map(|id| tab.item(id)).collect()
    }

    /// Builds the render model for the current state.
    #[must_use]
    pub fn frame(&self) -> StashFrame {
        let tabs = self
            .catalog
            .tabs()
            .iter()
            .map(|tab| TabEntry {
                id: tab.id.clone(),
                name: tab.name.clone(),
                selected: self.selected.as_deref() == Some(tab.id.as_str()),
                tint: tab.colour.map(Color::from),
            })
            .collect();

        let items = self
            .visible_items()
            .into_iter()
            .filter_map(|item| {
                let placement = self.layout.placement(&item.id)?;
                Some(ItemCell {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    icon: item.icon.clone(),
                    placement,
                    border: style::rarity_border(item.frame_type),
                    stack_badge: stack_badge(item),
                    sockets: socket_colours(item),
                })
            })
            .collect();

        let tooltip = self.tooltip.placement().and_then(|placement| {
            let item = self.selected_tab()?.item(self.tooltip.anchored_item()?)?;
            Some(TooltipView {
                placement,
                detail: ItemDetail::from_item(item),
            })
        });

        StashFrame {
            tabs,
            tab_name: self.selected_tab().map(|tab| tab.name.clone()),
            columns: self.layout.columns(),
            rows: self.layout.rows(),
            query: self.query.clone(),
            items,
            rejected: self.layout.rejected().to_vec(),
            tooltip,
        }
    }
}
