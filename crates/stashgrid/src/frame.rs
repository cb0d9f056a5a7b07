//! Render model handed to the drawing layer once per frame.

use std::fmt;

use stashgrid_catalog::{ItemId, TabId};
use stashgrid_ui::{Color, FilterQuery, GridPlacement, ItemDetail, PlacementError, TooltipPlacement};

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    /// Tab identifier.
    pub id: TabId,
    /// Display name.
    pub name: String,
    /// True for the selected tab.
    pub selected: bool,
    /// Sidebar tint, if the tab declares one.
    pub tint: Option<Color>,
}

/// One drawable grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCell {
    /// Item identifier.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
    /// Grid span.
    pub placement: GridPlacement,
    /// Frame border colour.
    pub border: Color,
    /// Stack badge, if shown.
    pub stack_badge: Option<u32>,
    /// Socket gem colours per link group.
    pub sockets: Vec<Vec<Color>>,
}

/// The floating detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    /// Top-left corner.
    pub placement: TooltipPlacement,
    /// Panel content.
    pub detail: ItemDetail,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StashFrame {
    /// Sidebar entries in display order.
    pub tabs: Vec<TabEntry>,
    /// Name of the selected tab.
    pub tab_name: Option<String>,
    /// Grid column count of the selected tab.
    pub columns: u32,
    /// Grid row count needed by the selected tab.
    pub rows: u32,
    /// Active filter inputs.
    pub query: FilterQuery,
    /// Visible items in catalog order.
    pub items: Vec<ItemCell>,
    /// Items of the selected tab that could not be placed.
    pub rejected: Vec<PlacementError>,
    /// Detail panel; `None` while hidden.
    pub tooltip: Option<TooltipView>,
}

impl StashFrame {
    /// Returns true while the detail panel is shown.
    #[must_use]
    pub const fn tooltip_visible(&self) -> bool {
        self.tooltip.is_some()
    }

    /// Ids of the visible items, in order.
    #[must_use]
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|cell| cell.item_id.as_str()).collect()
    }

    /// The cell of a visible item.
    #[must_use]
    pub fn cell(&self, item_id: &str) -> Option<&ItemCell> {
        self.items.iter().find(|cell| cell.item_id == item_id)
    }
}

impl fmt::Display for StashFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|t| if t.selected { format!("[{}]", t.name) } else { t.name.clone() })
            .collect();
        writeln!(f, "tabs: {}", tabs.join(" | "))?;
        writeln!(
            f,
            "grid: {} ({}x{})  search={:?} rarity={} category={}",
            self.tab_name.as_deref().unwrap_or("-"),
            self.columns,
            self.rows,
            self.query.search,
            self.query.rarity,
            self.query.category,
        )?;

        for cell in &self.items {
            let p = cell.placement;
            write!(
                f,
                "  {:<16} col {:>2}+{} row {:>2}+{}  {}",
                cell.item_id, p.column_start, p.column_span, p.row_start, p.row_span, cell.name
            )?;
            if let Some(badge) = cell.stack_badge {
                write!(f, " x{badge}")?;
            }
            writeln!(f)?;
        }
        for error in &self.rejected {
            writeln!(f, "  rejected: {error}")?;
        }

        match &self.tooltip {
            Some(view) => {
                writeln!(
                    f,
                    "tooltip: {} at ({}, {})",
                    view.detail.item_id, view.placement.left, view.placement.top
                )?;
                for line in view.detail.to_string().lines() {
                    writeln!(f, "  | {line}")?;
                }
            }
            None => writeln!(f, "tooltip: hidden")?,
        }
        Ok(())
    }
}
