//! # Tooltip Placement
//!
//! Keeps the item detail panel on screen next to the pointer.
//!
//! ## Algorithm
//!
//! ```text
//! 1. top  = ay + m,  left = ax + m          (below-right of the anchor)
//! 2. top  + th > vh - m  =>  top  = ay - th - m   (flip up)
//! 3. top  < m            =>  top  = m
//! 4. left + tw > vw - m  =>  left = ax - tw - m   (flip left)
//! 5. left < m            =>  left = m
//! ```
//!
//! The vertical axis is fully resolved before the horizontal one and the
//! two never interact. Placement is recomputed on every anchor, panel or
//! viewport update, so each individual update is correct on its own.

use serde::Deserialize;
use stashgrid_catalog::ItemId;

use crate::geometry::{Point, Size};

/// Distance the panel keeps from every viewport edge.
pub const DEFAULT_MARGIN: f32 = 20.0;

/// Tooltip settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Minimum distance from any viewport edge, also the pointer offset.
    pub margin: f32,
    /// Panel size assumed until the first measurement arrives.
    pub panel: Size,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            panel: Size::new(384.0, 240.0),
        }
    }
}

/// Top-left corner of the panel in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
}

/// Computes the panel's top-left corner for an anchor point.
///
/// The result lies in `[m, vw - m - tw] x [m, vh - m - th]` whenever the
/// panel fits inside the margins; otherwise it is clamped to `m`.
#[must_use]
pub fn place_panel(anchor: Point, panel: Size, viewport: Size, margin: f32) -> TooltipPlacement {
    let mut top = anchor.y + margin;
    if top + panel.height > viewport.height - margin {
        top = anchor.y - panel.height - margin;
    }
    if top < margin {
        top = margin;
    }

    let mut left = anchor.x + margin;
    if left + panel.width > viewport.width - margin {
        left = anchor.x - panel.width - margin;
    }
    if left < margin {
        left = margin;
    }

    TooltipPlacement { left, top }
}

/// Tooltip state machine.
#[derive(Debug, Clone, PartialEq)]
enum TooltipState {
    Hidden,
    Visible {
        item_id: ItemId,
        anchor: Point,
        placement: TooltipPlacement,
    },
}

/// Owns the anchored item and its last computed placement.
///
/// Hidden until an item is anchored. Clearing the anchor discards the
/// coordinates; the next `show` always computes fresh ones.
#[derive(Debug, Clone)]
pub struct TooltipManager {
    state: TooltipState,
    panel: Size,
    viewport: Size,
    margin: f32,
}

impl TooltipManager {
    /// Creates a hidden tooltip for the given viewport.
    #[must_use]
    pub const fn new(viewport: Size, config: TooltipConfig) -> Self {
        Self {
            state: TooltipState::Hidden,
            panel: config.panel,
            viewport,
            margin: config.margin,
        }
    }

    /// Anchors an item at a pointer position (Hidden or Visible -> Visible).
    pub fn show(&mut self, item_id: impl Into<ItemId>, anchor: Point) {
        let item_id = item_id.into();
        tracing::debug!(item = %item_id, x = anchor.x, y = anchor.y, "tooltip shown");
        self.state = TooltipState::Visible {
            placement: self.place(anchor),
            item_id,
            anchor,
        };
    }

    /// Moves the anchor point of the visible tooltip. No-op while hidden.
    pub fn move_anchor(&mut self, anchor: Point) {
        let placement = self.place(anchor);
        if let TooltipState::Visible {
            anchor: current,
            placement: current_placement,
            ..
        } = &mut self.state
        {
            *current = anchor;
            *current_placement = placement;
        }
    }

    /// Records the measured panel size and recomputes.
    pub fn measure(&mut self, panel: Size) {
        self.panel = panel;
        self.recompute();
    }

    /// Records a new viewport size and recomputes.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.recompute();
    }

    /// Clears the anchor (Visible -> Hidden).
    pub fn hide(&mut self) {
        if self.is_visible() {
            tracing::debug!("tooltip hidden");
        }
        self.state = TooltipState::Hidden;
    }

    /// Returns true while an item is anchored.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// The anchored item, if any.
    #[must_use]
    pub fn anchored_item(&self) -> Option<&str> {
        match &self.state {
            TooltipState::Visible { item_id, .. } => Some(item_id),
            TooltipState::Hidden => None,
        }
    }

    /// The current placement, or `None` while hidden.
    #[must_use]
    pub const fn placement(&self) -> Option<TooltipPlacement> {
        match &self.state {
            TooltipState::Visible { placement, .. } => Some(*placement),
            TooltipState::Hidden => None,
        }
    }

    /// Last measured (or configured) panel size.
    #[must_use]
    pub const fn panel(&self) -> Size {
        self.panel
    }

    /// Current viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    fn place(&self, anchor: Point) -> TooltipPlacement {
        place_panel(anchor, self.panel, self.viewport, self.margin)
    }

    fn recompute(&mut self) {
        if let TooltipState::Visible { anchor, .. } = self.state {
            self.move_anchor(anchor);
        }
    }
}

impl Default for TooltipManager {
    fn default() -> Self {
        Self::new(Size::new(1920.0, 1080.0), TooltipConfig::default())
    }
}
