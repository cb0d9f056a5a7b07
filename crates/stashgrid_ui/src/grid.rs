//! # Grid Layout Resolver
//!
//! Maps item footprints to 1-based grid spans and rejects invalid geometry.
//!
//! ## Validation
//!
//! An item is rejected (never drawn) when:
//! - its width or height is zero
//! - its edges do not fit in a `u32` cell coordinate
//! - its right edge extends past the tab's column capacity
//! - it shares a cell with an item placed before it
//!
//! Rejections are local: the rest of the tab is still resolved.
//! Rows are unbounded, the grid grows downward to fit content.
//!
//! The resolver runs on the unfiltered item set, so hiding items through
//! the filter pipeline never moves the ones that stay visible.

use std::collections::HashMap;

use stashgrid_catalog::{Footprint, Item, ItemId};
use thiserror::Error;

/// 1-based grid span of an accepted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPlacement {
    /// First column (1-based).
    pub column_start: u32,
    /// First row (1-based).
    pub row_start: u32,
    /// Columns covered.
    pub column_span: u32,
    /// Rows covered.
    pub row_span: u32,
}

impl GridPlacement {
    /// Converts a 0-based footprint into a 1-based span.
    ///
    /// Returns `None` for an empty footprint or one whose exclusive edges
    /// overflow `u32`.
    #[must_use]
    pub const fn from_footprint(footprint: Footprint) -> Option<Self> {
        if footprint.is_empty() {
            return None;
        }
        // w, h >= 1, so x + 1 and y + 1 fit whenever the edges do.
        match (footprint.checked_right(), footprint.checked_bottom()) {
            (Some(_), Some(_)) => Some(Self {
                column_start: footprint.x + 1,
                row_start: footprint.y + 1,
                column_span: footprint.w,
                row_span: footprint.h,
            }),
            _ => None,
        }
    }
}

/// Why an item was excluded from the layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Zero width or height.
    #[error("item {item_id} has an empty footprint ({w}x{h})")]
    EmptyFootprint {
        /// Rejected item.
        item_id: ItemId,
        /// Declared width.
        w: u32,
        /// Declared height.
        h: u32,
    },

    /// An edge of the footprint lies beyond the last representable cell.
    #[error("item {item_id} at ({x}, {y}) size {w}x{h} is out of range")]
    OutOfRange {
        /// Rejected item.
        item_id: ItemId,
        /// Declared column.
        x: u32,
        /// Declared row.
        y: u32,
        /// Declared width.
        w: u32,
        /// Declared height.
        h: u32,
    },

    /// Footprint crosses the right edge of the tab.
    #[error("item {item_id} ends at column {right}, tab has {columns}")]
    ExceedsColumns {
        /// Rejected item.
        item_id: ItemId,
        /// Exclusive right edge of the footprint.
        right: u32,
        /// Column capacity of the tab.
        columns: u32,
    },

    /// Footprint shares a cell with an earlier item.
    #[error("item {item_id} overlaps {other_id}")]
    Overlap {
        /// Rejected item.
        item_id: ItemId,
        /// The already placed item it collides with.
        other_id: ItemId,
    },
}

impl PlacementError {
    /// The item this error rejects.
    #[must_use]
    pub fn item_id(&self) -> &str {
        match self {
            Self::EmptyFootprint { item_id, .. }
            | Self::OutOfRange { item_id, .. }
            | Self::ExceedsColumns { item_id, .. }
            | Self::Overlap { item_id, .. } => item_id,
        }
    }
}

/// Resolved layout of one tab.
///
/// Holds item ids rather than references so it can be cached next to the
/// catalog it was computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    placed: Vec<(ItemId, GridPlacement)>,
    index: HashMap<ItemId, usize>,
    rejected: Vec<PlacementError>,
}

impl GridLayout {
    /// Column capacity the layout was resolved against.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows needed to show every accepted item.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Accepted items in input order.
    #[must_use]
    pub fn placed(&self) -> &[(ItemId, GridPlacement)] {
        &self.placed
    }

    /// Rejected items in input order.
    #[must_use]
    pub fn rejected(&self) -> &[PlacementError] {
        &self.rejected
    }

    /// Placement of an item, or `None` if it was rejected or unknown.
    #[must_use]
    pub fn placement(&self, item_id: &str) -> Option<GridPlacement> {
        self.index.get(item_id).map(|&slot| self.placed[slot].1)
    }

    /// Returns true if the item was accepted.
    #[must_use]
    pub fn is_placed(&self, item_id: &str) -> bool {
        self.index.contains_key(item_id)
    }

    /// Pairs each filtered item with its placement, dropping rejected ones.
    ///
    /// Order follows `filtered`.
    #[must_use]
    pub fn visible<'a>(&self, filtered: &[&'a Item]) -> Vec<(&'a Item, GridPlacement)> {
        filtered
            .iter()
            .filter_map(|&item| self.placement(&item.id).map(|p| (item, p)))
            .collect()
    }
}

/// Resolves every item of a tab against its column capacity.
///
/// Overlaps are first-come: the earlier item of a colliding pair keeps its
/// cell and the later one is rejected.
#[must_use]
pub fn resolve(columns: u32, items: &[Item]) -> GridLayout {
    let mut layout = GridLayout {
        columns,
        ..GridLayout::default()
    };
    let mut accepted: Vec<(&Item, Footprint)> = Vec::with_capacity(items.len());

    for item in items {
        match check(columns, item, &accepted) {
            Ok((footprint, placement)) => {
                layout.rows = layout.rows.max(footprint.bottom());
                layout.index.insert(item.id.clone(), layout.placed.len());
                layout.placed.push((item.id.clone(), placement));
                accepted.push((item, footprint));
            }
            Err(error) => {
                tracing::warn!(%error, "rejecting item placement");
                layout.rejected.push(error);
            }
        }
    }

    tracing::debug!(
        columns,
        rows = layout.rows,
        placed = layout.placed.len(),
        rejected = layout.rejected.len(),
        "grid resolved"
    );
    layout
}

fn check(
    columns: u32,
    item: &Item,
    accepted: &[(&Item, Footprint)],
) -> Result<(Footprint, GridPlacement), PlacementError> {
    let footprint = item.footprint();

    if footprint.is_empty() {
        return Err(PlacementError::EmptyFootprint {
            item_id: item.id.clone(),
            w: footprint.w,
            h: footprint.h,
        });
    }

    let Some(placement) = GridPlacement::from_footprint(footprint) else {
        return Err(PlacementError::OutOfRange {
            item_id: item.id.clone(),
            x: footprint.x,
            y: footprint.y,
            w: footprint.w,
            h: footprint.h,
        });
    };

    if footprint.right() > columns {
        return Err(PlacementError::ExceedsColumns {
            item_id: item.id.clone(),
            right: footprint.right(),
            columns,
        });
    }

    if let Some((other, _)) = accepted
        .iter()
        .find(|(_, placed)| placed.intersects(&footprint))
    {
        return Err(PlacementError::Overlap {
            item_id: item.id.clone(),
            other_id: other.id.clone(),
        });
    }

    Ok((footprint, placement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stashgrid_catalog::{FrameType, STANDARD_COLUMNS};

    fn item(id: &str, x: u32, y: u32, w: u32, h: u32) -> Item {
        Item::new(id, id, "Base", FrameType::Normal).at(x, y, w, h)
    }

    #[test]
    fn test_single_item_placement() {
        let items = vec![item("a", 0, 0, 2, 3)];
        let layout = resolve(STANDARD_COLUMNS, &items);

        assert_eq!(
            layout.placement("a"),
            Some(GridPlacement {
                column_start: 1,
                row_start: 1,
                column_span: 2,
                row_span: 3,
            })
        );
        assert_eq!(layout.rows(), 3);
        assert!(layout.rejected().is_empty());
    }

    #[test]
    fn test_exceeds_columns_rejected() {
        let items = vec![item("edge", 11, 0, 1, 1), item("over", 11, 1, 2, 1)];
        let layout = resolve(12, &items);

        assert!(layout.is_placed("edge"));
        assert_eq!(
            layout.rejected(),
            &[PlacementError::ExceedsColumns {
                item_id: "over".into(),
                right: 13,
                columns: 12,
            }]
        );
    }

    #[test]
    fn test_row_at_u32_limit_rejected() {
        let items = vec![item("deep", 0, u32::MAX, 1, 1), item("next", 0, 0, 1, 1)];
        let layout = resolve(12, &items);

        assert_eq!(
            layout.rejected(),
            &[PlacementError::OutOfRange {
                item_id: "deep".into(),
                x: 0,
                y: u32::MAX,
                w: 1,
                h: 1,
            }]
        );
        assert!(layout.is_placed("next"));
        assert_eq!(layout.rows(), 1);
    }

    #[test]
    fn test_overflowing_edges_rejected() {
        let items = vec![
            item("wide", u32::MAX - 1, 0, 4, 1),
            item("tall", 0, u32::MAX - 2, 1, 5),
            item("ok", 0, 0, 1, 1),
        ];
        let layout = resolve(12, &items);

        let rejected: Vec<&str> = layout.rejected().iter().map(PlacementError::item_id).collect();
        assert_eq!(rejected, vec!["wide", "tall"]);
        assert!(matches!(layout.rejected()[0], PlacementError::OutOfRange { .. }));
        assert!(matches!(layout.rejected()[1], PlacementError::OutOfRange { .. }));
        assert!(layout.is_placed("ok"));
    }

    #[test]
    fn test_last_representable_row_is_placed() {
        let items = vec![
            item("bottom", 0, u32::MAX - 1, 1, 1),
            item("clipped", 0, u32::MAX - 2, 1, 5),
        ];
        let layout = resolve(12, &items);

        assert_eq!(
            layout.placement("bottom"),
            Some(GridPlacement {
                column_start: 1,
                row_start: u32::MAX,
                column_span: 1,
                row_span: 1,
            })
        );
        assert_eq!(layout.rows(), u32::MAX);
        // Rejected for its range, not as an overlap with a clamped rectangle.
        assert!(matches!(layout.rejected()[0], PlacementError::OutOfRange { .. }));
    }

    #[test]
    fn test_quad_capacity_accepts_wide_positions() {
        let items = vec![item("far", 20, 0, 2, 2)];

        assert!(resolve(24, &items).is_placed("far"));
        assert!(!resolve(12, &items).is_placed("far"));
    }

    #[test]
    fn test_empty_footprint_rejected() {
        let items = vec![item("flat", 0, 0, 0, 1), item("ok", 0, 0, 1, 1)];
        let layout = resolve(12, &items);

        assert_eq!(layout.rejected()[0].item_id(), "flat");
        assert!(layout.is_placed("ok"));
    }

    #[test]
    fn test_overlap_is_first_come() {
        let items = vec![
            item("wand", 3, 1, 1, 3),
            item("chest", 2, 0, 2, 3),
            item("after", 5, 0, 1, 1),
        ];
        let layout = resolve(12, &items);

        assert!(layout.is_placed("wand"));
        assert!(!layout.is_placed("chest"));
        assert!(layout.is_placed("after"));
        assert_eq!(
            layout.rejected(),
            &[PlacementError::Overlap {
                item_id: "chest".into(),
                other_id: "wand".into(),
            }]
        );
    }

    #[test]
    fn test_touching_items_do_not_overlap() {
        let items = vec![item("a", 0, 0, 2, 2), item("b", 2, 0, 2, 2), item("c", 0, 2, 4, 1)];
        let layout = resolve(12, &items);

        assert_eq!(layout.placed().len(), 3);
        assert_eq!(layout.rows(), 3);
    }

    #[test]
    fn test_accepted_footprints_never_intersect() {
        let mut items = Vec::new();
        for i in 0..40u32 {
            items.push(item(&format!("i{i}"), (i * 7) % 12, (i * 5) % 9, 1 + i % 3, 1 + i % 2));
        }
        let layout = resolve(12, &items);

        let accepted: Vec<Footprint> = items
            .iter()
            .filter(|i| layout.is_placed(&i.id))
            .map(Item::footprint)
            .collect();
        for (i, a) in accepted.iter().enumerate() {
            for b in &accepted[i + 1..] {
                assert!(!a.intersects(b), "{a:?} intersects {b:?}");
            }
        }
        assert_eq!(layout.placed().len() + layout.rejected().len(), items.len());
    }

    #[test]
    fn test_visible_keeps_filter_order_and_positions() {
        let items = vec![item("a", 0, 0, 1, 1), item("b", 1, 0, 1, 1), item("c", 0, 0, 1, 1)];
        let layout = resolve(12, &items);

        let filtered: Vec<&Item> = vec![&items[2], &items[1]];
        let visible = layout.visible(&filtered);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.id, "b");
        assert_eq!(visible[0].1, layout.placement("b").unwrap());
    }
}
