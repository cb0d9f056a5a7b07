//! # Stash Tabs
//!
//! A tab is a named grid container. Its column capacity is fixed by its kind;
//! row capacity is unbounded (the grid grows downward).

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Unique identifier for a tab.
pub type TabId = String;

/// Columns of a quad tab.
pub const QUAD_COLUMNS: u32 = 24;

/// Columns of every other tab kind.
pub const STANDARD_COLUMNS: u32 = 12;

/// Kind of a stash tab (`type` on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabKind {
    /// Basic tab.
    #[serde(rename = "NormalStash")]
    Normal,
    /// Premium tab.
    #[serde(rename = "PremiumStash")]
    Premium,
    /// Quad tab (four times the cells).
    #[serde(rename = "QuadStash")]
    Quad,
    /// Currency tab.
    #[serde(rename = "CurrencyStash")]
    Currency,
    /// Map tab.
    #[serde(rename = "MapStash")]
    Map,
    /// Divination card tab.
    #[serde(rename = "DivinationCardStash")]
    DivinationCard,
    /// Any kind this catalog does not know about.
    #[serde(other)]
    Other,
}

impl TabKind {
    /// Column capacity for this kind.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> u32 {
        match self {
            Self::Quad => QUAD_COLUMNS,
            Self::Normal
            | Self::Premium
            | Self::Currency
            | Self::Map
            | Self::DivinationCard
            | Self::Other => STANDARD_COLUMNS,
        }
    }
}

/// Sidebar tint of a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabColour {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

/// A named container of items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier within the catalog.
    pub id: TabId,
    /// Display name.
    pub name: String,
    /// Tab kind.
    #[serde(rename = "type")]
    pub kind: TabKind,
    /// Display order.
    pub index: u32,
    /// Optional sidebar tint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<TabColour>,
    /// Items in storage order.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Tab {
    /// Creates an empty tab.
    #[must_use]
    pub fn new(id: impl Into<TabId>, name: impl Into<String>, kind: TabKind, index: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            index,
            colour: None,
            items: Vec::new(),
        }
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Column capacity.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.kind.columns()
    }

    /// Looks up an item of this tab by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_capacity_by_kind() {
        assert_eq!(TabKind::Quad.columns(), 24);
        assert_eq!(TabKind::Premium.columns(), 12);
        assert_eq!(TabKind::Currency.columns(), 12);
        assert_eq!(TabKind::Other.columns(), 12);
    }
}
