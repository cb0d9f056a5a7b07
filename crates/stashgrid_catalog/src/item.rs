//! # Items
//!
//! A single item occupying a rectangular footprint inside one tab.
//! Items are immutable value data for the whole session.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::modifier::Mod;
use crate::socket::Socket;

/// Unique identifier for an item.
pub type ItemId = String;

/// Rarity class of an item (`frameType` on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum FrameType {
    /// Plain base item.
    Normal = 0,
    /// Magic item.
    Magic = 1,
    /// Rare item.
    Rare = 2,
    /// Unique item.
    Unique = 3,
    /// Skill gem.
    Gem = 4,
    /// Currency.
    Currency = 5,
    /// Divination card.
    DivinationCard = 6,
}

impl FrameType {
    /// All rarity classes in wire order.
    pub const ALL: [Self; 7] = [
        Self::Normal,
        Self::Magic,
        Self::Rare,
        Self::Unique,
        Self::Gem,
        Self::Currency,
        Self::DivinationCard,
    ];

    /// Returns true for the four equipment-style classes (Normal..=Unique).
    #[inline]
    #[must_use]
    pub const fn is_equipment_style(self) -> bool {
        match self {
            Self::Normal | Self::Magic | Self::Rare | Self::Unique => true,
            Self::Gem | Self::Currency | Self::DivinationCard => false,
        }
    }
}

impl TryFrom<u8> for FrameType {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Magic),
            2 => Ok(Self::Rare),
            3 => Ok(Self::Unique),
            4 => Ok(Self::Gem),
            5 => Ok(Self::Currency),
            6 => Ok(Self::DivinationCard),
            other => Err(CatalogError::Parse(format!("unknown frameType {other}"))),
        }
    }
}

impl From<FrameType> for u8 {
    fn from(frame: FrameType) -> Self {
        frame as u8
    }
}

/// Influence tag carried by some equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Influence {
    /// The Shaper.
    Shaper,
    /// The Elder.
    Elder,
    /// Crusader.
    Crusader,
    /// Redeemer.
    Redeemer,
    /// Hunter.
    Hunter,
    /// Warlord.
    Warlord,
}

impl Influence {
    /// Capitalized display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shaper => "Shaper",
            Self::Elder => "Elder",
            Self::Crusader => "Crusader",
            Self::Redeemer => "Redeemer",
            Self::Hunter => "Hunter",
            Self::Warlord => "Warlord",
        }
    }
}

/// One value of a property or requirement: display text plus style code.
///
/// Style `1` marks a value augmented by quality or modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue(pub String, pub u8);

impl PropertyValue {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Returns true when the value should be highlighted.
    #[must_use]
    pub const fn is_augmented(&self) -> bool {
        self.1 == 1
    }
}

/// A named property line (armour, damage, map tier...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProperty {
    /// Property name.
    pub name: String,
    /// Values in display order.
    #[serde(default)]
    pub values: Vec<PropertyValue>,
    /// Display mode code.
    #[serde(default)]
    pub display_mode: u8,
    /// Optional property type code.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
}

/// Requirements share the property shape.
pub type Requirement = ItemProperty;

/// Cell rectangle `[x, x+w) × [y, y+h)` of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Left column (0-based).
    pub x: u32,
    /// Top row (0-based).
    pub y: u32,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Footprint {
    /// Creates a footprint.
    #[must_use]
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge, saturating at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge, saturating at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Exclusive right edge, or `None` if it overflows.
    #[inline]
    #[must_use]
    pub const fn checked_right(&self) -> Option<u32> {
        self.x.checked_add(self.w)
    }

    /// Exclusive bottom edge, or `None` if it overflows.
    #[inline]
    #[must_use]
    pub const fn checked_bottom(&self) -> Option<u32> {
        self.y.checked_add(self.h)
    }

    /// Returns true if the footprint covers no cell.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Returns true if both rectangles share at least one cell.
    ///
    /// Edges are compared in `u64`, so footprints reaching past
    /// `u32::MAX` are not clamped.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        spans_overlap(self.x, self.w, other.x, other.w)
            && spans_overlap(self.y, self.h, other.y, other.h)
    }
}

fn spans_overlap(a: u32, a_len: u32, b: u32, b_len: u32) -> bool {
    let (a, a_len, b, b_len) = (u64::from(a), u64::from(a_len), u64::from(b), u64::from(b_len));
    a < b + b_len && b < a + a_len
}

/// An item stored in a tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name, e.g. "Kaom's Heart".
    pub name: String,
    /// Base-type label, e.g. "Glorious Plate".
    #[serde(default)]
    pub type_line: String,
    /// Icon reference (URL or asset key).
    #[serde(default)]
    pub icon: String,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
    /// Left column (0-based).
    pub x: u32,
    /// Top row (0-based).
    pub y: u32,
    /// Rarity class.
    pub frame_type: FrameType,
    /// Current stack count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_size: Option<u32>,
    /// Stack cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stack_size: Option<u32>,
    /// Quality percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    /// Item level.
    #[serde(default, rename = "ilvl", skip_serializing_if = "Option::is_none")]
    pub item_level: Option<u32>,
    /// Identified flag; `Some(false)` means unidentified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identified: Option<bool>,
    /// Corrupted flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrupted: Option<bool>,
    /// Influence tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence: Option<Influence>,
    /// League tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    /// Property lines.
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
    /// Requirement lines.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    /// Sockets.
    #[serde(default)]
    pub sockets: Vec<Socket>,
    /// Implicit modifiers.
    #[serde(default)]
    pub implicit_mods: Vec<Mod>,
    /// Explicit modifiers.
    #[serde(default)]
    pub explicit_mods: Vec<Mod>,
    /// Utility modifiers (flasks).
    #[serde(default)]
    pub utility_mods: Vec<Mod>,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr_text: Option<String>,
    /// Flavour text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavour_text: Option<String>,
}

impl Item {
    /// Creates a 1x1 item at the origin with no optional data.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        type_line: impl Into<String>,
        frame_type: FrameType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_line: type_line.into(),
            icon: String::new(),
            w: 1,
            h: 1,
            x: 0,
            y: 0,
            frame_type,
            stack_size: None,
            max_stack_size: None,
            quality: None,
            item_level: None,
            identified: None,
            corrupted: None,
            influence: None,
            league: None,
            properties: Vec::new(),
            requirements: Vec::new(),
            sockets: Vec::new(),
            implicit_mods: Vec::new(),
            explicit_mods: Vec::new(),
            utility_mods: Vec::new(),
            descr_text: None,
            flavour_text: None,
        }
    }

    /// Moves and resizes the item.
    #[must_use]
    pub fn at(mut self, x: u32, y: u32, w: u32, h: u32) -> Self {
        self.x = x;
        self.y = y;
        self.w = w;
        self.h = h;
        self
    }

    /// Sets the stack count and cap.
    #[must_use]
    pub fn with_stack(mut self, size: u32, max: Option<u32>) -> Self {
        self.stack_size = Some(size);
        self.max_stack_size = max;
        self
    }

    /// The cell rectangle this item occupies.
    #[inline]
    #[must_use]
    pub const fn footprint(&self) -> Footprint {
        Footprint::new(self.x, self.y, self.w, self.h)
    }

    /// Returns true if the stack count is within its cap (or either is absent).
    #[must_use]
    pub fn stack_within_cap(&self) -> bool {
        match (self.stack_size, self.max_stack_size) {
            (Some(size), Some(max)) => size <= max,
            _ => true,
        }
    }

    /// Returns true only when explicitly marked unidentified.
    #[must_use]
    pub fn is_unidentified(&self) -> bool {
        self.identified == Some(false)
    }

    /// Returns true when marked corrupted.
    #[must_use]
    pub fn is_corrupted(&self) -> bool {
        self.corrupted == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_type_roundtrip_codes() {
        for frame in FrameType::ALL {
            assert_eq!(FrameType::try_from(u8::from(frame)), Ok(frame));
        }
        assert!(FrameType::try_from(7).is_err());
    }

    #[test]
    fn test_equipment_style_classes() {
        assert!(FrameType::Unique.is_equipment_style());
        assert!(FrameType::Normal.is_equipment_style());
        assert!(!FrameType::Gem.is_equipment_style());
        assert!(!FrameType::Currency.is_equipment_style());
        assert!(!FrameType::DivinationCard.is_equipment_style());
    }

    #[test]
    fn test_footprint_intersection() {
        let chest = Footprint::new(0, 0, 2, 3);
        let touching = Footprint::new(2, 0, 2, 3);
        let overlapping = Footprint::new(1, 2, 1, 1);

        assert!(!chest.intersects(&touching));
        assert!(chest.intersects(&overlapping));
        assert!(overlapping.intersects(&chest));
    }

    #[test]
    fn test_footprint_edges_past_u32_limit() {
        let deep = Footprint::new(0, u32::MAX - 2, 1, 5);
        let below = Footprint::new(0, u32::MAX - 1, 1, 1);
        let far = Footprint::new(0, 10, 1, 1);

        assert_eq!(deep.checked_bottom(), None);
        assert_eq!(deep.bottom(), u32::MAX);
        assert_eq!(below.checked_bottom(), Some(u32::MAX));
        assert!(deep.intersects(&below));
        assert!(!deep.intersects(&far));
    }

    #[test]
    fn test_stack_cap() {
        let orb = Item::new("c1", "Chaos Orb", "Chaos Orb", FrameType::Currency);
        assert!(orb.stack_within_cap());
        assert!(orb.clone().with_stack(10, Some(10)).stack_within_cap());
        assert!(!orb.clone().with_stack(11, Some(10)).stack_within_cap());
        assert!(orb.with_stack(11, None).stack_within_cap());
    }
}
