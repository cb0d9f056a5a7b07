//! Stash palette.
//!
//! Colour lookups for the rendering layer: rarity text and frame borders,
//! influence tags, socket gems and tab tints.

use stashgrid_catalog::{FrameType, Influence, ModKind, SocketColour, TabColour};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Muted grey for secondary text.
    pub const MUTED: Self = Self::hex(0x9C_A3_AF_FF);
    /// Corrupted / warning red.
    pub const CORRUPTED: Self = Self::hex(0xEF_44_44_FF);
    /// Augmented values and untagged modifiers.
    pub const AUGMENTED: Self = Self::hex(0x60_A5_FA_FF);
    /// Crafted modifier cyan.
    pub const CRAFTED: Self = Self::hex(0x67_E8_F9_FF);
    /// Enchant modifier violet.
    pub const ENCHANT: Self = Self::hex(0xD8_B4_FE_FF);
    /// Fractured modifier gold.
    pub const FRACTURED: Self = Self::hex(0xFD_E0_47_FF);
    /// Flavour text orange.
    pub const FLAVOUR: Self = Self::hex(0xFD_BA_74_FF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<TabColour> for Color {
    fn from(colour: TabColour) -> Self {
        Self::rgb8(colour.r, colour.g, colour.b)
    }
}

/// Name and type-line colour in the detail panel.
#[must_use]
pub const fn rarity_text(frame: FrameType) -> Color {
    match frame {
        FrameType::Normal => Color::WHITE,
        FrameType::Magic => Color::hex(0x60_A5_FA_FF),
        FrameType::Rare => Color::hex(0xFA_CC_15_FF),
        FrameType::Unique => Color::hex(0xF5_9E_0B_FF),
        FrameType::Gem => Color::hex(0x2D_D4_BF_FF),
        FrameType::Currency => Color::hex(0xFD_E0_47_FF),
        FrameType::DivinationCard => Color::hex(0xFD_BA_74_FF),
    }
}

/// Cell border colour in the grid.
#[must_use]
pub const fn rarity_border(frame: FrameType) -> Color {
    match frame {
        FrameType::Normal => Color::hex(0x52_52_52_FF),
        FrameType::Magic => Color::hex(0x3B_82_F6_FF),
        FrameType::Rare => Color::hex(0xFA_CC_15_FF),
        FrameType::Unique => Color::hex(0xD9_77_06_FF),
        FrameType::Gem => Color::hex(0x14_B8_A6_FF),
        FrameType::Currency => Color::hex(0xEA_B3_08_FF),
        FrameType::DivinationCard => Color::hex(0xFD_E0_47_FF),
    }
}

/// Influence label colour.
#[must_use]
pub const fn influence(influence: Influence) -> Color {
    match influence {
        Influence::Shaper => Color::hex(0x22_D3_EE_FF),
        Influence::Elder => Color::hex(0xC0_84_FC_FF),
        Influence::Crusader => Color::hex(0xEA_B3_08_FF),
        Influence::Redeemer => Color::hex(0x38_BD_F8_FF),
        Influence::Hunter => Color::hex(0x22_C5_5E_FF),
        Influence::Warlord => Color::hex(0xF9_73_16_FF),
    }
}

/// Socket gem colour.
#[must_use]
pub const fn socket(colour: SocketColour) -> Color {
    match colour {
        SocketColour::Red => Color::hex(0xDC_26_26_FF),
        SocketColour::Green => Color::hex(0x16_A3_4A_FF),
        SocketColour::Blue => Color::hex(0x25_63_EB_FF),
        SocketColour::White => Color::hex(0xD1_D5_DB_FF),
    }
}

/// Colour of a tagged modifier line.
#[must_use]
pub const fn modifier(kind: ModKind) -> Color {
    match kind {
        ModKind::Crafted => Color::CRAFTED,
        ModKind::Enchant => Color::ENCHANT,
        ModKind::Fractured => Color::FRACTURED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        let c = Color::hex(0xFF_00_80_FF);

        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tab_tint_conversion() {
        let tint = Color::from(TabColour { r: 255, g: 215, b: 0 });

        assert_eq!(tint, Color::hex(0xFF_D7_00_FF));
    }

    #[test]
    fn test_rarities_are_distinct() {
        for (i, a) in FrameType::ALL.iter().enumerate() {
            for b in &FrameType::ALL[i + 1..] {
                assert_ne!(rarity_text(*a), rarity_text(*b), "{a:?} / {b:?}");
            }
        }
    }
}
