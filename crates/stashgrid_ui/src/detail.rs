//! # Item Detail Panel
//!
//! The content of the floating panel shown for the anchored item, derived
//! purely from an [`Item`]. Layout and drawing are left to the renderer.
//!
//! ## Section order
//!
//! ```text
//! Header        name, type line, influence, league
//! Status        Unidentified / Corrupted
//! Properties    "Armour: 500"
//! Quality       "Quality: +20%"          (not for gems)
//! ItemLevel     "Item Level: 86"
//! StackSize     "Stack Size: 3 / 10"
//! Requirements  "Requires Level 60, Int 150"
//! Sockets       "Sockets: R-G-B B-R"
//! Implicit / Explicit / Utility modifiers
//! Description, Flavour
//! ```
//!
//! A section with no data is omitted entirely.

use std::fmt;

use stashgrid_catalog::{
    link_groups, FrameType, Influence, Item, ItemId, ItemProperty, Mod, ModKind, NumericValue,
};

use crate::style::{self, Color};

/// Property display mode that appends the property's type code.
const DISPLAY_MODE_TYPED: u8 = 3;

/// Which part of the panel a section is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Name, type line, influence, league.
    Header,
    /// Unidentified / corrupted flags.
    Status,
    /// Item properties.
    Properties,
    /// Quality bonus.
    Quality,
    /// Item level.
    ItemLevel,
    /// Stack count.
    StackSize,
    /// Requirements.
    Requirements,
    /// Socket link groups.
    Sockets,
    /// Implicit modifiers.
    ImplicitMods,
    /// Explicit modifiers.
    ExplicitMods,
    /// Utility (flask) modifiers.
    UtilityMods,
    /// Usage description.
    Description,
    /// Flavour text.
    Flavour,
}

/// Display emphasis of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Coloured by rarity class.
    Rarity(FrameType),
    /// Coloured by influence.
    Influence(Influence),
    /// Regular text.
    Plain,
    /// Secondary text.
    Muted,
    /// Augmented value or magic-blue modifier.
    Augmented,
    /// Unidentified / corrupted.
    Warning,
    /// Tagged modifier.
    Modifier(ModKind),
    /// Flavour text.
    Flavour,
}

impl Tone {
    /// Palette colour for this tone.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Rarity(frame) => style::rarity_text(frame),
            Self::Influence(influence) => style::influence(influence),
            Self::Plain => Color::WHITE,
            Self::Muted => Color::MUTED,
            Self::Augmented => Color::AUGMENTED,
            Self::Warning => Color::CORRUPTED,
            Self::Modifier(kind) => style::modifier(kind),
            Self::Flavour => Color::FLAVOUR,
        }
    }
}

/// One line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    /// Rendered text.
    pub text: String,
    /// Emphasis.
    pub tone: Tone,
}

impl DetailLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// A non-empty group of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    /// Section identity.
    pub kind: SectionKind,
    /// Lines in display order.
    pub lines: Vec<DetailLine>,
}

/// Everything the detail panel shows for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    /// Item the panel describes.
    pub item_id: ItemId,
    /// Non-empty sections in display order.
    pub sections: Vec<DetailSection>,
}

impl ItemDetail {
    /// Builds the panel content for an item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        let mut builder = Builder::default();

        builder.header(item);
        builder.status(item);
        builder.properties(item);
        builder.quality(item);
        builder.item_level(item);
        builder.stack_size(item);
        builder.requirements(item);
        builder.sockets(item);
        builder.mods(SectionKind::ImplicitMods, &item.implicit_mods, Tone::Augmented);
        builder.mods(SectionKind::ExplicitMods, &item.explicit_mods, Tone::Augmented);
        builder.mods(SectionKind::UtilityMods, &item.utility_mods, Tone::Muted);
        builder.text(SectionKind::Description, item.descr_text.as_deref(), Tone::Muted);
        builder.text(SectionKind::Flavour, item.flavour_text.as_deref(), Tone::Flavour);

        Self {
            item_id: item.id.clone(),
            sections: builder.sections,
        }
    }

    /// Returns the section of the given kind, if present.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Returns the lines of a section (empty if the section is absent).
    #[must_use]
    pub fn lines(&self, kind: SectionKind) -> Vec<&str> {
        self.section(kind)
            .map(|s| s.lines.iter().map(|l| l.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Section kinds in display order.
    #[must_use]
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

impl fmt::Display for ItemDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f, "--------")?;
            }
            for line in &section.lines {
                writeln!(f, "{}", line.text)?;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Builder {
    sections: Vec<DetailSection>,
}

impl Builder {
    fn push(&mut self, kind: SectionKind, lines: Vec<DetailLine>) {
        if !lines.is_empty() {
            self.sections.push(DetailSection { kind, lines });
        }
    }

    fn header(&mut self, item: &Item) {
        let rarity = Tone::Rarity(item.frame_type);
        let mut lines = vec![DetailLine::new(&item.name, rarity)];
        if !item.type_line.is_empty() {
            lines.push(DetailLine::new(&item.type_line, rarity));
        }
        if let Some(influence) = item.influence {
            lines.push(DetailLine::new(
                format!("{} Influence", influence.label()),
                Tone::Influence(influence),
            ));
        }
        if let Some(league) = &item.league {
            lines.push(DetailLine::new(league, Tone::Muted));
        }
        self.push(SectionKind::Header, lines);
    }

    fn status(&mut self, item: &Item) {
        let mut lines = Vec::new();
        if item.is_unidentified() {
            lines.push(DetailLine::new("Unidentified", Tone::Warning));
        }
        if item.is_corrupted() {
            lines.push(DetailLine::new("Corrupted", Tone::Warning));
        }
        self.push(SectionKind::Status, lines);
    }

    fn properties(&mut self, item: &Item) {
        let lines = item.properties.iter().map(format_property).collect();
        self.push(SectionKind::Properties, lines);
    }

    fn quality(&mut self, item: &Item) {
        let Some(quality) = item.quality else { return };
        if quality > 0 && item.frame_type != FrameType::Gem {
            let line = DetailLine::new(format!("Quality: +{quality}%"), Tone::Augmented);
            self.push(SectionKind::Quality, vec![line]);
        }
    }

    fn item_level(&mut self, item: &Item) {
        if let Some(level) = item.item_level {
            let line = DetailLine::new(format!("Item Level: {level}"), Tone::Plain);
            self.push(SectionKind::ItemLevel, vec![line]);
        }
    }

    fn stack_size(&mut self, item: &Item) {
        let text = match (item.stack_size, item.max_stack_size) {
            (None, _) => return,
            (Some(size), None) => format!("Stack Size: {size}"),
            (Some(size), Some(cap)) => format!("Stack Size: {size} / {cap}"),
        };
        self.push(SectionKind::StackSize, vec![DetailLine::new(text, Tone::Plain)]);
    }

    fn requirements(&mut self, item: &Item) {
        if item.requirements.is_empty() {
            return;
        }
        let parts: Vec<String> = item
            .requirements
            .iter()
            .map(|req| match req.values.first() {
                Some(value) => format!("{} {}", req.name, value.text()),
                None => req.name.clone(),
            })
            .collect();
        let line = DetailLine::new(format!("Requires {}", parts.join(", ")), Tone::Plain);
        self.push(SectionKind::Requirements, vec![line]);
    }

    fn sockets(&mut self, item: &Item) {
        if item.sockets.is_empty() {
            return;
        }
        let line = DetailLine::new(format!("Sockets: {}", socket_string(item)), Tone::Plain);
        self.push(SectionKind::Sockets, vec![line]);
    }

    fn mods(&mut self, kind: SectionKind, mods: &[Mod], default_tone: Tone) {
        let lines = mods
            .iter()
            .map(|m| DetailLine::new(format_mod(m), m.kind.map_or(default_tone, Tone::Modifier)))
            .collect();
        self.push(kind, lines);
    }

    fn text(&mut self, kind: SectionKind, text: Option<&str>, tone: Tone) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.push(kind, vec![DetailLine::new(text, tone)]);
        }
    }
}

fn format_property(property: &ItemProperty) -> DetailLine {
    let values: Vec<&str> = property.values.iter().map(|v| v.text()).collect();
    let mut text = if values.is_empty() {
        property.name.clone()
    } else {
        format!("{}: {}", property.name, values.join(", "))
    };
    if property.display_mode == DISPLAY_MODE_TYPED {
        if let Some(kind) = property.kind {
            text.push_str(&format!(" (Type: {kind})"));
        }
    }
    let tone = if property.values.iter().any(|v| v.is_augmented()) {
        Tone::Augmented
    } else {
        Tone::Plain
    };
    DetailLine::new(text, tone)
}

/// Link groups as colour letters, e.g. `R-G-B B-R`.
#[must_use]
pub fn socket_string(item: &Item) -> String {
    link_groups(&item.sockets)
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|s| s.colour.letter().to_string())
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Link groups as gem colours, for drawing sockets on the grid cell.
#[must_use]
pub fn socket_colours(item: &Item) -> Vec<Vec<Color>> {
    link_groups(&item.sockets)
        .iter()
        .map(|group| group.iter().map(|s| style::socket(s.colour)).collect())
        .collect()
}

/// Formats a modifier line.
///
/// ```text
/// (Crafted) +25 to Strength
/// (40-50)% increased Fire Damage
/// Has no Sockets
/// ```
#[must_use]
pub fn format_mod(modifier: &Mod) -> String {
    let prefix = modifier
        .kind
        .map(|kind| format!("({}) ", kind.label()))
        .unwrap_or_default();

    let Some(value) = modifier.numeric_value else {
        return format!("{prefix}{}", modifier.text);
    };

    let signed = modifier.text.starts_with("to ") || modifier.text.starts_with("Adds ");
    let mut value = match value {
        NumericValue::Range(min, max) => format!("({min}-{max})"),
        NumericValue::Single(v) if v > 0.0 && signed => format!("+{v}"),
        NumericValue::Single(v) => format!("{v}"),
    };
    if let Some(suffix) = &modifier.value_suffix {
        value.push_str(suffix);
    }

    format!("{prefix}{value} {}", modifier.text)
}

/// Stack count shown on the grid cell, if any.
///
/// Shown when the item has a stack count above one, or when its cap is one.
#[must_use]
pub fn stack_badge(item: &Item) -> Option<u32> {
    let size = item.stack_size?;
    (size > 1 || item.max_stack_size == Some(1)).then_some(size)
}
