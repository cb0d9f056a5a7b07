//! Item modifiers.

use serde::{Deserialize, Serialize};

/// Sub-kind of a modifier. Only affects display emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModKind {
    /// Added at a crafting bench.
    Crafted,
    /// Enchantment.
    Enchant,
    /// Fractured (locked) modifier.
    Fractured,
}

impl ModKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crafted => "Crafted",
            Self::Enchant => "Enchant",
            Self::Fractured => "Fractured",
        }
    }
}

/// Numeric payload of a modifier: a single value or a closed range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    /// A single rolled value.
    Single(f64),
    /// A closed `[min, max]` range.
    Range(f64, f64),
}

/// A modifier line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    /// Modifier text without its numeric value.
    pub text: String,
    /// Optional sub-kind.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModKind>,
    /// Optional numeric payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<NumericValue>,
    /// Unit suffix appended to the value (e.g. `%`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
}

impl Mod {
    /// Creates a plain text modifier.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            numeric_value: None,
            value_suffix: None,
        }
    }

    /// Attaches a single numeric value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(NumericValue::Single(value));
        self
    }

    /// Attaches a `[min, max]` range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.numeric_value = Some(NumericValue::Range(min, max));
        self
    }

    /// Sets the unit suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = Some(suffix.into());
        self
    }

    /// Sets the sub-kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ModKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
