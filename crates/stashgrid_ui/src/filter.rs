//! # Filter Pipeline
//!
//! Pure function from (items, search text, rarity selector, category
//! selector) to the ordered subsequence of items passing all three stages.
//!
//! ```text
//! items ──> [1. text] ──> [2. rarity] ──> [3. category] ──> visible items
//! ```
//!
//! Stages compose by logical AND and the pipeline is a stable filter: it
//! never reorders. It holds no state, so identical inputs always produce
//! identical output.
//!
//! Selector strings come from a closed UI control. Anything outside the
//! known set is treated as `all` for that stage.

use std::fmt;

use stashgrid_catalog::{FrameType, Item};

/// Rarity selector. Only the four equipment-style classes are selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RaritySelector {
    /// No rarity filtering.
    #[default]
    All,
    /// Normal items only.
    Normal,
    /// Magic items only.
    Magic,
    /// Rare items only.
    Rare,
    /// Unique items only.
    Unique,
}

impl RaritySelector {
    /// Parses a selector value; unknown values become [`RaritySelector::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "normal" => Self::Normal,
            "magic" => Self::Magic,
            "rare" => Self::Rare,
            "unique" => Self::Unique,
            other => {
                tracing::debug!(selector = other, "unknown rarity selector, using all");
                Self::All
            }
        }
    }

    /// The rarity class this selector requires, or `None` for `all`.
    #[must_use]
    pub const fn frame_type(self) -> Option<FrameType> {
        match self {
            Self::All => None,
            Self::Normal => Some(FrameType::Normal),
            Self::Magic => Some(FrameType::Magic),
            Self::Rare => Some(FrameType::Rare),
            Self::Unique => Some(FrameType::Unique),
        }
    }

    /// Wire value of the selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Normal => "normal",
            Self::Magic => "magic",
            Self::Rare => "rare",
            Self::Unique => "unique",
        }
    }

    /// Returns true if the item passes this stage.
    #[must_use]
    pub fn matches(self, item: &Item) -> bool {
        self.frame_type()
            .map_or(true, |required| item.frame_type == required)
    }
}

impl fmt::Display for RaritySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// No category filtering.
    #[default]
    All,
    /// Currency items.
    Currency,
    /// Equipment (equipment-style rarity, neither flask nor map).
    Equipment,
    /// Maps.
    Map,
    /// Skill gems.
    Gem,
    /// Flasks.
    Flask,
    /// Divination cards.
    Divcard,
}

impl CategorySelector {
    /// Parses a selector value; unknown values become [`CategorySelector::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "currency" => Self::Currency,
            "equipment" => Self::Equipment,
            "map" => Self::Map,
            "gem" => Self::Gem,
            "flask" => Self::Flask,
            "divcard" => Self::Divcard,
            other => {
                tracing::debug!(selector = other, "unknown category selector, using all");
                Self::All
            }
        }
    }

    /// Wire value of the selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Currency => "currency",
            Self::Equipment => "equipment",
            Self::Map => "map",
            Self::Gem => "gem",
            Self::Flask => "flask",
            Self::Divcard => "divcard",
        }
    }

    /// Returns true if the item passes this stage.
    ///
    /// Flask/map/equipment classification is a case-insensitive substring
    /// test on the base-type label. A label that happens to contain "map" or
    /// "flask" is classified by that label.
    #[must_use]
    pub fn matches(self, item: &Item) -> bool {
        let frame = item.frame_type;
        match self {
            Self::All => true,
            Self::Currency => frame == FrameType::Currency,
            Self::Gem => frame == FrameType::Gem,
            Self::Divcard => frame == FrameType::DivinationCard,
            Self::Flask => frame.is_equipment_style() && label_contains(item, "flask"),
            Self::Map => frame.is_equipment_style() && label_contains(item, "map"),
            Self::Equipment => {
                frame.is_equipment_style()
                    && !label_contains(item, "flask")
                    && !label_contains(item, "map")
            }
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring test on the base-type label.
/// `needle` must already be lower-case.
fn label_contains(item: &Item, needle: &str) -> bool {
    item.type_line.to_lowercase().contains(needle)
}

/// The committed values of all filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Free-text search; empty disables the text stage.
    pub search: String,
    /// Rarity stage.
    pub rarity: RaritySelector,
    /// Category stage.
    pub category: CategorySelector,
}

impl FilterQuery {
    /// A query that lets everything through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the rarity selector.
    #[must_use]
    pub const fn with_rarity(mut self, rarity: RaritySelector) -> Self {
        self.rarity = rarity;
        self
    }

    /// Sets the category selector.
    #[must_use]
    pub const fn with_category(mut self, category: CategorySelector) -> Self {
        self.category = category;
        self
    }

    /// Returns true when no stage is active.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty()
            && self.rarity == RaritySelector::All
            && self.category == CategorySelector::All
    }

    /// Runs all three stages against one item.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        TextStage::new(&self.search).matches(item)
            && self.rarity.matches(item)
            && self.category.matches(item)
    }
}

/// Stage 1 with the search text lower-cased once.
struct TextStage {
    needle: Option<String>,
}

impl TextStage {
    fn new(search: &str) -> Self {
        Self {
            needle: (!search.is_empty()).then(|| search.to_lowercase()),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        item.name.to_lowercase().contains(needle.as_str())
            || item.type_line.to_lowercase().contains(needle.as_str())
    }
}

/// Filters items through all three stages, preserving relative order.
///
/// Accepts any iterator of item references so an already filtered sequence
/// can be fed back in.
#[must_use]
pub fn filter_items<'a, I>(items: I, query: &FilterQuery) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    if query.is_pass_through() {
        return items.into_iter().collect();
    }
    let text = TextStage::new(&query.search);
    items
        .into_iter()
        .filter(|item| text.matches(item))
        .filter(|item| query.rarity.matches(item))
        .filter(|item| query.category.matches(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, type_line: &str, frame: FrameType) -> Item {
        Item::new(id, name, type_line, frame)
    }

    fn sample() -> Vec<Item> {
        vec![
            item("c1", "Exalted Orb", "Exalted Orb", FrameType::Currency),
            item("c2", "Chaos Orb", "Chaos Orb", FrameType::Currency),
            item("u1", "Kaom's Heart", "Glorious Plate", FrameType::Unique),
            item("f1", "Chemist's Granite Flask", "Granite Flask", FrameType::Magic),
            item("m1", "Corrupted Strand Map", "Strand Map", FrameType::Rare),
            item("g1", "Vaal Arc", "Arc", FrameType::Gem),
            item("d1", "The Doctor", "The Doctor", FrameType::DivinationCard),
            item("n1", "Linked Chainmail", "Chainmail Vest", FrameType::Normal),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_search_exalted() {
        let items = sample();
        let query = FilterQuery::new().with_search("exalted");

        assert_eq!(ids(&filter_items(&items, &query)), vec!["c1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_type_line() {
        let items = sample();
        let query = FilterQuery::new().with_search("PLATE");

        assert_eq!(ids(&filter_items(&items, &query)), vec!["u1"]);
    }

    #[test]
    fn test_search_is_substring_not_token() {
        let items = sample();
        let query = FilterQuery::new().with_search("rb");

        assert_eq!(ids(&filter_items(&items, &query)), vec!["c1", "c2"]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = sample();
        let result = filter_items(&items, &FilterQuery::new());

        assert_eq!(result.len(), items.len());
        assert!(result.iter().zip(&items).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_rarity_selector_exact_match() {
        let items = sample();
        for selector in [
            RaritySelector::Normal,
            RaritySelector::Magic,
            RaritySelector::Rare,
            RaritySelector::Unique,
        ] {
            let query = FilterQuery::new().with_rarity(selector);
            let result = filter_items(&items, &query);
            assert_eq!(result.len(), 1);
            assert!(result
                .iter()
                .all(|i| Some(i.frame_type) == selector.frame_type()));
        }
    }

    #[test]
    fn test_rarity_never_passes_currency_gem_or_card() {
        let items = sample();
        for selector in [
            RaritySelector::Normal,
            RaritySelector::Magic,
            RaritySelector::Rare,
            RaritySelector::Unique,
        ] {
            let query = FilterQuery::new().with_rarity(selector);
            assert!(filter_items(&items, &query)
                .iter()
                .all(|i| i.frame_type.is_equipment_style()));
        }
    }

    #[test]
    fn test_unknown_selectors_mean_all() {
        assert_eq!(RaritySelector::parse("currency"), RaritySelector::All);
        assert_eq!(RaritySelector::parse("legendary"), RaritySelector::All);
        assert_eq!(CategorySelector::parse("weapons"), CategorySelector::All);
        assert_eq!(CategorySelector::parse(""), CategorySelector::All);
        assert_eq!(RaritySelector::parse("unique"), RaritySelector::Unique);
        assert_eq!(CategorySelector::parse("divcard"), CategorySelector::Divcard);
    }

    #[test]
    fn test_category_flask_vs_map() {
        let flask = item("f", "Flask", "Granite Flask", FrameType::Magic);
        let map = item("m", "Map", "Strand Map", FrameType::Magic);

        assert!(CategorySelector::Flask.matches(&flask));
        assert!(!CategorySelector::Flask.matches(&map));
        assert!(CategorySelector::Map.matches(&map));
        assert!(!CategorySelector::Equipment.matches(&flask));
        assert!(!CategorySelector::Equipment.matches(&map));
    }

    #[test]
    fn test_category_classification_table() {
        let items = sample();
        let cases = [
            (CategorySelector::Currency, vec!["c1", "c2"]),
            (CategorySelector::Equipment, vec!["u1", "n1"]),
            (CategorySelector::Map, vec!["m1"]),
            (CategorySelector::Gem, vec!["g1"]),
            (CategorySelector::Flask, vec!["f1"]),
            (CategorySelector::Divcard, vec!["d1"]),
        ];

        for (category, expected) in cases {
            let query = FilterQuery::new().with_category(category);
            assert_eq!(ids(&filter_items(&items, &query)), expected, "{category}");
        }
    }

    #[test]
    fn test_card_named_map_is_not_a_map() {
        let card = item("d", "The Cartographer", "Map Card", FrameType::DivinationCard);
        assert!(!CategorySelector::Map.matches(&card));
        assert!(CategorySelector::Divcard.matches(&card));
    }

    #[test]
    fn test_stages_compose_with_and() {
        let items = sample();
        let query = FilterQuery::new()
            .with_search("orb")
            .with_rarity(RaritySelector::Rare);

        assert!(filter_items(&items, &query).is_empty());

        let query = FilterQuery::new()
            .with_search("a")
            .with_category(CategorySelector::Flask);
        assert_eq!(ids(&filter_items(&items, &query)), vec!["f1"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let queries = [
            FilterQuery::new().with_search("o"),
            FilterQuery::new().with_category(CategorySelector::Equipment),
            FilterQuery::new()
                .with_search("a")
                .with_rarity(RaritySelector::Magic),
        ];

        for query in &queries {
            let once = filter_items(&items, query);
            let twice = filter_items(once.iter().copied(), query);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn test_query_matches_agrees_with_pipeline() {
        let items = sample();
        let query = FilterQuery::new()
            .with_search("or")
            .with_category(CategorySelector::Currency);

        let expected: Vec<String> = items
            .iter()
            .filter(|i| query.matches(i))
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(ids(&filter_items(&items, &query)), expected);
        assert!(!query.is_pass_through());
        assert!(FilterQuery::new().is_pass_through());
    }
}
