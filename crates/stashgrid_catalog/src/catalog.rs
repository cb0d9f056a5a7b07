//! # Catalog
//!
//! The catalog exclusively owns every tab and item of a session.
//! It is built once, validated once and never mutated afterwards.
//!
//! ## File format
//!
//! ```toml
//! [[tabs]]
//! id = "tab1"
//! name = "Currency"
//! type = "CurrencyStash"
//! index = 0
//!
//! [[tabs.items]]
//! id = "curr1"
//! name = "Exalted Orb"
//! typeLine = "Exalted Orb"
//! w = 1
//! h = 1
//! x = 0
//! y = 0
//! frameType = 5
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::item::Item;
use crate::tab::Tab;

/// On-disk shape of a catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tabs: Vec<Tab>,
}

/// Read-only collection of tabs in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Tabs sorted by `index`.
    tabs: Vec<Tab>,
}

impl Catalog {
    /// Builds a catalog from tabs, validating structural invariants.
    ///
    /// Tabs are sorted by their `index`. Geometry is deliberately not checked
    /// here; the grid resolver reports it per item.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateTab`] if two tabs share an id
    /// - [`CatalogError::DuplicateItem`] if two items share an id
    /// - [`CatalogError::StackExceedsCap`] if a stack is larger than its cap
    pub fn from_tabs(mut tabs: Vec<Tab>) -> CatalogResult<Self> {
        let mut tab_ids = HashSet::with_capacity(tabs.len());
        let mut item_ids = HashSet::new();

        for tab in &tabs {
            if !tab_ids.insert(tab.id.as_str()) {
                return Err(CatalogError::DuplicateTab(tab.id.clone()));
            }
            for item in &tab.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItem {
                        item_id: item.id.clone(),
                        tab_id: tab.id.clone(),
                    });
                }
                if !item.stack_within_cap() {
                    tracing::warn!(item = %item.id, "stack size exceeds cap");
                    return Err(CatalogError::StackExceedsCap {
                        item_id: item.id.clone(),
                        stack_size: item.stack_size.unwrap_or_default(),
                        max_stack_size: item.max_stack_size.unwrap_or_default(),
                    });
                }
            }
        }

        tabs.sort_by_key(|tab| tab.index);
        Ok(Self { tabs })
    }

    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed input, or any error of
    /// [`Catalog::from_tabs`].
    pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let catalog = Self::from_tabs(file.tabs)?;
        tracing::info!(
            tabs = catalog.tabs.len(),
            items = catalog.item_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// see [`Catalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// First tab in display order.
    #[must_use]
    pub fn first_tab(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    /// Looks up a tab by id.
    #[must_use]
    pub fn tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == tab_id)
    }

    /// Items of a tab, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::TabNotFound`] for an unknown id.
    pub fn items(&self, tab_id: &str) -> CatalogResult<&[Item]> {
        self.tab(tab_id)
            .map(|tab| tab.items.as_slice())
            .ok_or_else(|| CatalogError::TabNotFound(tab_id.to_owned()))
    }

    /// Finds an item anywhere in the catalog, with its owning tab.
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<(&Tab, &Item)> {
        self.tabs
            .iter()
            .find_map(|tab| tab.item(item_id).map(|item| (tab, item)))
    }

    /// Total number of items across all tabs.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.tabs.iter().map(|tab| tab.items.len()).sum()
    }

    /// Returns true if the catalog has no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
