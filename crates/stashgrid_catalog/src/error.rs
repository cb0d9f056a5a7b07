//! # Catalog Error Types
//!
//! Everything that can go wrong while loading or querying a catalog.

use thiserror::Error;

/// Errors that can occur while building or querying a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog source is not valid TOML or does not match the schema.
    #[error("invalid catalog: {0}")]
    Parse(String),

    /// The catalog file could not be read.
    #[error("cannot read catalog {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Rendered I/O error.
        message: String,
    },

    /// Two tabs share the same identifier.
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),

    /// Two items share the same identifier.
    #[error("duplicate item id {item_id} (tab {tab_id})")]
    DuplicateItem {
        /// The repeated item id.
        item_id: String,
        /// Tab holding the second occurrence.
        tab_id: String,
    },

    /// A stack holds more than its cap.
    #[error("item {item_id}: stack size {stack_size} exceeds cap {max_stack_size}")]
    StackExceedsCap {
        /// Offending item.
        item_id: String,
        /// Declared stack size.
        stack_size: u32,
        /// Declared cap.
        max_stack_size: u32,
    },

    /// No tab with the requested identifier.
    #[error("tab not found: {0}")]
    TabNotFound(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
