//! # STASHGRID Catalog
//!
//! The static data model of a stash: tabs, the items stored in them, and the
//! modifiers, sockets and properties those items carry.
//!
//! ## Ownership
//!
//! ```text
//! Catalog ──owns──> Tab ──owns──> Item ──owns──> Mod / Socket / ItemProperty
//! ```
//!
//! The catalog is loaded once per session and never mutated. Every consumer
//! (filter pipeline, grid resolver, detail panel) borrows from it and returns
//! derived views.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stashgrid_catalog::Catalog;
//!
//! let catalog = Catalog::load("data/stash.toml")?;
//! for tab in catalog.tabs() {
//!     println!("{} ({} columns)", tab.name, tab.columns());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod error;
pub mod item;
pub mod modifier;
pub mod socket;
pub mod tab;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use item::{
    Footprint, FrameType, Influence, Item, ItemId, ItemProperty, PropertyValue, Requirement,
};
pub use modifier::{Mod, ModKind, NumericValue};
pub use socket::{link_groups, Socket, SocketAttr, SocketColour};
pub use tab::{Tab, TabColour, TabId, TabKind, QUAD_COLUMNS, STANDARD_COLUMNS};
