//! # STASHGRID UI Logic
//!
//! The three pure computations behind the stash viewer, plus the detail
//! panel model and palette they feed.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        STASH VIEW                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Tab items ──> Grid resolver ──> placements (unfiltered)     │
//! │      │                                  │                    │
//! │      └──> Filter pipeline ──> visible ──┴──> rendered cells  │
//! │                                                              │
//! │  Pointer ──> Tooltip manager ──> panel (left, top)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here draws or holds global state. Callers own the catalog and
//! the selection state and pass them in by reference.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod detail;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod style;
pub mod tooltip;

pub use detail::{
    format_mod, socket_colours, socket_string, stack_badge, DetailLine, DetailSection, ItemDetail,
    SectionKind, Tone,
};
pub use filter::{filter_items, CategorySelector, FilterQuery, RaritySelector};
pub use geometry::{Point, Size};
pub use grid::{resolve, GridLayout, GridPlacement, PlacementError};
pub use style::Color;
pub use tooltip::{place_panel, TooltipConfig, TooltipManager, TooltipPlacement, DEFAULT_MARGIN};
