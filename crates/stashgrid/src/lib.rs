//! # STASHGRID
//!
//! Stash viewer core: the catalog, the filter/grid/tooltip logic and the
//! session that ties them to input events.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          STASHGRID                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐   events   ┌──────────────┐   frame           │
//! │  │  UI / Input  │──────────> │ StashSession │──────────> render │
//! │  └──────────────┘            └──────┬───────┘                   │
//! │                                     │ borrows                   │
//! │                    ┌────────────────┴───────────────┐           │
//! │                    │                                │           │
//! │           ┌────────▼────────┐             ┌─────────▼───────┐   │
//! │           │ stashgrid_ui    │             │ stashgrid_      │   │
//! │           │ filter / grid / │────reads───>│ catalog         │   │
//! │           │ tooltip / detail│             │ tabs / items    │   │
//! │           └─────────────────┘             └─────────────────┘   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: configuration file
//! - `events`: input event channel
//! - `session`: selection state and event handling
//! - `frame`: per-frame render model

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod events;
pub mod frame;
pub mod session;

// Re-export the layers
pub use stashgrid_catalog as catalog;
pub use stashgrid_ui as ui;

pub use config::StashConfig;
pub use error::{ConfigError, ConfigResult, StashError, StashResult};
pub use events::{EventBus, EventReceiver, EventSender, StashEvent};
pub use frame::{ItemCell, StashFrame, TabEntry, TooltipView};
pub use session::StashSession;

/// The bundled sample catalog (three tabs, fifteen items).
pub const SAMPLE_CATALOG: &str = include_str!("../data/stash.toml");
