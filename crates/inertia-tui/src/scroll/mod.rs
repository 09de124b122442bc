//! Terminal host for the momentum scrolling engine
//!
//! The engine itself lives in `inertia_core::momentum`; this module adapts it
//! to a terminal: offsets are measured in fractional "pixels" of
//! `ui.row_height` per row, and frames come from a fixed-interval timer that
//! the event loop sleeps towards.
//!
//! # Architecture
//!
//! - `config` - Terminal-specific helpers over `UiConfig`
//! - `page` - `TerminalPage`, the `ScrollHost` for a block of text lines
//!
//! # Usage
//!
//! ```ignore
//! use inertia_core::momentum::{IntervalFrames, MomentumEngine};
//! use inertia_tui::scroll::{TerminalPage, UiConfigExt};
//!
//! let page = TerminalPage::new(lines.len(), viewport_rows, config.ui.row_height);
//! let frames = IntervalFrames::new(config.ui.frame_interval());
//! let mut engine = MomentumEngine::new(config.scroll, page, frames);
//! engine.start();
//! ```

pub mod config;
pub mod page;

pub use config::UiConfigExt;
pub use page::TerminalPage;
