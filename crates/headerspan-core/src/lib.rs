//! Core systems for headerspan.
//!
//! This crate provides the plumbing shared by the header selection crate:
//!
//! - **Signal/Slot System**: Type-safe change notification for the renderer
//! - **Logging**: `tracing` targets, span names, tree dump options
//!
//! # Signal/Slot Example
//!
//! ```
//! use headerspan_core::Signal;
//!
//! let selection_changed = Signal::<Vec<String>>::new();
//!
//! let conn_id = selection_changed.connect(|ids| {
//!     println!("{} header cells selected", ids.len());
//! });
//!
//! selection_changed.emit(vec!["A1".to_string(), "A1_1".to_string()]);
//! selection_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::{PerfSpan, TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
