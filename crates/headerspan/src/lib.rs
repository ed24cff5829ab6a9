//! Headerspan - merge-safe rectangular selection over hierarchical column headers.
//!
//! A multi-row column header is a forest of leaf columns and header groups.
//! Group cells are merged cells: a shift-click range over the header must
//! never select part of one. This crate flattens the displayed header into an
//! indexed model and grows a selection rectangle until every merged cell is
//! either fully inside it or fully outside.
//!
//! # Example
//!
//! ```
//! use headerspan::prelude::*;
//!
//! let roots = vec![
//!     HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
//!     HeaderNode::leaf("c3"),
//! ];
//! let model = build_model(&roots);
//!
//! let c1 = roots[0].children()[0].key();
//! let c3 = roots[1].key();
//! let selection = select(&model, &c1, &c3);
//! assert_eq!(selection.len(), 4);
//! ```

pub use headerspan_core::{ConnectionGuard, ConnectionId, Signal};

pub mod config;
pub mod error;
pub mod events;
pub mod header;
pub mod prelude;
pub mod selection;

pub use error::{Error, Result};
