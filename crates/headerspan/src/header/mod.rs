//! Hierarchical column headers.
//!
//! This module turns a multi-row column header into a flat, indexed model:
//!
//! - [`HeaderNode`]: the displayed tree handed over by the grid
//! - [`ColumnDefs`]: column configuration, projected into a displayed tree
//! - [`build_model`]: flattens a displayed tree into a [`HeaderModel`]
//! - [`Entry`]: one leaf column or header group with its leaf and row spans
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐ project ┌──────────────┐  build  ┌─────────────┐
//! │ ColumnDefs  │────────>│  HeaderNode  │────────>│ HeaderModel │
//! │ (config)    │         │  (displayed) │         │  (entries)  │
//! └─────────────┘         └──────────────┘         └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use headerspan::header::{HeaderModel, HeaderNode};
//!
//! let roots = vec![
//!     HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
//!     HeaderNode::leaf("c3"),
//! ];
//! let model = HeaderModel::from_tree(&roots);
//!
//! let c3 = &model.entries()[3];
//! assert_eq!((c3.leaf_start(), c3.leaf_end()), (2, 2));
//! assert_eq!((c3.depth_start(), c3.depth_end()), (0, 1));
//! ```

mod builder;
mod column;
mod debug;
mod entry;
mod model;
mod node;

pub use builder::build_model;
pub use column::{ColumnDef, ColumnDefs, DisplayedHeader, Pinned};
pub use debug::HeaderTreeDebug;
pub use entry::{Entry, EntryKey, EntryKind, HeaderId, InstanceId, Span};
pub use model::HeaderModel;
pub use node::{HeaderNode, NodeKind, find_by_id_in_forest, find_in_forest};
