//! Merge-safe rectangular selection over a flattened header.
//!
//! - [`select`] / [`select_with`]: the stateless selection engine
//! - [`SelectionRect`]: rectangles in `(leaf, depth)` space
//! - [`HeaderSelection`]: the click and shift-click session driving the engine
//!
//! # Example
//!
//! ```
//! use headerspan::header::{HeaderModel, HeaderNode};
//! use headerspan::selection::select;
//!
//! let roots = vec![
//!     HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
//!     HeaderNode::leaf("c3"),
//! ];
//! let model = HeaderModel::from_tree(&roots);
//!
//! let c1 = roots[0].children()[0].key();
//! let c2 = roots[0].children()[1].key();
//! let selection = select(&model, &c1, &c2);
//! assert!(selection.contains("G1"));
//! assert_eq!(selection.len(), 3);
//! ```

mod engine;
mod rect;
mod session;

pub use engine::{
    Selection, SelectionPath, SelectionPolicy, collect_overlapping, dedupe_contained,
    expand_to_fixed_point, select, select_with,
};
pub use rect::SelectionRect;
pub use session::{HeaderSelection, SessionState};

static_assertions::assert_impl_all!(Selection: Send, Sync);
static_assertions::assert_impl_all!(SelectionRect: Send, Sync);
