//! Human-readable dumps of displayed trees and flattened models.
//!
//! ```
//! use headerspan::header::{HeaderNode, HeaderTreeDebug};
//!
//! let roots = vec![
//!     HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
//!     HeaderNode::leaf("c3"),
//! ];
//! let dump = HeaderTreeDebug::new().format_forest(&roots);
//! assert!(dump.contains("G1"));
//! ```

use std::fmt::Write as FmtWrite;

use headerspan_core::TreeFormatOptions;

use super::entry::EntryKind;
use super::model::HeaderModel;
use super::node::HeaderNode;

/// Debug utility for visualizing header trees and models.
#[derive(Debug, Clone, Default)]
pub struct HeaderTreeDebug {
    options: TreeFormatOptions,
}

impl HeaderTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format a displayed forest, one node per line.
    pub fn format_forest(&self, roots: &[HeaderNode]) -> String {
        let mut output = String::new();
        let leaves: usize = roots.iter().map(HeaderNode::leaf_count).sum();
        let _ = writeln!(output, "Header Tree ({} columns):", leaves);

        if roots.is_empty() {
            output.push_str("  (empty)\n");
            return output;
        }

        let count = roots.len();
        for (i, root) in roots.iter().enumerate() {
            self.format_node_into(root, 0, i + 1 == count, &mut output);
        }
        output
    }

    fn format_node_into(&self, node: &HeaderNode, depth: usize, is_last: bool, output: &mut String) {
        if let Some(max) = self.options.max_depth {
            if depth > max {
                return;
            }
        }

        // Hidden padding passes its children through at the same level.
        if node.is_padding() && !self.options.show_padding {
            let count = node.children().len();
            for (i, child) in node.children().iter().enumerate() {
                self.format_node_into(child, depth, is_last && i + 1 == count, output);
            }
            return;
        }

        output.push_str(&self.options.prefix(depth, is_last));
        output.push_str(node.id().as_str());
        if node.is_padding() {
            output.push_str(" (padding)");
        } else if !node.is_leaf() {
            output.push_str(" (group)");
        }
        if self.options.show_instances {
            let _ = write!(output, " [{}]", node.instance());
        }
        output.push('\n');

        let count = node.children().len();
        for (i, child) in node.children().iter().enumerate() {
            self.format_node_into(child, depth + 1, i + 1 == count, output);
        }
    }

    /// Format a flattened model, one entry per line with its spans.
    pub fn format_model(&self, model: &HeaderModel) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Header Model ({} entries, {} columns, rows {}..={}):",
            model.len(),
            model.leaf_count(),
            model.min_depth(),
            model.max_depth()
        );
        for entry in model {
            let kind = match entry.kind() {
                EntryKind::Leaf => "leaf",
                EntryKind::Group => "group",
            };
            let _ = write!(
                output,
                "  {:<5} {} leaves {} rows {}",
                kind,
                entry.id(),
                entry.leaves(),
                entry.depths()
            );
            if self.options.show_instances {
                let _ = write!(output, " [{}]", entry.instance());
            }
            output.push('\n');
        }
        output
    }
}
