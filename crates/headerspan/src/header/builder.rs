//! Flattening a displayed header tree into a [`HeaderModel`].
//!
//! The walk is depth-first and pre-order. A monotonically increasing leaf
//! counter assigns every leaf its position in the global leaf-index space.
//! Groups reserve their slot before their children are visited, so a group
//! always precedes its descendants, and the slot is backfilled once the
//! children's spans are known.
//!
//! Padding groups are pass-through: they emit nothing and their children stay
//! on the padding node's own row. A group none of whose children produced a
//! span is dropped again, and that absence propagates to its parent.

use headerspan_core::PerfSpan;
use headerspan_core::logging::{span_names, targets};

use super::entry::{Entry, EntryKind, Span};
use super::model::HeaderModel;
use super::node::{HeaderNode, NodeKind};

/// What a visited subtree contributed: its leaf span and the deepest row reached.
#[derive(Debug, Clone, Copy)]
struct Reach {
    leaves: Span,
    deepest: usize,
}

impl Reach {
    fn merge(acc: Option<Reach>, next: Option<Reach>) -> Option<Reach> {
        match (acc, next) {
            (Some(a), Some(b)) => Some(Reach {
                leaves: a.leaves.union(b.leaves),
                deepest: a.deepest.max(b.deepest),
            }),
            (a, b) => a.or(b),
        }
    }
}

#[derive(Debug, Default)]
struct ModelBuilder {
    entries: Vec<Entry>,
    leaf_counter: usize,
    discarded: usize,
}

impl ModelBuilder {
    fn visit(&mut self, node: &HeaderNode, depth: usize) -> Option<Reach> {
        match node.kind() {
            NodeKind::Leaf => {
                let leaves = Span::single(self.leaf_counter);
                self.leaf_counter += 1;
                self.entries.push(Entry::new(
                    node.key(),
                    EntryKind::Leaf,
                    leaves,
                    Span::single(depth),
                ));
                Some(Reach {
                    leaves,
                    deepest: depth,
                })
            }
            NodeKind::Group {
                children,
                padding: true,
            } => self.visit_children(children, depth),
            NodeKind::Group { children, .. } => {
                let slot = self.entries.len();
                self.entries.push(Entry::new(
                    node.key(),
                    EntryKind::Group,
                    Span::single(0),
                    Span::single(depth),
                ));

                match self.visit_children(children, depth + 1) {
                    Some(reach) => {
                        let entry = &mut self.entries[slot];
                        entry.set_leaves(reach.leaves);
                        entry.set_depth_end(reach.deepest);
                        Some(reach)
                    }
                    None => {
                        // Nothing was pushed after the placeholder.
                        self.entries.truncate(slot);
                        self.discarded += 1;
                        tracing::trace!(
                            target: targets::HEADER,
                            id = %node.id(),
                            "discarding header group without columns"
                        );
                        None
                    }
                }
            }
        }
    }

    fn visit_children(&mut self, children: &[HeaderNode], depth: usize) -> Option<Reach> {
        let mut reach = None;
        for child in children {
            let child_reach = self.visit(child, depth);
            reach = Reach::merge(reach, child_reach);
        }
        reach
    }

    fn finish(mut self) -> HeaderModel {
        let max_depth = self
            .entries
            .iter()
            .map(Entry::depth_end)
            .max()
            .unwrap_or(0);
        let min_depth = self
            .entries
            .iter()
            .map(Entry::depth_start)
            .min()
            .unwrap_or(0);

        // Leaves reach down to the bottom row; groups occupy their own row only.
        for entry in &mut self.entries {
            match entry.kind() {
                EntryKind::Leaf => entry.set_depth_end(max_depth),
                EntryKind::Group => entry.set_depth_end(entry.depth_start()),
            }
        }

        tracing::debug!(
            target: targets::HEADER,
            entries = self.entries.len(),
            leaves = self.leaf_counter,
            discarded = self.discarded,
            min_depth,
            max_depth,
            "built header model"
        );

        HeaderModel::new(self.entries, self.leaf_counter, min_depth, max_depth)
    }
}

/// Flattens a displayed header forest into a [`HeaderModel`].
///
/// The input is not modified. A finite tree always yields a well-formed model;
/// an empty forest yields an empty model.
pub fn build_model(roots: &[HeaderNode]) -> HeaderModel {
    let _perf = PerfSpan::new(span_names::BUILD_MODEL);
    let mut builder = ModelBuilder::default();
    for root in roots {
        builder.visit(root, 0);
    }
    builder.finish()
}
