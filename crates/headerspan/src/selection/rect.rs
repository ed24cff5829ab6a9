//! Rectangles in `(leaf, depth)` space.

use std::fmt;

use crate::header::{Entry, Span};

/// An axis-aligned, inclusive rectangle over leaf columns and header rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRect {
    /// Leaf columns covered.
    pub leaves: Span,
    /// Header rows covered.
    pub depths: Span,
}

impl SelectionRect {
    pub const fn new(leaves: Span, depths: Span) -> Self {
        Self { leaves, depths }
    }

    /// The rectangle an entry occupies.
    pub fn of(entry: &Entry) -> Self {
        Self {
            leaves: entry.leaves(),
            depths: entry.depths(),
        }
    }

    /// The smallest rectangle covering two entries.
    pub fn spanning(a: &Entry, b: &Entry) -> Self {
        Self::of(a).union(&Self::of(b))
    }

    /// Returns true if the entry shares at least one cell with the rectangle.
    pub fn overlaps(&self, entry: &Entry) -> bool {
        self.leaves.intersects(entry.leaves()) && self.depths.intersects(entry.depths())
    }

    /// Returns true if the entry lies entirely inside the rectangle.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.leaves.contains(entry.leaves()) && self.depths.contains(entry.depths())
    }

    /// Returns true if the entry overlaps the rectangle without fitting inside it.
    pub fn is_cut_by(&self, entry: &Entry) -> bool {
        self.overlaps(entry) && !self.contains(entry)
    }

    /// The smallest rectangle covering both.
    pub fn union(&self, other: &SelectionRect) -> Self {
        Self {
            leaves: self.leaves.union(other.leaves),
            depths: self.depths.union(other.depths),
        }
    }

    /// Grows the rectangle to cover the entry. Returns true if it changed.
    pub fn grow_to(&mut self, entry: &Entry) -> bool {
        let grown = self.union(&Self::of(entry));
        let changed = grown != *self;
        *self = grown;
        changed
    }
}

impl fmt::Display for SelectionRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "leaves {} x rows {}", self.leaves, self.depths)
    }
}
