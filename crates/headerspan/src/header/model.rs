//! The flattened header model.

use super::builder::build_model;
use super::entry::{Entry, EntryKey, HeaderId};
use super::node::HeaderNode;

/// An ordered, indexed view of a displayed header tree.
///
/// Entries appear in display order (pre-order, depth-first). Every entry
/// carries its inclusive leaf span and its inclusive row interval:
///
/// - a leaf's row interval runs from its own row down to `max_depth`;
/// - a group occupies exactly its own row.
///
/// The model has no identity beyond one computation. It is rebuilt from the
/// live tree on every interaction and never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderModel {
    entries: Vec<Entry>,
    leaf_count: usize,
    min_depth: usize,
    max_depth: usize,
}

impl HeaderModel {
    pub(crate) fn new(
        entries: Vec<Entry>,
        leaf_count: usize,
        min_depth: usize,
        max_depth: usize,
    ) -> Self {
        Self {
            entries,
            leaf_count,
            min_depth,
            max_depth,
        }
    }

    /// Builds the model for a displayed header forest.
    pub fn from_tree(roots: &[HeaderNode]) -> Self {
        build_model(roots)
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaf columns; leaf indices run over `0..leaf_count`.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Topmost row used by any entry.
    pub fn min_depth(&self) -> usize {
        self.min_depth
    }

    /// Bottom row of the header.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Display position of the entry with exactly this key.
    pub fn position(&self, key: &EntryKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(key))
    }

    /// The entry with exactly this key.
    pub fn find(&self, key: &EntryKey) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.matches(key))
    }

    /// Every entry displayed under `id`, across all instances.
    pub fn find_all<'a>(&'a self, id: &'a HeaderId) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| entry.id() == id)
    }

    /// Leaf entries, in display order.
    pub fn leaves(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.is_leaf())
    }

    /// Group entries, in display order.
    pub fn groups(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.is_group())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HeaderModel {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

static_assertions::assert_impl_all!(HeaderModel: Send, Sync);
