//! Identifiers and flattened entries of a header model.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Stable identifier of a leaf column or header group.
///
/// Ids come from the column configuration and survive tree rebuilds. They are
/// not unique within one displayed tree: a group split across pinned sections
/// is displayed once per section under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderId(String);

impl HeaderId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HeaderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for HeaderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for HeaderId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HeaderId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Counter for generating unique instance IDs.
static INSTANCE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifier of one displayed node instance.
///
/// Every call to [`InstanceId::next`] yields a value never handed out before in
/// this process, so a tree rebuilt from the same configuration has entirely new
/// instances and anchors remembered from the old tree no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocates a fresh, process-unique instance id.
    pub fn next() -> Self {
        Self(INSTANCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw value, for collaborators that mint their own instance ids.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The `(id, instance)` pair that identifies a clicked header cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    /// Stable configuration id.
    pub id: HeaderId,
    /// Instance within the current displayed tree.
    pub instance: InstanceId,
}

impl EntryKey {
    /// Creates a key from its parts.
    pub fn new(id: impl Into<HeaderId>, instance: InstanceId) -> Self {
        Self {
            id: id.into(),
            instance,
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.id, self.instance)
    }
}

/// Whether an entry is an atomic column or a merged group cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A leaf column.
    Leaf,
    /// A header group spanning one or more leaf columns.
    Group,
}

/// An inclusive integer interval.
///
/// Used for both axes of the header: the leaf-index axis (columns, left to
/// right in display order) and the depth axis (header rows, top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index covered.
    pub start: usize,
    /// Last index covered.
    pub end: usize,
}

impl Span {
    /// Creates a span, normalizing the bounds so that `start <= end`.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A span covering exactly one index.
    pub const fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Number of indices covered.
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns true if `index` lies within the span.
    pub const fn contains_index(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Returns true if `other` lies entirely within this span.
    pub const fn contains(&self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Returns true if the two spans share at least one index.
    pub const fn intersects(&self, other: Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns true if this span contains `other` and is larger than it.
    pub fn is_strict_superset_of(&self, other: Span) -> bool {
        self.contains(other) && *self != other
    }

    /// The smallest span covering both.
    pub fn union(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// One row of the flattened header model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: EntryKey,
    kind: EntryKind,
    leaves: Span,
    depths: Span,
}

impl Entry {
    /// Creates an entry.
    pub fn new(key: EntryKey, kind: EntryKind, leaves: Span, depths: Span) -> Self {
        Self {
            key,
            kind,
            leaves,
            depths,
        }
    }

    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    pub fn id(&self) -> &HeaderId {
        &self.key.id
    }

    pub fn instance(&self) -> InstanceId {
        self.key.instance
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == EntryKind::Leaf
    }

    pub fn is_group(&self) -> bool {
        self.kind == EntryKind::Group
    }

    /// The range of leaf indices this entry covers.
    pub fn leaves(&self) -> Span {
        self.leaves
    }

    /// The range of header rows this entry occupies.
    pub fn depths(&self) -> Span {
        self.depths
    }

    pub fn leaf_start(&self) -> usize {
        self.leaves.start
    }

    pub fn leaf_end(&self) -> usize {
        self.leaves.end
    }

    pub fn depth_start(&self) -> usize {
        self.depths.start
    }

    pub fn depth_end(&self) -> usize {
        self.depths.end
    }

    /// Returns true if `key` names this entry exactly (id and instance).
    pub fn matches(&self, key: &EntryKey) -> bool {
        self.key == *key
    }

    pub(crate) fn set_leaves(&mut self, leaves: Span) {
        self.leaves = leaves;
    }

    pub(crate) fn set_depth_end(&mut self, depth_end: usize) {
        self.depths.end = depth_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_normalizes() {
        let span = Span::new(5, 2);
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 5);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_span_relations() {
        let outer = Span::new(0, 4);
        let inner = Span::new(1, 2);
        assert!(outer.contains(inner));
        assert!(!inner.contains(outer));
        assert!(outer.is_strict_superset_of(inner));
        assert!(!outer.is_strict_superset_of(outer));
        assert!(outer.intersects(Span::new(4, 9)));
        assert!(!outer.intersects(Span::new(5, 9)));
        assert_eq!(inner.union(Span::single(7)), Span::new(1, 7));
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn test_entry_key_matching() {
        let instance = InstanceId::next();
        let entry = Entry::new(
            EntryKey::new("A1", instance),
            EntryKind::Group,
            Span::new(0, 1),
            Span::single(0),
        );
        assert!(entry.matches(&EntryKey::new("A1", instance)));
        assert!(!entry.matches(&EntryKey::new("A1", InstanceId::next())));
        assert!(!entry.matches(&EntryKey::new("A2", instance)));
        assert_eq!(entry.id(), "A1");
    }

    #[test]
    fn test_header_id_serializes_as_string() {
        let id = HeaderId::new("A1_3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A1_3\"");
    }
}
