//! The displayed header tree.
//!
//! [`HeaderNode`] is what the grid hands over on every click: an ordered
//! forest of leaf columns and header groups, in display order. Some groups are
//! structural padding that only exists to line sibling branches up on the same
//! bottom row; those carry the `padding` flag of [`NodeKind::Group`] and never
//! show up in the flattened model.

use super::entry::{EntryKey, HeaderId, InstanceId};

/// Leaf or group, with the group's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An atomic column.
    Leaf,
    /// A header group.
    Group {
        /// Ordered children, in display order.
        children: Vec<HeaderNode>,
        /// A transparent wrapper with no visual identity of its own.
        padding: bool,
    },
}

/// A node of the displayed header tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNode {
    id: HeaderId,
    instance: InstanceId,
    kind: NodeKind,
}

impl HeaderNode {
    /// Creates a leaf column with a fresh instance id.
    pub fn leaf(id: impl Into<HeaderId>) -> Self {
        Self {
            id: id.into(),
            instance: InstanceId::next(),
            kind: NodeKind::Leaf,
        }
    }

    /// Creates a header group with a fresh instance id.
    pub fn group(id: impl Into<HeaderId>, children: Vec<HeaderNode>) -> Self {
        Self {
            id: id.into(),
            instance: InstanceId::next(),
            kind: NodeKind::Group {
                children,
                padding: false,
            },
        }
    }

    /// Wraps `child` in a transparent padding group.
    ///
    /// The padding group borrows its child's id; it is never reported, so the
    /// id only matters for debug output.
    pub fn padding(child: HeaderNode) -> Self {
        Self {
            id: child.id.clone(),
            instance: InstanceId::next(),
            kind: NodeKind::Group {
                children: vec![child],
                padding: true,
            },
        }
    }

    /// Replaces the instance id.
    ///
    /// For collaborators that track node identity themselves.
    pub fn with_instance(mut self, instance: InstanceId) -> Self {
        self.instance = instance;
        self
    }

    pub fn id(&self) -> &HeaderId {
        &self.id
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// The `(id, instance)` key of this node, as passed to a click handler.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            id: self.id.clone(),
            instance: self.instance,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    pub fn is_padding(&self) -> bool {
        matches!(self.kind, NodeKind::Group { padding: true, .. })
    }

    /// Children of a group; empty for a leaf.
    pub fn children(&self) -> &[HeaderNode] {
        match &self.kind {
            NodeKind::Leaf => &[],
            NodeKind::Group { children, .. } => children,
        }
    }

    /// Number of leaf columns below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf => 1,
            NodeKind::Group { children, .. } => children.iter().map(HeaderNode::leaf_count).sum(),
        }
    }

    /// Number of tree levels from this node down to its deepest leaf,
    /// counting padding levels.
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(HeaderNode::height)
            .max()
            .unwrap_or(0)
    }

    /// Finds the node with exactly this key in the subtree.
    pub fn find(&self, key: &EntryKey) -> Option<&HeaderNode> {
        if self.id == key.id && self.instance == key.instance {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(key))
    }

    /// Finds the first non-padding node with this id in the subtree, in display order.
    pub fn find_by_id(&self, id: &HeaderId) -> Option<&HeaderNode> {
        if !self.is_padding() && self.id == *id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }
}

/// Finds the node with exactly this key in a forest.
pub fn find_in_forest<'a>(roots: &'a [HeaderNode], key: &EntryKey) -> Option<&'a HeaderNode> {
    roots.iter().find_map(|root| root.find(key))
}

/// Finds the first non-padding node with this id in a forest.
pub fn find_by_id_in_forest<'a>(roots: &'a [HeaderNode], id: &HeaderId) -> Option<&'a HeaderNode> {
    roots.iter().find_map(|root| root.find_by_id(id))
}
