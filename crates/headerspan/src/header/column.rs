//! Column definitions and their projection into a displayed header tree.
//!
//! [`ColumnDef`] mirrors the grid's JSON column configuration: leaf columns
//! (`colId`/`field`) and header groups (`groupId` plus `children`), with
//! optional `pinned` and `hide` attributes.
//!
//! [`ColumnDefs::project`] turns the configuration into what the grid would
//! actually display:
//!
//! - hidden columns are dropped, and so are groups left without columns;
//! - columns pinned left come first, then unpinned, then pinned right. A group
//!   whose columns land in several sections is displayed once per section,
//!   each time under the same id but as a distinct instance;
//! - padding groups are inserted above shallow branches so every column ends
//!   on the bottom header row.
//!
//! # Example
//!
//! ```
//! use headerspan::header::ColumnDefs;
//!
//! let defs = ColumnDefs::from_json_str(r#"[
//!     { "headerName": "A1", "groupId": "A1", "children": [
//!         { "headerName": "A1-1", "colId": "A1_1" },
//!         { "headerName": "A1-2", "colId": "A1_2" }
//!     ]},
//!     { "headerName": "A2", "colId": "A2" }
//! ]"#).unwrap();
//!
//! let displayed = defs.project();
//! assert_eq!(displayed.height(), 2);
//! assert_eq!(displayed.leaf_count(), 3);
//! ```

use std::collections::HashSet;
use std::path::Path;

use headerspan_core::PerfSpan;
use headerspan_core::logging::{span_names, targets};
use serde::{Deserialize, Serialize};

use super::entry::{EntryKey, HeaderId};
use super::model::HeaderModel;
use super::node::{HeaderNode, find_by_id_in_forest, find_in_forest};
use crate::error::{Error, Result};

/// Which side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pinned {
    Left,
    Right,
}

/// Display section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Left,
    Center,
    Right,
}

impl Section {
    const ALL: [Section; 3] = [Section::Left, Section::Center, Section::Right];

    fn of(pinned: Option<Pinned>) -> Self {
        match pinned {
            Some(Pinned::Left) => Section::Left,
            Some(Pinned::Right) => Section::Right,
            None => Section::Center,
        }
    }
}

/// One entry of the grid's column configuration.
///
/// A definition with `children` is a group, anything else is a leaf column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Caption shown in the header cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// Leaf column id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_id: Option<String>,
    /// Group id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Data field; doubles as the column id when `colId` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Child definitions; present only on groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ColumnDef>>,
    /// Pinned side. On a group, the default for its columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<Pinned>,
    /// Hidden columns are not displayed. On a group, hides the whole group.
    #[serde(default)]
    pub hide: bool,
    /// Keeps the group's children together when columns are moved.
    #[serde(default)]
    pub marry_children: bool,
}

impl ColumnDef {
    /// A leaf column.
    pub fn leaf(id: impl Into<String>) -> Self {
        Self {
            col_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// A header group.
    pub fn group(id: impl Into<String>, children: Vec<ColumnDef>) -> Self {
        Self {
            group_id: Some(id.into()),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Sets the caption.
    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = Some(name.into());
        self
    }

    /// Pins the column (or the group's columns) to a side.
    pub fn pinned(mut self, pinned: Pinned) -> Self {
        self.pinned = Some(pinned);
        self
    }

    /// Hides or shows the column.
    pub fn hidden(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// The id this definition is displayed under, if it has one.
    pub fn id(&self) -> Option<&str> {
        if self.is_group() {
            self.group_id.as_deref().or(self.col_id.as_deref())
        } else {
            self.col_id.as_deref().or(self.field.as_deref())
        }
    }

    fn describe(&self) -> String {
        self.header_name
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

/// Validated column configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDefs {
    defs: Vec<ColumnDef>,
}

impl ColumnDefs {
    /// Validates a configuration.
    ///
    /// Every definition needs an id, and ids must be unique across the whole
    /// configuration, groups included.
    pub fn new(defs: Vec<ColumnDef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for def in &defs {
            validate(def, &mut seen)?;
        }
        Ok(Self { defs })
    }

    /// Parses and validates a JSON array of column definitions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defs: Vec<ColumnDef> = serde_json::from_str(json)?;
        Self::new(defs)
    }

    /// Reads a JSON file of column definitions.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// The root definitions, in configuration order.
    pub fn defs(&self) -> &[ColumnDef] {
        &self.defs
    }

    /// Projects the configuration into the displayed header tree.
    ///
    /// Every call produces brand new node instances.
    pub fn project(&self) -> DisplayedHeader {
        let _perf = PerfSpan::new(span_names::PROJECT);

        let shapes: Vec<Shape> = Section::ALL
            .iter()
            .flat_map(|&section| {
                self.defs
                    .iter()
                    .filter_map(move |def| Shape::from_def(def, section, None))
            })
            .collect();

        let height = shapes.iter().map(Shape::height).max().unwrap_or(0);
        let roots: Vec<HeaderNode> = shapes
            .into_iter()
            .map(|shape| shape.realize(height))
            .collect();

        tracing::debug!(
            target: targets::HEADER,
            roots = roots.len(),
            height,
            "projected column definitions"
        );

        DisplayedHeader { roots, height }
    }
}

fn validate(def: &ColumnDef, seen: &mut HashSet<String>) -> Result<()> {
    let Some(id) = def.id() else {
        return Err(Error::invalid_column(def.describe(), "missing id"));
    };
    if !seen.insert(id.to_string()) {
        return Err(Error::invalid_column(id, "duplicate id"));
    }
    for child in def.children.iter().flatten() {
        validate(child, seen)?;
    }
    Ok(())
}

/// The visible part of a definition within one section, before padding.
#[derive(Debug)]
enum Shape {
    Leaf(HeaderId),
    Group(HeaderId, Vec<Shape>),
}

impl Shape {
    fn from_def(def: &ColumnDef, section: Section, inherited: Option<Pinned>) -> Option<Shape> {
        if def.hide {
            return None;
        }
        let id = HeaderId::new(def.id()?);
        let pinned = def.pinned.or(inherited);
        match &def.children {
            None => (Section::of(pinned) == section).then_some(Shape::Leaf(id)),
            Some(children) => {
                let visible: Vec<Shape> = children
                    .iter()
                    .filter_map(|child| Shape::from_def(child, section, pinned))
                    .collect();
                (!visible.is_empty()).then_some(Shape::Group(id, visible))
            }
        }
    }

    fn height(&self) -> usize {
        match self {
            Shape::Leaf(_) => 1,
            Shape::Group(_, children) => 1 + children.iter().map(Shape::height).max().unwrap_or(0),
        }
    }

    /// Builds the displayed node with `levels` header rows available to it.
    fn realize(self, levels: usize) -> HeaderNode {
        let height = self.height();
        let mut node = match self {
            Shape::Leaf(id) => HeaderNode::leaf(id),
            Shape::Group(id, children) => HeaderNode::group(
                id,
                children
                    .into_iter()
                    .map(|child| child.realize(height - 1))
                    .collect(),
            ),
        };
        for _ in height..levels {
            node = HeaderNode::padding(node);
        }
        node
    }
}

/// The header tree as the grid displays it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayedHeader {
    roots: Vec<HeaderNode>,
    height: usize,
}

impl DisplayedHeader {
    /// Wraps an already displayed forest.
    pub fn from_roots(roots: Vec<HeaderNode>) -> Self {
        let height = roots.iter().map(HeaderNode::height).max().unwrap_or(0);
        Self { roots, height }
    }

    pub fn roots(&self) -> &[HeaderNode] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<HeaderNode> {
        self.roots
    }

    /// Number of header rows, counting padding levels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of displayed leaf columns.
    pub fn leaf_count(&self) -> usize {
        self.roots.iter().map(HeaderNode::leaf_count).sum()
    }

    /// Flattens the displayed tree.
    pub fn model(&self) -> HeaderModel {
        HeaderModel::from_tree(&self.roots)
    }

    /// The displayed node with exactly this key.
    pub fn find(&self, key: &EntryKey) -> Option<&HeaderNode> {
        find_in_forest(&self.roots, key)
    }

    /// The first displayed node with this id.
    pub fn find_by_id(&self, id: impl Into<HeaderId>) -> Option<&HeaderNode> {
        find_by_id_in_forest(&self.roots, &id.into())
    }

    /// Key of the first displayed node with this id, as a click would report it.
    pub fn key_of(&self, id: impl Into<HeaderId>) -> Option<EntryKey> {
        self.find_by_id(id).map(HeaderNode::key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[HeaderNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id().as_str()).collect()
    }

    #[test]
    fn test_id_resolution() {
        assert_eq!(ColumnDef::leaf("a").id(), Some("a"));
        let by_field = ColumnDef {
            field: Some("f".into()),
            ..Default::default()
        };
        assert_eq!(by_field.id(), Some("f"));
        let group_by_col_id = ColumnDef {
            col_id: Some("g".into()),
            children: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(group_by_col_id.id(), Some("g"));
    }

    #[test]
    fn test_validation_rejects_missing_and_duplicate_ids() {
        let missing = ColumnDefs::new(vec![ColumnDef::default().header_name("Nameless")]);
        assert!(matches!(
            missing,
            Err(Error::InvalidColumnDef { ref id, .. }) if id == "Nameless"
        ));

        let duplicate = ColumnDefs::new(vec![
            ColumnDef::group("A", vec![ColumnDef::leaf("x")]),
            ColumnDef::leaf("x"),
        ]);
        assert!(matches!(
            duplicate,
            Err(Error::InvalidColumnDef { ref id, .. }) if id == "x"
        ));
    }

    #[test]
    fn test_group_with_leaf_fields_stays_a_group() {
        let json = r#"[
            { "headerName": "A1-3", "field": "a3", "colId": "A1_3_col", "groupId": "A1_3",
              "children": [ { "field": "a4", "colId": "A1_3_1" } ] }
        ]"#;
        let defs = ColumnDefs::from_json_str(json).unwrap();
        assert!(defs.defs()[0].is_group());
        assert_eq!(defs.defs()[0].id(), Some("A1_3"));

        let displayed = defs.project();
        assert_eq!(ids(displayed.roots()), vec!["A1_3"]);
        assert!(!displayed.roots()[0].is_leaf());
        assert_eq!(ids(displayed.roots()[0].children()), vec!["A1_3_1"]);
    }

    #[test]
    fn test_projection_pads_shallow_columns() {
        let defs = ColumnDefs::new(vec![
            ColumnDef::group(
                "A1",
                vec![
                    ColumnDef::leaf("A1_1"),
                    ColumnDef::group("A1_3", vec![ColumnDef::leaf("A1_3_1")]),
                ],
            ),
            ColumnDef::leaf("A2"),
        ])
        .unwrap();

        let displayed = defs.project();
        assert_eq!(displayed.height(), 3);

        let roots = displayed.roots();
        assert_eq!(ids(roots), vec!["A1", "A2"]);
        // A2 needs two padding levels, A1_1 one.
        assert!(roots[1].is_padding());
        assert!(roots[1].children()[0].is_padding());
        assert!(roots[1].children()[0].children()[0].is_leaf());
        assert!(roots[0].children()[0].is_padding());
        assert!(!roots[0].children()[1].is_padding());
        assert!(roots.iter().all(|r| r.height() == 3));
    }

    #[test]
    fn test_projection_drops_hidden_columns_and_empty_groups() {
        let defs = ColumnDefs::new(vec![
            ColumnDef::group("G", vec![ColumnDef::leaf("a").hidden(true)]),
            ColumnDef::leaf("b"),
            ColumnDef::group("H", vec![ColumnDef::leaf("c")]).hidden(true),
        ])
        .unwrap();
        let displayed = defs.project();
        assert_eq!(ids(displayed.roots()), vec!["b"]);
        assert_eq!(displayed.height(), 1);
    }

    #[test]
    fn test_projection_splits_groups_across_pinned_sections() {
        let defs = ColumnDefs::new(vec![
            ColumnDef::leaf("A2"),
            ColumnDef::group(
                "A4",
                vec![
                    ColumnDef::leaf("A4_1"),
                    ColumnDef::leaf("A4_6").pinned(Pinned::Left),
                ],
            ),
            ColumnDef::leaf("R").pinned(Pinned::Right),
        ])
        .unwrap();

        let displayed = defs.project();
        let roots = displayed.roots();
        assert_eq!(ids(roots), vec!["A4", "A2", "A4", "R"]);
        assert_ne!(roots[0].instance(), roots[2].instance());
        assert_eq!(ids(roots[0].children()), vec!["A4_6"]);
        assert_eq!(ids(roots[2].children()), vec!["A4_1"]);
    }

    #[test]
    fn test_group_pin_is_inherited() {
        let defs = ColumnDefs::new(vec![
            ColumnDef::leaf("a"),
            ColumnDef::group("G", vec![ColumnDef::leaf("b"), ColumnDef::leaf("c")])
                .pinned(Pinned::Left),
        ])
        .unwrap();
        let displayed = defs.project();
        assert_eq!(ids(displayed.roots()), vec!["G", "a"]);
    }

    #[test]
    fn test_projection_is_fresh_every_time() {
        let defs = ColumnDefs::new(vec![ColumnDef::leaf("a")]).unwrap();
        let first = defs.project();
        let second = defs.project();
        let key = first.key_of("a").unwrap();
        assert!(first.find(&key).is_some());
        assert!(second.find(&key).is_none());
    }

    #[test]
    fn test_json_round_trip_of_definitions() {
        let json = r#"[
            { "headerName": "A1", "colId": "A1", "groupId": "A1", "marryChildren": true,
              "children": [ { "headerName": "A1-1", "field": "a1", "colId": "A1_1" } ] },
            { "headerName": "A4-6", "field": "a12", "colId": "A4_6", "pinned": "left" },
            { "field": "a13", "pinned": null, "hide": true }
        ]"#;
        let defs = ColumnDefs::from_json_str(json).unwrap();
        assert_eq!(defs.defs().len(), 3);
        assert!(defs.defs()[0].is_group());
        assert!(defs.defs()[0].marry_children);
        assert_eq!(defs.defs()[1].pinned, Some(Pinned::Left));
        assert_eq!(defs.defs()[2].id(), Some("a13"));

        let displayed = defs.project();
        assert_eq!(ids(displayed.roots()), vec!["A4_6", "A1"]);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(matches!(
            ColumnDefs::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }
}
