//! Click scenarios over small headers and the projected demo header.

use headerspan::header::{ColumnDef, ColumnDefs, DisplayedHeader, HeaderModel, HeaderNode};
use headerspan::selection::{Selection, SelectionPath, select};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ids(selection: &Selection) -> Vec<&str> {
    selection.ids().iter().map(|id| id.as_str()).collect()
}

fn sorted(mut ids: Vec<&str>) -> Vec<&str> {
    ids.sort_unstable();
    ids
}

/// `G1{c1, c2}` followed by `c3`.
fn small() -> DisplayedHeader {
    DisplayedHeader::from_roots(vec![
        HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
        HeaderNode::leaf("c3"),
    ])
}

fn select_ids(header: &DisplayedHeader, anchor: &str, target: &str) -> Selection {
    let model = header.model();
    let anchor = header.key_of(anchor).unwrap();
    let target = header.key_of(target).unwrap();
    select(&model, &anchor, &target)
}

#[test]
fn test_leaves_under_one_group_select_the_group() {
    init_tracing();
    let selection = select_ids(&small(), "c1", "c2");
    assert_eq!(sorted(ids(&selection)), vec!["G1", "c1", "c2"]);
}

#[test]
fn test_range_past_group_includes_whole_group() {
    init_tracing();
    let selection = select_ids(&small(), "c1", "c3");
    assert_eq!(selection.path(), SelectionPath::Rectangle);
    assert_eq!(sorted(ids(&selection)), vec!["G1", "c1", "c2", "c3"]);
}

#[test]
fn test_leaf_to_own_group() {
    let selection = select_ids(&small(), "c1", "G1");
    assert_eq!(selection.path(), SelectionPath::Rectangle);
    assert_eq!(ids(&selection), vec!["G1", "c1", "c2"]);
}

#[test]
fn test_row_zero_groups_take_fast_path() {
    let header = DisplayedHeader::from_roots(vec![
        HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
        HeaderNode::group("G2", vec![HeaderNode::leaf("c3")]),
        HeaderNode::leaf("c4"),
    ]);
    let selection = select_ids(&header, "G1", "G2");
    assert_eq!(selection.path(), SelectionPath::SameRow);
    assert_eq!(ids(&selection), vec!["G1", "G2"]);

    // A full-height leaf between the two groups leaks out of row 0.
    let header = DisplayedHeader::from_roots(vec![
        HeaderNode::group("G1", vec![HeaderNode::leaf("c1")]),
        HeaderNode::leaf("c2"),
        HeaderNode::group("G2", vec![HeaderNode::leaf("c3")]),
    ]);
    let selection = select_ids(&header, "G1", "G2");
    assert_eq!(selection.path(), SelectionPath::Rectangle);
    assert_eq!(ids(&selection), vec!["G1", "c1", "c2", "G2", "c3"]);
}

#[test]
fn test_rebuilt_tree_invalidates_anchor() {
    let before = small();
    let anchor = before.key_of("c1").unwrap();

    let after = small();
    let model = after.model();
    let target = after.key_of("c2").unwrap();

    assert!(model.find_all(&anchor.id).next().is_some());
    let selection = select(&model, &anchor, &target);
    assert!(selection.is_empty());
    assert_eq!(selection.path(), SelectionPath::Unresolved);
}

/// The demo grid: four top-level columns, one nested group, and a pinned
/// column inside `A4`.
fn demo() -> DisplayedHeader {
    ColumnDefs::new(vec![
        ColumnDef::group(
            "A1",
            vec![
                ColumnDef::leaf("A1_1"),
                ColumnDef::leaf("A1_2"),
                ColumnDef::group(
                    "A1_3",
                    vec![ColumnDef::leaf("A1_3_1"), ColumnDef::leaf("A1_3_2")],
                ),
            ],
        ),
        ColumnDef::leaf("A2"),
        ColumnDef::leaf("A3"),
        ColumnDef::group(
            "A4",
            vec![
                ColumnDef::leaf("A4_1"),
                ColumnDef::leaf("A4_2"),
                ColumnDef::leaf("A4_3"),
                ColumnDef::leaf("A4_4"),
                ColumnDef::leaf("A4_5"),
                ColumnDef::leaf("A4_6").pinned(headerspan::header::Pinned::Left),
            ],
        ),
    ])
    .unwrap()
    .project()
}

#[test]
fn test_demo_layout() {
    let header = demo();
    let model: HeaderModel = header.model();
    assert_eq!(header.height(), 3);
    assert_eq!(model.leaf_count(), 12);
    assert_eq!(model.max_depth(), 2);

    let first: Vec<&str> = model.iter().take(3).map(|e| e.id().as_str()).collect();
    assert_eq!(first, vec!["A4", "A4_6", "A1"]);
    assert_eq!(model.find_all(&"A4".into()).count(), 2);
}

#[test]
fn test_demo_nested_group_expands_sideways() {
    let selection = select_ids(&demo(), "A1_1", "A1_3_1");
    assert_eq!(
        ids(&selection),
        vec!["A1_1", "A1_2", "A1_3", "A1_3_1", "A1_3_2"]
    );
}

#[test]
fn test_demo_full_height_target_pulls_in_parent() {
    let selection = select_ids(&demo(), "A1_3_1", "A2");
    assert_eq!(
        ids(&selection),
        vec!["A1", "A1_1", "A1_2", "A1_3", "A1_3_1", "A1_3_2", "A2"]
    );
}

#[test]
fn test_demo_across_pinned_split() {
    let header = demo();
    let selection = select_ids(&header, "A4_6", "A4_1");
    assert_eq!(selection.path(), SelectionPath::Rectangle);
    assert_eq!(selection.len(), 15);
    assert_eq!(ids(&selection).iter().filter(|id| **id == "A4").count(), 1);
    assert_eq!(&ids(&selection)[..3], &["A4", "A4_6", "A1"]);
}

#[test]
fn test_demo_adjacent_full_height_columns() {
    let selection = select_ids(&demo(), "A3", "A2");
    assert_eq!(selection.path(), SelectionPath::SameRow);
    assert_eq!(ids(&selection), vec!["A2", "A3"]);
}
