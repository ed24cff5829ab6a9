//! The selection engine.
//!
//! Given a freshly built [`HeaderModel`], an anchor and a target, [`select`]
//! works out which header cells a shift-click highlights. The result never
//! slices through a merged group cell:
//!
//! 1. If anchor and target occupy the same row band, the cells between them in
//!    display order are taken, unless a taller cell in that stretch reaches
//!    above or below the band.
//! 2. Otherwise a rectangle in `(leaf, depth)` space is seeded from both cells
//!    and grown until no entry straddles its border. Growing to respect one
//!    merged cell can newly cut another, so this runs to a fixed point.
//! 3. Groups whose every column ended up selected are selected as well.
//!
//! The engine is a pure function of its inputs and keeps no state.

use std::collections::HashSet;

use headerspan_core::PerfSpan;
use headerspan_core::logging::{span_names, targets};
use serde::{Deserialize, Serialize};

use super::rect::SelectionRect;
use crate::header::{Entry, EntryKey, HeaderId, HeaderModel, Span};

/// How the rectangle rule treats full-height header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Grow the rectangle until every overlapping cell is fully inside it.
    #[default]
    Rectangle,
    /// Like [`Rectangle`](Self::Rectangle), and additionally, once the
    /// rectangle holds a cell spanning every header row, widen it to all cells
    /// starting on its top row before growing again.
    FullBand,
}

/// Which branch of the engine produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPath {
    /// Anchor and target share a row band that nothing leaks out of.
    SameRow,
    /// Fixed-point rectangle expansion.
    Rectangle,
    /// Anchor or target is not part of the current model.
    Unresolved,
}

/// The outcome of one selection computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<HeaderId>,
    rect: Option<SelectionRect>,
    path: SelectionPath,
}

impl Selection {
    fn unresolved() -> Self {
        Self {
            ids: Vec::new(),
            rect: None,
            path: SelectionPath::Unresolved,
        }
    }

    /// Selected ids, each once, in display order.
    ///
    /// A group split into several instances appears once, under its shared id,
    /// and only when every instance is selected.
    pub fn ids(&self) -> &[HeaderId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<HeaderId> {
        self.ids
    }

    /// Bounding rectangle of the selected band, if anything was resolved.
    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }

    pub fn path(&self) -> SelectionPath {
        self.path
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected.as_str() == id)
    }
}

/// Computes the selection between `anchor` and `target` with the default policy.
///
/// Both keys must match an entry exactly, instance included; otherwise the
/// selection is empty.
pub fn select(model: &HeaderModel, anchor: &EntryKey, target: &EntryKey) -> Selection {
    select_with(model, anchor, target, SelectionPolicy::default())
}

/// Computes the selection between `anchor` and `target`.
pub fn select_with(
    model: &HeaderModel,
    anchor: &EntryKey,
    target: &EntryKey,
    policy: SelectionPolicy,
) -> Selection {
    let _perf = PerfSpan::new(span_names::SELECT);
    let entries = model.entries();

    let (Some(a), Some(b)) = (model.position(anchor), model.position(target)) else {
        tracing::debug!(
            target: targets::SELECTION,
            %anchor,
            %target,
            "selection endpoint is not in the current header model"
        );
        return Selection::unresolved();
    };

    if entries[a].depths() == entries[b].depths() {
        match same_row(entries, a, b) {
            Some(indices) => {
                let rect = bounds(entries, &indices);
                return finish(model, indices, rect, SelectionPath::SameRow);
            }
            None => tracing::trace!(
                target: targets::SELECTION,
                "row band is cut by a taller cell, expanding rectangle"
            ),
        }
    }

    let mut rect = SelectionRect::spanning(&entries[a], &entries[b]);
    expand_to_fixed_point(entries, &mut rect);
    if policy == SelectionPolicy::FullBand {
        widen_full_band(model, &mut rect);
    }

    let collected = collect_overlapping(entries, &rect);
    let kept = dedupe_contained(entries, &collected);
    finish(model, kept, Some(rect), SelectionPath::Rectangle)
}

/// Entries between display positions `a` and `b` that lie within their shared
/// row band, or `None` if some entry in that stretch is taller than the band.
fn same_row(entries: &[Entry], a: usize, b: usize) -> Option<Vec<usize>> {
    let band = entries[a].depths();
    let (from, to) = if a <= b { (a, b) } else { (b, a) };

    if entries[from..=to]
        .iter()
        .any(|entry| entry.depths().is_strict_superset_of(band))
    {
        return None;
    }

    Some(
        (from..=to)
            .filter(|&i| band.contains(entries[i].depths()))
            .collect(),
    )
}

/// Grows `rect` until no entry overlaps it without being inside it.
///
/// Returns the number of scans performed, including the final one that found
/// nothing to grow. Bounds only ever increase and are capped by the leaf and
/// row counts, so this terminates.
pub fn expand_to_fixed_point(entries: &[Entry], rect: &mut SelectionRect) -> usize {
    let mut rounds = 0;
    loop {
        rounds += 1;
        let mut grew = false;
        for entry in entries {
            if rect.is_cut_by(entry) {
                grew |= rect.grow_to(entry);
            }
        }
        tracing::trace!(target: targets::SELECTION, round = rounds, %rect, grew, "expansion round");
        if !grew {
            return rounds;
        }
    }
}

/// Display positions of every entry that overlaps `rect`.
pub fn collect_overlapping(entries: &[Entry], rect: &SelectionRect) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| rect.overlaps(entry))
        .map(|(i, _)| i)
        .collect()
}

/// Drops groups fully covered by another collected entry that starts on a
/// shallower row. Leaves are always kept.
pub fn dedupe_contained(entries: &[Entry], collected: &[usize]) -> Vec<usize> {
    collected
        .iter()
        .copied()
        .filter(|&i| {
            let inner = &entries[i];
            inner.is_leaf()
                || !collected.iter().any(|&j| {
                    let outer = &entries[j];
                    j != i
                        && outer.depth_start() < inner.depth_start()
                        && SelectionRect::of(outer).contains(inner)
                })
        })
        .collect()
}

fn widen_full_band(model: &HeaderModel, rect: &mut SelectionRect) {
    if model.max_depth() == model.min_depth() {
        return;
    }
    let entries = model.entries();
    let full = Span::new(model.min_depth(), model.max_depth());
    if !entries
        .iter()
        .any(|entry| entry.depths() == full && rect.contains(entry))
    {
        return;
    }

    let top = rect.depths.start;
    for entry in entries.iter().filter(|entry| entry.depth_start() == top) {
        rect.leaves = rect.leaves.union(entry.leaves());
    }
    tracing::trace!(target: targets::SELECTION, %rect, "widened to full band");
    expand_to_fixed_point(entries, rect);
}

fn bounds(entries: &[Entry], indices: &[usize]) -> Option<SelectionRect> {
    indices
        .iter()
        .map(|&i| SelectionRect::of(&entries[i]))
        .reduce(|acc, rect| acc.union(&rect))
}

/// Adds every group above the selection whose columns are all selected.
///
/// A group split into several instances is added only when all of them are.
fn promote_covered_groups(model: &HeaderModel, indices: &mut Vec<usize>) {
    let entries = model.entries();
    let Some(top) = indices.iter().map(|&i| entries[i].depth_start()).min() else {
        return;
    };

    let mut covered = vec![false; model.leaf_count()];
    for &i in indices.iter() {
        let leaves = entries[i].leaves();
        covered[leaves.start..=leaves.end].fill(true);
    }
    let is_covered = |entry: &Entry| {
        let leaves = entry.leaves();
        entry.depth_start() < top && covered[leaves.start..=leaves.end].iter().all(|&c| c)
    };

    indices.extend(
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry.is_group()
                    && model.find_all(entry.id()).filter(|e| e.is_group()).all(is_covered)
            })
            .map(|(i, _)| i),
    );
}

fn finish(
    model: &HeaderModel,
    mut indices: Vec<usize>,
    rect: Option<SelectionRect>,
    path: SelectionPath,
) -> Selection {
    promote_covered_groups(model, &mut indices);
    indices.sort_unstable();
    indices.dedup();

    let entries = model.entries();
    let mut seen = HashSet::new();
    let ids: Vec<HeaderId> = indices
        .into_iter()
        .map(|i| entries[i].id())
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect();

    tracing::debug!(
        target: targets::SELECTION,
        ?path,
        selected = ids.len(),
        "computed header selection"
    );

    Selection { ids, rect, path }
}
