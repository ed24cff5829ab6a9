//! Click and shift-click handling for a header.
//!
//! [`HeaderSelection`] is the collaborator side of the selection engine. It
//! remembers the last clicked cell and whether Shift is held, rebuilds the
//! header model from the tree on screen at every click, and keeps the current
//! highlight set for the per-cell style hook.
//!
//! # State
//!
//! ```text
//!            any click
//!   Idle ──────────────> Anchored(key)
//!                          │    ^
//!                          └────┘ any click (target becomes the anchor)
//! ```
//!
//! # Example
//!
//! ```
//! use headerspan::events::Key;
//! use headerspan::header::HeaderNode;
//! use headerspan::selection::HeaderSelection;
//!
//! let roots = vec![
//!     HeaderNode::group("G1", vec![HeaderNode::leaf("c1"), HeaderNode::leaf("c2")]),
//!     HeaderNode::leaf("c3"),
//! ];
//! let c1 = roots[0].children()[0].key();
//! let c3 = roots[1].key();
//!
//! let mut selection = HeaderSelection::new();
//! selection.clicked(&roots, c1);
//! selection.key_pressed(Key::ShiftLeft);
//! selection.clicked(&roots, c3);
//!
//! let ids: Vec<&str> = selection.selected_ids().iter().map(|id| id.as_str()).collect();
//! assert_eq!(ids, vec!["G1", "c1", "c2", "c3"]);
//! ```

use std::collections::HashSet;

use headerspan_core::Signal;
use headerspan_core::logging::targets;

use super::engine::{SelectionPath, select_with};
use crate::config::SelectionConfig;
use crate::events::{Key, KeyboardModifiers};
use crate::header::{EntryKey, HeaderId, HeaderNode, build_model};

/// Where the session is in a click sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing clicked yet, or the selection was cleared.
    #[default]
    Idle,
    /// The last clicked cell, used as the anchor of the next shift-click.
    Anchored(EntryKey),
}

impl SessionState {
    /// The current anchor, if any.
    pub fn anchor(&self) -> Option<&EntryKey> {
        match self {
            SessionState::Idle => None,
            SessionState::Anchored(key) => Some(key),
        }
    }
}

/// Selection state of one header.
///
/// # Signals
///
/// - `selection_changed`: emitted with the new highlight set whenever it differs
///   from the previous one
pub struct HeaderSelection {
    config: SelectionConfig,
    state: SessionState,

    /// Shift key currently held.
    shift: bool,

    /// Highlighted ids in display order.
    selected: Vec<HeaderId>,

    /// Same ids, for O(1) membership checks from the style hook.
    selected_set: HashSet<HeaderId>,

    /// Emitted when the highlight set changes. Args: the new highlight set.
    pub selection_changed: Signal<Vec<HeaderId>>,
}

impl Default for HeaderSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeaderSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderSelection")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("shift", &self.shift)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl HeaderSelection {
    /// Creates an idle session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SelectionConfig::default())
    }

    /// Creates an idle session.
    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            shift: false,
            selected: Vec::new(),
            selected_set: HashSet::new(),
            selection_changed: Signal::new(),
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replaces the configuration. The current selection is kept.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // =========================================================================
    // Modifier tracking
    // =========================================================================

    /// Returns true while Shift is held.
    pub fn is_shift_held(&self) -> bool {
        self.shift
    }

    /// Feeds a key-down event.
    pub fn key_pressed(&mut self, key: Key) {
        if key.is_shift() && !self.shift {
            self.shift = true;
            tracing::debug!(target: targets::SESSION, ?key, "shift pressed");
        }
    }

    /// Feeds a key-up event.
    ///
    /// Any Shift key-up releases the modifier, wherever focus was when it
    /// happened.
    pub fn key_released(&mut self, key: Key) {
        if key.is_shift() && self.shift {
            self.shift = false;
            tracing::debug!(target: targets::SESSION, ?key, "shift released");
        }
    }

    /// Synchronizes the shift flag with a full modifier snapshot.
    pub fn modifiers_changed(&mut self, modifiers: KeyboardModifiers) {
        if modifiers.shift != self.shift {
            self.shift = modifiers.shift;
            tracing::debug!(target: targets::SESSION, shift = self.shift, "modifiers changed");
        }
    }

    // =========================================================================
    // Clicks
    // =========================================================================

    /// Handles a click on the header cell `target` of the tree currently on screen.
    ///
    /// A plain click highlights the clicked cell alone. A shift-click with an
    /// anchor highlights the range between the anchor and `target`, computed on
    /// a model built from `roots`; if either end is no longer part of that tree
    /// the highlight is left as it was. Either way `target` becomes the new anchor.
    pub fn clicked(&mut self, roots: &[HeaderNode], target: EntryKey) -> &[HeaderId] {
        let next = match (&self.state, self.shift) {
            (SessionState::Anchored(anchor), true) => {
                let model = build_model(roots);
                let selection = select_with(&model, anchor, &target, self.config.policy);
                tracing::debug!(
                    target: targets::SESSION,
                    %anchor,
                    %target,
                    path = ?selection.path(),
                    selected = selection.len(),
                    "shift-click"
                );
                match selection.path() {
                    SelectionPath::Unresolved => None,
                    _ if self.config.extend_existing => Some(self.extended(selection.into_ids())),
                    _ => Some(selection.into_ids()),
                }
            }
            _ => {
                tracing::debug!(target: targets::SESSION, %target, "click");
                Some(vec![target.id.clone()])
            }
        };

        self.state = SessionState::Anchored(target);
        if let Some(next) = next {
            self.replace(next);
        }
        &self.selected
    }

    /// Clears the highlight and forgets the anchor.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.replace(Vec::new());
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Highlighted ids in display order.
    pub fn selected_ids(&self) -> &[HeaderId] {
        &self.selected
    }

    pub fn is_selected(&self, id: &HeaderId) -> bool {
        self.selected_set.contains(id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Style hook: the class to apply to the cell `id`, if it is highlighted.
    pub fn header_class(&self, id: &HeaderId) -> Option<&str> {
        self.is_selected(id).then_some(self.config.selected_class.as_str())
    }

    /// The current highlight followed by any new ids from `range`.
    fn extended(&self, range: Vec<HeaderId>) -> Vec<HeaderId> {
        let mut ids = self.selected.clone();
        ids.extend(range.into_iter().filter(|id| !self.selected_set.contains(id)));
        ids
    }

    fn replace(&mut self, next: Vec<HeaderId>) {
        if next == self.selected {
            return;
        }
        self.selected_set = next.iter().cloned().collect();
        self.selected = next;
        self.selection_changed.emit(self.selected.clone());
    }
}

static_assertions::assert_impl_all!(HeaderSelection: Send, Sync);
