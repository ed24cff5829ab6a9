//! Prelude module for headerspan.
//!
//! ```
//! use headerspan::prelude::*;
//! ```

// ============================================================================
// Header Model
// ============================================================================

pub use crate::header::{
    ColumnDef, ColumnDefs, DisplayedHeader, Entry, EntryKey, EntryKind, HeaderId, HeaderModel,
    HeaderNode, InstanceId, Pinned, Span, build_model,
};

// ============================================================================
// Selection
// ============================================================================

pub use crate::selection::{
    HeaderSelection, Selection, SelectionPath, SelectionPolicy, SelectionRect, SessionState,
    select, select_with,
};

// ============================================================================
// Input, Configuration and Errors
// ============================================================================

pub use crate::config::SelectionConfig;
pub use crate::error::{Error, Result};
pub use crate::events::{Key, KeyboardModifiers};
pub use crate::Signal;
