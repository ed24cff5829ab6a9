//! Logging and debugging facilities for headerspan.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output per subsystem
//! - Tree visualization options shared by the header debug dumps
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! headerspan uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("headerspan::selection=trace")
//!         .init();
//! }
//! ```

/// Span names used throughout headerspan for tracing.
pub mod span_names {
    /// Flattening a displayed header tree into a model.
    pub const BUILD_MODEL: &str = "headerspan::build_model";
    /// Computing a selection from an anchor and a target.
    pub const SELECT: &str = "headerspan::select";
    /// Projecting column definitions into a displayed tree.
    pub const PROJECT: &str = "headerspan::project";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Header model target.
    pub const HEADER: &str = "headerspan::header";
    /// Selection engine target.
    pub const SELECTION: &str = "headerspan::selection";
    /// Click session target.
    pub const SESSION: &str = "headerspan::session";
    /// Configuration loading target.
    pub const CONFIG: &str = "headerspan::config";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "headerspan_core::signal";
    /// Performance spans target.
    pub const PERF: &str = "headerspan::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show per-instance identifiers.
    pub show_instances: bool,
    /// Whether to show structural padding nodes.
    pub show_padding: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_instances: true,
            show_padding: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self::default()
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_instances: false,
            show_padding: false,
            ..Default::default()
        }
    }

    /// Build the prefix string for a tree node at `depth`.
    pub fn prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, corner, last) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();

        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            for _ in 0..self.indent_size {
                prefix.push(' ');
            }
        }

        prefix.push_str(if is_last { last } else { corner });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "headerspan::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent target naming.
#[macro_export]
macro_rules! headerspan_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "headerspan_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! headerspan_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "headerspan_core", $($arg)*)
    };
}
