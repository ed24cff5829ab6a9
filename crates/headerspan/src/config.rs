//! Selection configuration.
//!
//! A [`SelectionConfig`] can be built in code or loaded from TOML or JSON:
//!
//! ```
//! use headerspan::config::SelectionConfig;
//! use headerspan::selection::SelectionPolicy;
//!
//! let config = SelectionConfig::from_toml_str(r#"
//! policy = "full-band"
//! extend-existing = true
//! "#).unwrap();
//!
//! assert_eq!(config.policy, SelectionPolicy::FullBand);
//! assert!(config.extend_existing);
//! assert_eq!(config.selected_class, "excel-header-selected");
//! ```

use std::path::Path;

use headerspan_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::selection::SelectionPolicy;

/// Style class applied to selected header cells unless configured otherwise.
pub const DEFAULT_SELECTED_CLASS: &str = "excel-header-selected";

/// Options for a [`HeaderSelection`](crate::selection::HeaderSelection) session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectionConfig {
    /// How shift-click ranges are grown.
    pub policy: SelectionPolicy,
    /// Shift-click adds the range to the current highlight instead of replacing it.
    pub extend_existing: bool,
    /// Class returned by the style hook for selected cells.
    pub selected_class: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            extend_existing: false,
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
        }
    }
}

impl SelectionConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_toml_str(&source)?
        };

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            policy = ?config.policy,
            extend_existing = config.extend_existing,
            "loaded selection config"
        );
        Ok(config)
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_extend_existing(mut self, extend: bool) -> Self {
        self.extend_existing = extend;
        self
    }

    pub fn with_selected_class(mut self, class: impl Into<String>) -> Self {
        self.selected_class = class.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.policy, SelectionPolicy::Rectangle);
        assert!(!config.extend_existing);
        assert_eq!(config.selected_class, DEFAULT_SELECTED_CLASS);
        assert_eq!(SelectionConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_json_partial() {
        let config = SelectionConfig::from_json_str(r#"{ "selected-class": "hl" }"#).unwrap();
        assert_eq!(config.selected_class, "hl");
        assert_eq!(config.policy, SelectionPolicy::Rectangle);
    }

    #[test]
    fn test_unknown_policy_is_error() {
        let err = SelectionConfig::from_toml_str(r#"policy = "diagonal""#).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("selection.toml");
        std::fs::write(&toml_path, "policy = \"full-band\"\n").unwrap();
        let config = SelectionConfig::load(&toml_path).unwrap();
        assert_eq!(config.policy, SelectionPolicy::FullBand);

        let json_path = dir.path().join("selection.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        writeln!(file, r#"{{ "extend-existing": true }}"#).unwrap();
        drop(file);
        let config = SelectionConfig::load(&json_path).unwrap();
        assert!(config.extend_existing);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = SelectionConfig::load(&missing).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_builders() {
        let config = SelectionConfig::default()
            .with_policy(SelectionPolicy::FullBand)
            .with_extend_existing(true)
            .with_selected_class("picked");
        assert_eq!(config.policy, SelectionPolicy::FullBand);
        assert!(config.extend_existing);
        assert_eq!(config.selected_class, "picked");
    }
}
