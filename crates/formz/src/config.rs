// File: src/config.rs
// Purpose: Library settings parsed from formz.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FormzError, Result};
use crate::script::DEFAULT_RULE_SET;

/// Settings shared by every form rendered through a [`crate::FormzContext`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormzSettings {
    /// Prefixes generated scripts with a comment naming the form
    #[serde(default = "default_false")]
    pub debug_mode: bool,

    #[serde(default = "default_cache_identifier_max_length")]
    pub cache_identifier_max_length: usize,

    /// Client-side rule set receiving generated activation conditions
    #[serde(default = "default_rule_set")]
    pub rule_set: String,

    /// Whole parsed file, for lookups of keys unknown to this struct
    #[serde(skip)]
    raw: toml::Table,
}

fn default_false() -> bool {
    false
}

fn default_cache_identifier_max_length() -> usize {
    55
}

fn default_rule_set() -> String {
    DEFAULT_RULE_SET.to_string()
}

impl Default for FormzSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            cache_identifier_max_length: default_cache_identifier_max_length(),
            rule_set: default_rule_set(),
            raw: toml::Table::new(),
        }
    }
}

impl FormzSettings {
    /// Load settings from a TOML file. A missing or empty file yields the
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| FormzError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Load settings from the default path (./formz.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formz.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: toml::Table = toml::from_str(content)?;
        let mut settings: FormzSettings = toml::Value::Table(raw.clone()).try_into()?;
        settings.raw = raw;

        Ok(settings)
    }

    /// Value at a dotted path of the settings file, or `None` when the path
    /// does not exist.
    pub fn get(&self, path: &str) -> Option<&toml::Value> {
        let mut segments = path.split('.');
        let first = self.raw.get(segments.next()?)?;
        segments.try_fold(first, |node, segment| node.as_table()?.get(segment))
    }
}
