//! Properties-file loading.
//!
//! A properties file is a sequence of `key=value` lines. Blank lines and
//! lines starting with `#` are ignored. Only the `description` key is
//! required by the converter; everything else is passed through untouched.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Key/value pairs read from a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Parse settings from raw text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = HashMap::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            // Split on the first '=' so values may contain '='.
            let (key, value) = trimmed
                .split_once('=')
                .ok_or_else(|| Error::MalformedSettings(trimmed.to_string()))?;
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(Self { values })
    }

    /// Load settings from a file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The required `description` value, used as the question form's
    /// overview title.
    pub fn description(&self) -> Result<&str> {
        self.get("description")
            .ok_or_else(|| Error::MissingProperty("description".to_string()))
    }

    /// Number of keys loaded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no keys were loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
