//! Desired property sets.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// The desired `key=value` pairs for one reconciliation.
///
/// Keys are unique and stored trimmed; iteration is in lexicographic
/// key order, which is the order the managed block is rendered in.
/// Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one pair, replacing any previous value for the key.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for a blank key, a key starting
    /// with `#` (it would render as a comment, not an assignment), a key
    /// containing `=` (it could never round-trip through a `key=value`
    /// line), or a key or value containing a line terminator.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let key = key.trim();

        if key.is_empty() {
            return Err(Error::InvalidInput {
                message: "property key is blank".to_string(),
            });
        }
        if key.starts_with('#') {
            return Err(Error::InvalidInput {
                message: format!("property key '{}' would render as a comment", key),
            });
        }
        if key.contains('=') {
            return Err(Error::InvalidInput {
                message: format!("property key '{}' contains '='", key),
            });
        }
        if has_line_terminator(key) {
            return Err(Error::InvalidInput {
                message: format!(
                    "property key '{}' contains a line terminator",
                    key.escape_default()
                ),
            });
        }
        if has_line_terminator(&value) {
            return Err(Error::InvalidInput {
                message: format!("value for '{}' contains a line terminator", key),
            });
        }

        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Builds a set from any pair iterator; later duplicates replace
    /// earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.insert(key, value)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` (already trimmed by the caller) is managed.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Pairs in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn has_line_terminator(text: &str) -> bool {
    text.contains('\n') || text.contains('\r')
}
