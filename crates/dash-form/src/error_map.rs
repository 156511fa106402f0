//! Per-field validation errors

use dash_validate::{validate, Field};
use std::collections::BTreeMap;

/// Mapping from field key to error message. Absence of a key means the
/// field is valid. Recomputed on submit; individual keys are cleared
/// eagerly as the user edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<&'static str, String>,
}

impl ErrorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a rule and record its failure, if any. Returns whether the
    /// field passed.
    pub fn check(&mut self, field: Field, value: &str) -> bool {
        match validate(field, value) {
            Ok(()) => true,
            Err(err) => {
                self.entries.insert(field.key(), err.to_string());
                false
            }
        }
    }

    pub fn insert(&mut self, key: &'static str, message: impl Into<String>) {
        self.entries.insert(key, message.into());
    }

    /// Eager clear-on-edit: drop the error for one field.
    pub fn clear_field(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
