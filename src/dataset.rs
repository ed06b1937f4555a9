//! Deterministic synthetic key/value corpus.

use crate::conf::DatasetConfig;

/// One key with the value it is expected to hold after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Key/value pairs `key_prefix‖i -> value_prefix‖i` for `i` in `[0, count)`.
///
/// Built once per run and never mutated; keys are unique by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    pub fn generate(key_prefix: &str, value_prefix: &str, count: usize) -> Self {
        let entries = (0..count)
            .map(|i| Entry {
                key: format!("{key_prefix}{i}"),
                value: format!("{value_prefix}{i}"),
            })
            .collect();
        Self { entries }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::generate(&config.key_prefix, &config.value_prefix, config.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
