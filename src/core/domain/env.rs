//! EnvironmentSet type.
//!
//! Ordered, duplicate-free mapping of decrypted variables. Values are held
//! in zeroizing storage so they are wiped from memory when the set drops.

use std::collections::HashMap;
use zeroize::Zeroizing;

/// Decrypted variables in first-seen order
#[derive(Clone, Default)]
pub struct EnvironmentSet {
    entries: Vec<(String, Zeroizing<String>)>,
    index: HashMap<String, usize>,
}

impl EnvironmentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable.
    ///
    /// A name seen before keeps its original position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = Zeroizing::new(value.into());

        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Variable names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Name/value pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Values never reach Debug output.
impl std::fmt::Debug for EnvironmentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, _)| (k, "<redacted>")))
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
