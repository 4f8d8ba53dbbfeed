//! Ordered set of environment variable assignments.
//!
//! Names keep the position of their first insertion; overwriting a name only
//! replaces its value. This gives "first appearance" order when several
//! documents are merged, while later documents still win on conflicts.

use indexmap::IndexMap;
use std::io::Write;

/// Order in which entries are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Order of first appearance across all merged documents.
    #[default]
    Natural,
    /// Ascending by name, compared byte by byte.
    Sorted,
}

/// Mapping from environment variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSet {
    entries: IndexMap<String, String>,
}

impl EnvSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Insert or overwrite a variable, returning the replaced value.
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        self.entries.insert(name, value)
    }

    /// Merge `other` into `self`. Values from `other` win on conflicts.
    ///
    /// Returns the names whose earlier value was replaced.
    pub fn merge(&mut self, other: EnvSet) -> Vec<String> {
        let mut overridden = Vec::new();
        for (name, value) in other.entries {
            if let Some(previous) = self.entries.get_mut(&name) {
                if *previous != value {
                    overridden.push(name.clone());
                }
                *previous = value;
            } else {
                self.entries.insert(name, value);
            }
        }
        overridden
    }

    /// Entries in the requested order.
    pub fn entries(&self, order: Order) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        if order == Order::Sorted {
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }

    /// Write one `NAME="VALUE"` line per entry.
    ///
    /// Values are not escaped, matching plain `.env` files. An empty set
    /// writes nothing.
    pub fn write_dotenv<W: Write>(&self, order: Order, out: &mut W) -> std::io::Result<()> {
        for (name, value) in self.entries(order) {
            writeln!(out, "{name}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
