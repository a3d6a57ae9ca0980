//! Known expense categories
//!
//! The category set is open: recording an expense under a name the set has
//! never seen registers that name.

use std::collections::BTreeSet;

/// The set of category names the ledger has seen or was seeded with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCategories {
    names: BTreeSet<String>,
}

impl KnownCategories {
    /// Create a set seeded with the given names
    pub fn with_defaults<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: defaults.into_iter().map(Into::into).collect(),
        }
    }

    /// Register a category, returning true if it was new
    pub fn register(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}
