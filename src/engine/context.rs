//! Run-wide resolution state.
//!
//! One [`ExtractionContext`] is created per run and threaded by `&mut`
//! through every per-file and per-declaration operation. It holds:
//! - The constant table consulted when resolving named references
//! - The pattern table that ends up in the output document
//! - The set of declarations that could not be resolved
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type ConstantTable = HashMap<String, String>;
pub type PatternTable = BTreeMap<String, String>;

#[derive(Debug, Default, Clone)]
pub struct ExtractionContext {
    constants: ConstantTable,
    patterns: PatternTable,
    unresolved: BTreeSet<String>,
}

impl ExtractionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn unresolved(&self) -> &BTreeSet<String> {
        &self.unresolved
    }

    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants.get(name).map(String::as_str)
    }

    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(String::as_str)
    }

    pub fn is_unresolved(&self, name: &str) -> bool {
        self.unresolved.contains(name)
    }

    /// Record a string constant, evicting `name` from the other tables.
    pub fn record_constant(&mut self, name: &str, value: String) {
        self.forget(name);
        self.constants.insert(name.to_string(), value);
    }

    /// Record a resolved pattern, evicting `name` from the other tables.
    pub fn record_pattern(&mut self, name: &str, pattern: String) {
        self.forget(name);
        self.patterns.insert(name.to_string(), pattern);
    }

    /// Mark `name` unresolved, evicting it from the other tables.
    pub fn record_unresolved(&mut self, name: &str) {
        self.forget(name);
        self.unresolved.insert(name.to_string());
    }

    fn forget(&mut self, name: &str) {
        self.constants.remove(name);
        self.patterns.remove(name);
        self.unresolved.remove(name);
    }

    pub fn into_patterns(self) -> PatternTable {
        self.patterns
    }
}
