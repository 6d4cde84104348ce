use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::{normalize_pattern, ExtractionContext, PatternTable};

/// The emitted document: `{"patterns": {name: pattern}}`.
///
/// Constants and unresolved names are resolution state only and never
/// appear here. Keys are sorted so identical runs serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReport {
    pub patterns: BTreeMap<String, String>,
}

impl PatternReport {
    pub fn from_context(ctx: &ExtractionContext) -> Self {
        Self::from_patterns(ctx.patterns().clone())
    }

    /// Normalize each resolved pattern for emission.
    pub fn from_patterns(patterns: PatternTable) -> Self {
        let patterns = patterns
            .into_iter()
            .map(|(name, pattern)| {
                let normalized = normalize_pattern(&pattern);
                (name, normalized)
            })
            .collect();
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
