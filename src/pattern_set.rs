//! Pattern tables loaded from JSON.
//!
//! ```json
//! { "patterns": [ { "pattern": "a/+/c" }, { "pattern": "a/#", "priority": 1 } ] }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{MatchResult, ResultExt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub pattern: String,
    #[serde(default)]
    pub priority: i32,
}

impl PatternEntry {
    pub fn new(pattern: impl Into<String>, priority: i32) -> Self {
        PatternEntry {
            pattern: pattern.into(),
            priority,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each pattern gets its position in the list as priority, so earlier
    /// patterns win ties between parameter and wildcard siblings.
    pub fn ranked<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .enumerate()
            .map(|(i, pattern)| PatternEntry::new(pattern, i32::try_from(i).unwrap_or(i32::MAX)))
            .collect();
        PatternSet { patterns }
    }

    pub fn from_json(json: &str) -> MatchResult<Self> {
        serde_json::from_str(json).context("Parsing pattern table")
    }

    pub fn from_reader<R: Read>(reader: R) -> MatchResult<Self> {
        serde_json::from_reader(reader).context("Reading pattern table")
    }

    pub fn push(&mut self, pattern: impl Into<String>, priority: i32) {
        self.patterns.push(PatternEntry::new(pattern, priority));
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.patterns.iter()
    }
}

impl IntoIterator for PatternSet {
    type Item = PatternEntry;
    type IntoIter = std::vec::IntoIter<PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}
