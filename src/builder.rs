use log::debug;

use crate::dialect::{Dialect, MqttTopic, RouterPath};
use crate::error::MatchResult;
use crate::matcher::Matcher;
use crate::pattern_set::{PatternEntry, PatternSet};

/// Collects patterns and settings, then registers them all in `build`
pub struct MatcherBuilder<D> {
    dialect: D,
    patterns: Vec<PatternEntry>,
    max_depth: Option<usize>,
}

impl MatcherBuilder<RouterPath> {
    pub fn router_path() -> Self {
        Self::new(RouterPath)
    }
}

impl MatcherBuilder<MqttTopic> {
    pub fn mqtt_topic() -> Self {
        Self::new(MqttTopic)
    }
}

impl<D: Dialect> MatcherBuilder<D> {
    pub fn new(dialect: D) -> Self {
        MatcherBuilder {
            dialect,
            patterns: Vec::new(),
            max_depth: None,
        }
    }

    /// Add a pattern with priority 0
    pub fn with_path(self, pattern: &str) -> Self {
        self.with_path_priority(pattern, 0)
    }

    pub fn with_path_priority(self, pattern: &str, priority: i32) -> Self {
        let mut patterns = self.patterns;
        patterns.push(PatternEntry::new(pattern, priority));
        Self { patterns, ..self }
    }

    /// Add several patterns, all with priority 0
    pub fn with_paths<I, S>(self, new_patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = self
            .patterns
            .into_iter()
            .chain(new_patterns.into_iter().map(|p| PatternEntry::new(p, 0)))
            .collect();
        Self { patterns, ..self }
    }

    /// Add every entry of a loaded pattern table
    pub fn with_pattern_set(self, set: PatternSet) -> Self {
        let patterns = self.patterns.into_iter().chain(set).collect();
        Self { patterns, ..self }
    }

    /// Limit patterns and lookups to `max_depth` segments
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    /// Register everything in order; the first invalid pattern aborts the build
    pub fn build(self) -> MatchResult<Matcher<D>> {
        let mut matcher = Matcher::new(self.dialect);
        matcher.set_max_depth(self.max_depth);

        for entry in &self.patterns {
            matcher.add_path_with_priority(&entry.pattern, entry.priority)?;
        }

        debug!("Built matcher with {} patterns", matcher.len());
        Ok(matcher)
    }
}
