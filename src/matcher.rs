//! Backtracking matcher.
//!
//! Children are tried in ascending priority. For each child, an exact match on
//! the raw segment text is tried first, then the parameter branch, then the
//! wildcard branch. The first success wins; a failed descent falls back to the
//! next sibling, and to the parent's next sibling once a level is exhausted.

use std::collections::HashMap;

use log::{debug, trace};
use serde::Serialize;

use crate::dialect::{Dialect, FnDialect, MqttTopic, RouterPath, Segments};
use crate::error::{MatchError, MatchResult};
use crate::log_and_err;
use crate::trie::{PathTrie, PathTrieNode};

/// A match with parameters keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathMatch {
    pub pattern: String,
    pub params: HashMap<String, String>,
}

impl PathMatch {
    /// Get a bound value by parameter name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A match with parameter values in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalMatch {
    pub pattern: String,
    pub params: Vec<String>,
}

/// Collects captured values while the recursion unwinds
trait Bindings {
    fn bind(&mut self, name: &str, value: &str);
}

impl Bindings for HashMap<String, String> {
    fn bind(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl Bindings for Vec<String> {
    fn bind(&mut self, _name: &str, value: &str) {
        self.push(value.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct Matcher<D> {
    dialect: D,
    trie: PathTrie,
    max_depth: Option<usize>,
}

impl Matcher<RouterPath> {
    /// Matcher for `:param` and `*wildcard` router paths
    pub fn router_path() -> Self {
        Matcher::new(RouterPath)
    }
}

impl Matcher<MqttTopic> {
    /// Matcher for `+` and `#` MQTT topic filters
    pub fn mqtt_topic() -> Self {
        Matcher::new(MqttTopic)
    }
}

impl<P, W, S> Matcher<FnDialect<P, W, S>>
where
    P: Fn(&str) -> Option<&str>,
    W: Fn(&str) -> Option<&str>,
    S: Fn(&str) -> MatchResult<Segments<'_>>,
{
    /// Matcher over caller supplied recognizers and splitter
    pub fn from_fns(match_param: P, match_wildcard: W, split: S) -> Self {
        Matcher::new(FnDialect::new(match_param, match_wildcard, split))
    }
}

impl<D: Dialect> Matcher<D> {
    /// Create an empty matcher over a dialect
    pub fn new(dialect: D) -> Self {
        Matcher {
            dialect,
            trie: PathTrie::new(),
            max_depth: None,
        }
    }

    /// Get the dialect used to split and classify segments
    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Get the underlying trie, for inspection
    pub fn trie(&self) -> &PathTrie {
        &self.trie
    }

    /// Limit the number of segments. Longer patterns are rejected at
    /// registration and longer lookups are reported as not found.
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
    }

    /// Get the segment limit, if any
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Get the number of registered patterns
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if no pattern is registered
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Register a pattern with priority 0
    pub fn add_path(&mut self, pattern: &str) -> MatchResult<()> {
        self.add_path_with_priority(pattern, 0)
    }

    /// Register a pattern. Lower priority values are tried first among
    /// siblings at lookup time.
    pub fn add_path_with_priority(&mut self, pattern: &str, priority: i32) -> MatchResult<()> {
        let segments = match self.dialect.split(pattern) {
            Ok(segments) if !segments.is_empty() => segments,
            Ok(_) => {
                return log_and_err!(
                    MatchError::invalid_path(pattern),
                    "Pattern '{pattern}' has no segments"
                )
            }
            Err(e) => return log_and_err!(e, "Cannot register pattern '{pattern}'"),
        };

        if let Some(max) = self.max_depth.filter(|max| segments.len() > *max) {
            return log_and_err!(
                MatchError::too_deep(pattern, segments.len(), max),
                "Pattern '{pattern}' has {} segments, over the limit of {max}",
                segments.len()
            );
        }

        debug!("Registering pattern '{pattern}' with priority {priority}");
        self.trie.insert(&self.dialect, &segments, pattern, priority);
        Ok(())
    }

    /// Find the pattern matching `path` and bind its parameters by name
    pub fn find(&self, path: &str) -> Option<PathMatch> {
        let segments = self.lookup_segments(path)?;
        let mut params: HashMap<String, String> = HashMap::new();
        let pattern = backtrack(self.trie.root(), &segments, 0, &mut params)?;

        debug!("Path '{path}' matched '{pattern}'");
        Some(PathMatch {
            pattern: pattern.to_string(),
            params,
        })
    }

    /// Same lookup as [`Matcher::find`], with values ordered as they appear in
    /// the path
    pub fn find_positional(&self, path: &str) -> Option<PositionalMatch> {
        let segments = self.lookup_segments(path)?;
        let mut params: Vec<String> = Vec::new();
        let pattern = backtrack(self.trie.root(), &segments, 0, &mut params)?;
        // bound deepest first
        params.reverse();

        debug!("Path '{path}' matched '{pattern}'");
        Some(PositionalMatch {
            pattern: pattern.to_string(),
            params,
        })
    }

    /// Check if any registered pattern matches `path`
    pub fn is_match(&self, path: &str) -> bool {
        self.lookup_segments(path)
            .and_then(|segments| backtrack(self.trie.root(), &segments, 0, &mut Vec::<String>::new()))
            .is_some()
    }

    fn lookup_segments<'a>(&self, path: &'a str) -> Option<Segments<'a>> {
        let segments = match self.dialect.split(path) {
            Ok(segments) => segments,
            Err(e) => {
                debug!("Lookup skipped: {e}");
                return None;
            }
        };

        match self.max_depth {
            Some(max) if segments.len() > max => {
                debug!(
                    "Path '{path}' has {} segments, over the limit of {max}",
                    segments.len()
                );
                None
            }
            _ if segments.is_empty() => None,
            _ => Some(segments),
        }
    }
}

impl Default for Matcher<RouterPath> {
    fn default() -> Self {
        Self::router_path()
    }
}

fn backtrack<'t, B: Bindings>(
    node: &'t PathTrieNode,
    segments: &[&str],
    index: usize,
    bindings: &mut B,
) -> Option<&'t str> {
    let segment = segments[index];
    let last = index + 1 == segments.len();

    for child in node.children_by_priority() {
        trace!("Segment {index} '{segment}' against '{}'", child.raw());

        if child.raw() == segment {
            let found = if last {
                child.pattern()
            } else {
                backtrack(child, segments, index + 1, bindings)
            };
            if found.is_some() {
                return found;
            }
            // a wildcard still absorbs the rest when the exact descent fails
            if !child.is_wildcard() {
                continue;
            }
        }

        if let Some(name) = child.param_name() {
            let found = if last {
                child.terminal_pattern()
            } else {
                backtrack(child, segments, index + 1, bindings)
            };
            if let Some(pattern) = found {
                bindings.bind(name, segment);
                return Some(pattern);
            }
        } else if child.is_wildcard() {
            if let Some(pattern) = child.pattern() {
                return Some(pattern);
            }
        }
    }

    trace!("No candidate for segment {index} '{segment}' below '{}'", node.raw());
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(paths: &[&str]) -> Matcher<RouterPath> {
        let mut matcher = Matcher::router_path();
        for path in paths {
            matcher.add_path(path).unwrap();
        }
        matcher
    }

    #[test]
    fn test_literal_match() {
        let matcher = router(&["/users/all", "/users/:id"]);
        let found = matcher.find("/users/all").unwrap();
        assert_eq!(found.pattern, "/users/all");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_param_binding() {
        let matcher = router(&["/users/:id/posts/:post_id"]);
        let found = matcher.find("/users/123/posts/456").unwrap();
        assert_eq!(found.pattern, "/users/:id/posts/:post_id");
        assert_eq!(found.param("id"), Some("123"));
        assert_eq!(found.param("post_id"), Some("456"));
    }

    #[test]
    fn test_length_mismatch() {
        let matcher = router(&["/users/:id/posts/:post_id"]);
        assert!(matcher.find("/users/123/posts/456/comments").is_none());
    }

    #[test]
    fn test_prefix_only_node_is_not_a_match() {
        let matcher = router(&["/users/all/active"]);
        assert!(matcher.find("/users/all").is_none());
        assert!(matcher.find("/users").is_none());
    }

    #[test]
    fn test_non_terminal_param_is_rejected() {
        let matcher = router(&["/users/:id/posts"]);
        assert!(matcher.find("/users/1").is_none());
        assert!(matcher.find("/users/1/posts").is_some());
    }

    #[test]
    fn test_backtracks_out_of_failed_literal() {
        // "/a/b" descends the literal branch first, which dead-ends at "c"
        let mut matcher = Matcher::router_path();
        matcher.add_path_with_priority("/a/b/c", 0).unwrap();
        matcher.add_path_with_priority("/a/:x/d", 1).unwrap();

        let found = matcher.find("/a/b/d").unwrap();
        assert_eq!(found.pattern, "/a/:x/d");
        assert_eq!(found.param("x"), Some("b"));
    }

    #[test]
    fn test_failed_branch_leaves_no_bindings() {
        let mut matcher = Matcher::router_path();
        matcher.add_path_with_priority("/:a/x/:b/y", 0).unwrap();
        matcher.add_path_with_priority("/:c/x/z", 1).unwrap();

        let found = matcher.find("/v/x/z").unwrap();
        assert_eq!(found.pattern, "/:c/x/z");
        assert_eq!(found.params.len(), 1);
        assert_eq!(found.param("c"), Some("v"));
    }

    #[test]
    fn test_positional_order_follows_path() {
        let matcher = router(&["/:a/:b/:c"]);
        let found = matcher.find_positional("/1/2/3").unwrap();
        assert_eq!(found.pattern, "/:a/:b/:c");
        assert_eq!(found.params, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_max_depth() {
        let mut matcher = router(&["/*rest"]);
        assert!(matcher.find("/a/b/c/d").is_some());

        matcher.set_max_depth(Some(3));
        assert!(matcher.find("/a/b").is_some());
        assert!(matcher.find("/a/b/c/d").is_none());
        assert!(!matcher.is_match("/a/b/c/d"));
    }

    #[test]
    fn test_deep_pattern_rejected_over_limit() {
        let mut matcher = Matcher::mqtt_topic();
        matcher.set_max_depth(Some(16));

        let deep = vec!["a"; 200_000].join("/");
        assert_eq!(
            matcher.add_path(&deep),
            Err(MatchError::too_deep(deep.as_str(), 200_000, 16))
        );
        assert!(matcher.is_empty());
        assert!(matcher.find(&deep).is_none());

        let at_limit = vec!["a"; 16].join("/");
        assert!(matcher.add_path(&at_limit).is_ok());
        assert_eq!(matcher.find(&at_limit).unwrap().pattern, at_limit);
        drop(matcher);
    }

    #[test]
    fn test_empty_inputs() {
        let mut matcher = Matcher::router_path();
        assert_eq!(matcher.add_path(""), Err(MatchError::invalid_path("")));
        assert!(matcher.is_empty());
        assert!(matcher.find("").is_none());
        assert!(matcher.find_positional("").is_none());
    }

    #[test]
    fn test_from_fns() {
        fn brace(segment: &str) -> Option<&str> {
            segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
        }
        fn rest(segment: &str) -> Option<&str> {
            (segment == "...").then_some(segment)
        }

        let mut matcher = Matcher::from_fns(brace, rest, crate::dialect::split_on_slash);
        matcher.add_path("v1/{model}/infer").unwrap();
        matcher.add_path("static/...").unwrap();

        let found = matcher.find("v1/gpt/infer").unwrap();
        assert_eq!(found.param("model"), Some("gpt"));
        assert_eq!(matcher.find("static/css/site.css").unwrap().pattern, "static/...");
    }

    #[test]
    fn test_match_serializes() {
        let matcher = router(&["/:a"]);
        let found = matcher.find_positional("/x").unwrap();
        let json = serde_json::to_string(&found).unwrap();
        assert_eq!(json, r#"{"pattern":"/:a","params":["x"]}"#);
    }
}
