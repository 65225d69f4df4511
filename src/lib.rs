//! Hierarchical path matching over a priority-ordered trie.
//!
//! One backtracking engine, two predefined dialects:
//!
//! ```
//! use trie_matcher::Matcher;
//!
//! let mut router = Matcher::router_path();
//! router.add_path("/groups/:group_id/users").unwrap();
//! let found = router.find("/groups/3/users").unwrap();
//! assert_eq!(found.param("group_id"), Some("3"));
//!
//! let mut topics = Matcher::mqtt_topic();
//! topics.add_path_with_priority("a/+/c", 0).unwrap();
//! topics.add_path_with_priority("a/#", 1).unwrap();
//! assert_eq!(topics.find("a/b/c").unwrap().pattern, "a/+/c");
//! ```

pub mod builder;
pub mod concurrent;
pub mod dialect;
pub mod error;
mod macros;
pub mod matcher;
pub mod pattern_set;
pub mod trie;

pub use builder::MatcherBuilder;
pub use concurrent::SharedMatcher;
pub use dialect::{Dialect, FnDialect, MqttTopic, RouterPath, Segments};
pub use error::{MatchError, MatchResult};
pub use matcher::{Matcher, PathMatch, PositionalMatch};
pub use pattern_set::{PatternEntry, PatternSet};
