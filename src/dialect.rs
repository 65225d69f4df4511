//! Segment dialects.
//!
//! A dialect decides how a path is cut into segments and which segments are
//! named parameters or wildcards. The trie and matcher are generic over it.

use smallvec::SmallVec;

use crate::error::{MatchError, MatchResult};

pub mod fn_dialect;
pub mod mqtt_topic;
pub mod router_path;

pub use fn_dialect::FnDialect;
pub use mqtt_topic::MqttTopic;
pub use router_path::RouterPath;

/// Segments borrowed from the input path
pub type Segments<'a> = SmallVec<[&'a str; 8]>;

pub trait Dialect {
    /// Split a path into raw segments, rejecting malformed input
    fn split<'a>(&self, path: &'a str) -> MatchResult<Segments<'a>>;

    /// Parameter name for a raw segment, if it is a parameter segment
    fn match_param<'a>(&self, segment: &'a str) -> Option<&'a str>;

    /// Wildcard marker for a raw segment, if it is a wildcard segment
    fn match_wildcard<'a>(&self, segment: &'a str) -> Option<&'a str>;
}

/// Splitter shared by both predefined dialects: empty input is invalid,
/// anything else is cut on every `/`.
pub fn split_on_slash(path: &str) -> MatchResult<Segments<'_>> {
    if path.is_empty() {
        return Err(MatchError::invalid_path(path));
    }
    Ok(path.split('/').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_empty_segments() {
        let segments = split_on_slash("/groups//users/").unwrap();
        assert_eq!(segments.as_slice(), &["", "groups", "", "users", ""]);
    }

    #[test]
    fn test_split_rejects_empty() {
        assert_eq!(split_on_slash(""), Err(MatchError::invalid_path("")));
    }

    #[test]
    fn test_split_single_segment() {
        assert_eq!(split_on_slash("a").unwrap().as_slice(), &["a"]);
        assert_eq!(split_on_slash("/").unwrap().as_slice(), &["", ""]);
    }
}
