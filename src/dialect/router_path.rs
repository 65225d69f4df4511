use super::{split_on_slash, Dialect, Segments};
use crate::error::MatchResult;

/// HTTP router style: `/projects/:project_id/*rest`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterPath;

impl Dialect for RouterPath {
    fn split<'a>(&self, path: &'a str) -> MatchResult<Segments<'a>> {
        split_on_slash(path)
    }

    // A lone ":" is a literal, not an unnamed parameter.
    fn match_param<'a>(&self, segment: &'a str) -> Option<&'a str> {
        segment.strip_prefix(':').filter(|name| !name.is_empty())
    }

    fn match_wildcard<'a>(&self, segment: &'a str) -> Option<&'a str> {
        segment.starts_with('*').then_some("*")
    }
}
