use super::{Dialect, Segments};
use crate::error::MatchResult;

/// Dialect assembled from three function values.
///
/// The recognizers must be side-effect free, and no segment may satisfy both.
#[derive(Clone, Copy)]
pub struct FnDialect<P, W, S> {
    match_param: P,
    match_wildcard: W,
    split: S,
}

impl<P, W, S> FnDialect<P, W, S>
where
    P: Fn(&str) -> Option<&str>,
    W: Fn(&str) -> Option<&str>,
    S: Fn(&str) -> MatchResult<Segments<'_>>,
{
    pub fn new(match_param: P, match_wildcard: W, split: S) -> Self {
        FnDialect {
            match_param,
            match_wildcard,
            split,
        }
    }
}

impl<P, W, S> Dialect for FnDialect<P, W, S>
where
    P: Fn(&str) -> Option<&str>,
    W: Fn(&str) -> Option<&str>,
    S: Fn(&str) -> MatchResult<Segments<'_>>,
{
    fn split<'a>(&self, path: &'a str) -> MatchResult<Segments<'a>> {
        (self.split)(path)
    }

    fn match_param<'a>(&self, segment: &'a str) -> Option<&'a str> {
        (self.match_param)(segment)
    }

    fn match_wildcard<'a>(&self, segment: &'a str) -> Option<&'a str> {
        (self.match_wildcard)(segment)
    }
}

impl<P, W, S> std::fmt::Debug for FnDialect<P, W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDialect").finish_non_exhaustive()
    }
}
