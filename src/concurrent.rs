//! Shared matcher for concurrent lookups.
//!
//! Registration takes the write lock, lookups share the read lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dialect::Dialect;
use crate::error::MatchResult;
use crate::matcher::{Matcher, PathMatch, PositionalMatch};

/// Cloneable handle to one matcher shared between threads
pub struct SharedMatcher<D> {
    inner: Arc<RwLock<Matcher<D>>>,
}

impl<D> Clone for SharedMatcher<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Dialect> SharedMatcher<D> {
    /// Wrap an already built matcher
    pub fn new(matcher: Matcher<D>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(matcher)),
        }
    }

    /// Register a pattern, blocking until running lookups finish
    pub fn add_path(&self, pattern: &str) -> MatchResult<()> {
        self.write().add_path(pattern)
    }

    pub fn add_path_with_priority(&self, pattern: &str, priority: i32) -> MatchResult<()> {
        self.write().add_path_with_priority(pattern, priority)
    }

    pub fn find(&self, path: &str) -> Option<PathMatch> {
        self.read().find(path)
    }

    pub fn find_positional(&self, path: &str) -> Option<PositionalMatch> {
        self.read().find_positional(path)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking writer can at worst leave extra prefix nodes behind, which
    // never match on their own, so poisoned locks are recovered.
    fn read(&self) -> RwLockReadGuard<'_, Matcher<D>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Matcher<D>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: Dialect> From<Matcher<D>> for SharedMatcher<D> {
    fn from(matcher: Matcher<D>) -> Self {
        Self::new(matcher)
    }
}
