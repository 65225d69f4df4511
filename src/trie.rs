//! Pattern trie.
//!
//! Nodes are owned by their parent and keyed by the raw segment text used at
//! registration, so patterns sharing a prefix share nodes.

use log::{debug, warn};

use crate::dialect::Dialect;

pub mod node;

pub use node::{PathTrieNode, SegmentKind};

#[derive(Debug, Clone)]
pub struct PathTrie {
    root: PathTrieNode,
    patterns: usize,
}

impl PathTrie {
    pub fn new() -> Self {
        PathTrie {
            root: PathTrieNode::root(),
            patterns: 0,
        }
    }

    pub fn root(&self) -> &PathTrieNode {
        &self.root
    }

    /// Number of distinct patterns recorded on terminal or wildcard nodes
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Insert an already split pattern.
    ///
    /// Existing nodes are reused untouched, so the priority of a node is the
    /// one given by the first pattern that created it. A newly created
    /// wildcard node takes the whole pattern and the remaining segments are
    /// dropped. Returns true when a new pattern was recorded.
    pub fn insert<D: Dialect>(
        &mut self,
        dialect: &D,
        segments: &[&str],
        pattern: &str,
        priority: i32,
    ) -> bool {
        if segments.is_empty() {
            return false;
        }
        let mut node = &mut self.root;

        for raw in segments {
            let created = node.child(raw).is_none();
            if created {
                let child = PathTrieNode::classify(dialect, raw, priority);
                debug!(
                    "New {:?} node '{}' (key: '{}', priority: {}) for pattern '{}'",
                    child.kind(),
                    raw,
                    child.key(),
                    priority,
                    pattern
                );
                node.attach(child);
            }

            let Some(child) = node.child_mut(raw) else {
                return false;
            };

            if created && child.is_wildcard() {
                child.seal_wildcard(pattern);
                self.patterns += 1;
                return true;
            }

            if !created && child.is_wildcard() {
                if child.priority() != priority {
                    warn!(
                        "Wildcard pattern '{}' keeps priority {}, ignoring {} from pattern '{}'",
                        child.pattern().unwrap_or_default(),
                        child.priority(),
                        priority,
                        pattern
                    );
                }
                debug!(
                    "Pattern '{}' is absorbed by wildcard pattern '{}'",
                    pattern,
                    child.pattern().unwrap_or_default()
                );
                return false;
            }

            node = child;
        }

        let recorded = node.mark_terminal(pattern);
        if recorded {
            self.patterns += 1;
        } else if node.priority() != priority {
            warn!(
                "Pattern '{}' is already registered, keeping priority {} over {}",
                pattern,
                node.priority(),
                priority
            );
        }
        recorded
    }
}

// Nested nodes would otherwise be dropped recursively, one frame per level.
impl Drop for PathTrie {
    fn drop(&mut self) {
        let mut stack = self.root.take_children();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

impl Default for PathTrie {
    fn default() -> Self {
        Self::new()
    }
}
