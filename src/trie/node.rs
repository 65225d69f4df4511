use std::collections::HashMap;

use crate::dialect::Dialect;

/// What a node matches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Literal,
    Param,
    Wildcard,
}

#[derive(Debug, Clone)]
pub struct PathTrieNode {
    raw: String,
    key: String,
    pattern: Option<String>,
    kind: SegmentKind,
    terminal: bool,
    priority: i32,
    // append-only, so positions stay valid
    children: Vec<PathTrieNode>,
    index: HashMap<String, usize>,
    // child positions, ascending by priority, insertion order among equals
    order: Vec<usize>,
}

impl PathTrieNode {
    pub(crate) fn root() -> Self {
        PathTrieNode {
            raw: String::new(),
            key: "/".to_string(),
            pattern: None,
            kind: SegmentKind::Literal,
            terminal: false,
            priority: 0,
            children: Vec::new(),
            index: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build a node for a raw segment, asking the dialect for a parameter
    /// first and a wildcard second.
    pub(crate) fn classify<D: Dialect>(dialect: &D, raw: &str, priority: i32) -> Self {
        let (key, kind) = match dialect.match_param(raw) {
            Some(name) => (name, SegmentKind::Param),
            None => match dialect.match_wildcard(raw) {
                Some(marker) => (marker, SegmentKind::Wildcard),
                None => (raw, SegmentKind::Literal),
            },
        };

        PathTrieNode {
            raw: raw.to_string(),
            key: key.to_string(),
            pattern: None,
            kind,
            terminal: false,
            priority,
            children: Vec::new(),
            index: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Segment text as written in the registered pattern
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Literal text, parameter name, or wildcard marker
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_param(&self) -> bool {
        self.kind == SegmentKind::Param
    }

    pub fn is_wildcard(&self) -> bool {
        self.kind == SegmentKind::Wildcard
    }

    /// Parameter name when this is a parameter node
    pub fn param_name(&self) -> Option<&str> {
        self.is_param().then_some(self.key.as_str())
    }

    /// Pattern recorded here, set on terminal and wildcard nodes only
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn terminal_pattern(&self) -> Option<&str> {
        self.pattern().filter(|_| self.terminal)
    }

    pub fn child(&self, raw: &str) -> Option<&PathTrieNode> {
        self.index.get(raw).and_then(|&at| self.children.get(at))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Children in the order lookups try them
    pub fn children_by_priority(&self) -> impl Iterator<Item = &PathTrieNode> + '_ {
        self.order.iter().filter_map(|&at| self.children.get(at))
    }

    pub(crate) fn child_mut(&mut self, raw: &str) -> Option<&mut PathTrieNode> {
        let at = *self.index.get(raw)?;
        self.children.get_mut(at)
    }

    pub(crate) fn attach(&mut self, child: PathTrieNode) {
        let children = &self.children;
        let pos = self.order.partition_point(|&at| {
            children
                .get(at)
                .map_or(true, |sibling| sibling.priority <= child.priority)
        });
        let at = self.children.len();
        self.order.insert(pos, at);
        self.index.insert(child.raw.clone(), at);
        self.children.push(child);
    }

    /// Detach every child, leaving this node a leaf
    pub(crate) fn take_children(&mut self) -> Vec<PathTrieNode> {
        self.index.clear();
        self.order.clear();
        std::mem::take(&mut self.children)
    }

    pub(crate) fn seal_wildcard(&mut self, pattern: &str) {
        self.pattern = Some(pattern.to_string());
    }

    /// Returns true when this node was not terminal before
    pub(crate) fn mark_terminal(&mut self, pattern: &str) -> bool {
        let was_terminal = self.terminal;
        self.terminal = true;
        self.pattern = Some(pattern.to_string());
        !was_terminal
    }
}
