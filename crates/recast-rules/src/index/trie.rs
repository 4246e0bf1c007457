//! Arena trie keyed by term value, with field-constrained edges.
//!
//! Each node maps a (case-folded) value to the edges leaving it. Several
//! edges may share a value when they differ in field constraint; an incoming
//! term may then follow more than one of them.

use indexmap::IndexMap;

use crate::input::{FieldSet, field_allowed};

pub(crate) type TrieNodeId = u32;

pub(crate) const ROOT: TrieNodeId = 0;

#[derive(Debug)]
pub(crate) struct Edge {
    pub fields: Option<FieldSet>,
    pub target: TrieNodeId,
}

impl Edge {
    #[inline]
    pub fn accepts(&self, field: Option<&str>) -> bool {
        field_allowed(self.fields.as_ref(), field)
    }
}

#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    edges: IndexMap<String, Vec<Edge>>,
    /// Indices into the collection's instruction lists, in registration order.
    terminal: Vec<u32>,
}

impl TrieNode {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.terminal.is_empty()
    }

    #[inline]
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn terminal(&self) -> &[u32] {
        &self.terminal
    }
}

#[derive(Debug)]
pub(crate) struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    #[inline]
    pub fn node(&self, id: TrieNodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    /// Edges leaving `id` labelled with `value`.
    #[inline]
    pub fn edges(&self, id: TrieNodeId, value: &str) -> &[Edge] {
        self.node(id)
            .edges
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Follow the edge with exactly this label, creating it if missing.
    pub fn child_or_insert(
        &mut self,
        id: TrieNodeId,
        value: &str,
        fields: Option<&FieldSet>,
    ) -> TrieNodeId {
        let existing = self
            .edges(id, value)
            .iter()
            .find(|edge| edge.fields.as_ref() == fields)
            .map(|edge| edge.target);
        if let Some(target) = existing {
            return target;
        }

        let target = self.nodes.len() as TrieNodeId;
        self.nodes.push(TrieNode::default());
        self.nodes[id as usize]
            .edges
            .entry(value.to_owned())
            .or_default()
            .push(Edge {
                fields: fields.cloned(),
                target,
            });
        target
    }

    pub fn mark_terminal(&mut self, id: TrieNodeId, instructions: u32) {
        self.nodes[id as usize].terminal.push(instructions);
    }
}
