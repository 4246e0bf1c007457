//! Mutable query clause tree.
//!
//! The tree is an arena of nodes addressed by `NodeId`. Parent links are plain
//! handles, never ownership edges, so detaching a node is a slot removal in
//! the parent's child list. Detached nodes stay in the arena but are no longer
//! reachable from the root.
//!
//! Shape:
//! - `Bool`: ordered clauses (nested `Bool` or `Dis`), each with an `Occur`
//! - `Dis`: alternative term leaves for one conceptual query position
//! - `Term`: leaf value, owned by exactly one `Dis`

use crate::colors::Colors;
use crate::term::{Occur, Term};

/// Handle to a node in a `Query` arena.
///
/// Handles are only meaningful for the query that created them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a NodeId from a raw index. Use only in tests and deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Boolean container.
    Bool { clauses: Vec<NodeId> },
    /// Disjunction container holding alternative term leaves.
    Dis { terms: Vec<NodeId> },
    /// Term leaf.
    Term(Term),
}

#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    occur: Occur,
    parent: Option<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn occur(&self) -> Occur {
        self.occur
    }

    /// Owning container, `None` for the root and for detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Query clause tree rooted at a boolean container.
#[derive(Clone, Debug)]
pub struct Query {
    nodes: Vec<Node>,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    const ROOT: NodeId = NodeId(0);

    /// Create a query with an empty root boolean container.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Bool {
                    clauses: Vec::new(),
                },
                occur: Occur::Should,
                parent: None,
            }],
        }
    }

    /// Build a flat query: one disjunction per word, one term per disjunction.
    ///
    /// Words of the form `field:value` become field-qualified terms.
    pub fn from_words<'a>(occur: Occur, words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut query = Self::new();
        let root = query.root();
        for word in words {
            let dis = query.add_dis(root, occur);
            query.add_term(dis, Term::parse(word));
        }
        query
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Append a boolean container to `parent` (which must be a boolean container).
    pub fn add_bool(&mut self, parent: NodeId, occur: Occur) -> NodeId {
        self.push_clause(
            parent,
            occur,
            NodeKind::Bool {
                clauses: Vec::new(),
            },
        )
    }

    /// Append a disjunction container to `parent` (which must be a boolean container).
    pub fn add_dis(&mut self, parent: NodeId, occur: Occur) -> NodeId {
        self.push_clause(parent, occur, NodeKind::Dis { terms: Vec::new() })
    }

    /// Append a term leaf to the disjunction container `dis`.
    pub fn add_term(&mut self, dis: NodeId, term: Term) -> NodeId {
        let id = self.next_id();
        self.ensure_terms_mut(dis).push(id);
        self.nodes.push(Node {
            kind: NodeKind::Term(term),
            occur: Occur::Should,
            parent: Some(dis),
        });
        id
    }

    fn push_clause(&mut self, parent: NodeId, occur: Occur, kind: NodeKind) -> NodeId {
        let id = self.next_id();
        self.ensure_clauses_mut(parent).push(id);
        self.nodes.push(Node {
            kind,
            occur,
            parent: Some(parent),
        });
        id
    }

    fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u32)
    }

    /// Get a node by handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this query.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn occur(&self, id: NodeId) -> Occur {
        self.node(id).occur
    }

    /// Term value of a leaf, `None` for containers.
    pub fn term(&self, id: NodeId) -> Option<&Term> {
        match &self.node(id).kind {
            NodeKind::Term(term) => Some(term),
            _ => None,
        }
    }

    /// Clauses of a boolean container.
    pub fn clauses(&self, id: NodeId) -> &[NodeId] {
        self.ensure_clauses(id)
    }

    /// Term leaves of a disjunction container.
    pub fn terms(&self, id: NodeId) -> &[NodeId] {
        self.ensure_terms(id)
    }

    /// Whether the node is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == Self::ROOT {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Number of attached disjunction containers holding at least one term.
    pub fn live_dis_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            match &self.node(id).kind {
                NodeKind::Bool { clauses } => stack.extend(clauses.iter().copied()),
                NodeKind::Dis { terms } => {
                    if !terms.is_empty() {
                        count += 1;
                    }
                }
                NodeKind::Term(_) => {}
            }
        }
        count
    }

    /// Attached boolean containers, nested containers before their parents.
    ///
    /// Siblings keep their clause order. The root is always last.
    pub fn bools_post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        // (node, children already expanded)
        let mut stack = vec![(Self::ROOT, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            for &clause in self.clauses(id).iter().rev() {
                if matches!(self.node(clause).kind, NodeKind::Bool { .. }) {
                    stack.push((clause, false));
                }
            }
        }
        out
    }

    /// Detach a term leaf from its disjunction container.
    ///
    /// Containers left empty are detached from their parents, up to (but never
    /// including) the root. Returns `false` if the term was already detached.
    ///
    /// This does not enforce any non-emptiness policy; callers decide whether
    /// a removal is allowed.
    pub fn remove_term(&mut self, term: NodeId) -> bool {
        self.ensure_term(term);
        let Some(dis) = self.nodes[term.index()].parent.take() else {
            return false;
        };
        let slot = self.ensure_child_slot(dis, term);
        self.ensure_terms_mut(dis).remove(slot);
        self.detach_if_empty(dis);
        true
    }

    fn detach_if_empty(&mut self, mut id: NodeId) {
        while id != Self::ROOT && self.is_empty_container(id) {
            let Some(parent) = self.nodes[id.index()].parent.take() else {
                return;
            };
            let slot = self.ensure_child_slot(parent, id);
            self.ensure_clauses_mut(parent).remove(slot);
            id = parent;
        }
    }

    fn is_empty_container(&self, id: NodeId) -> bool {
        match &self.node(id).kind {
            NodeKind::Bool { clauses } => clauses.is_empty(),
            NodeKind::Dis { terms } => terms.is_empty(),
            NodeKind::Term(_) => false,
        }
    }

    pub(crate) fn child_slot(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        match &self.node(parent).kind {
            NodeKind::Bool { clauses } => clauses.iter().position(|&c| c == child),
            NodeKind::Dis { terms } => terms.iter().position(|&t| t == child),
            NodeKind::Term(_) => None,
        }
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.index()].kind
    }

    /// Render the attached tree as indented text.
    pub fn dump(&self) -> String {
        self.dump_with(Colors::OFF)
    }

    pub fn dump_with(&self, colors: Colors) -> String {
        let mut lines = Vec::new();
        self.dump_node(Self::ROOT, 0, colors, &mut lines);
        lines.join("\n")
    }

    fn dump_node(&self, id: NodeId, depth: usize, c: Colors, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let node = self.node(id);
        let occur = if id == Self::ROOT {
            String::new()
        } else {
            format!("{} ", c.paint_dim(node.occur))
        };
        match &node.kind {
            NodeKind::Bool { clauses } => {
                out.push(format!("{indent}{occur}{}", c.paint_keyword("Bool")));
                for &clause in clauses {
                    self.dump_node(clause, depth + 1, c, out);
                }
            }
            NodeKind::Dis { terms } => {
                out.push(format!("{indent}{occur}{}", c.paint_keyword("Dis")));
                for &term in terms {
                    self.dump_node(term, depth + 1, c, out);
                }
            }
            NodeKind::Term(term) => out.push(format!("{indent}{}", c.paint_term(term))),
        }
    }
}
