//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::query::{NodeId, NodeKind, Query};
use crate::sequence::{SequenceTerm, TokenSequence};

impl Query {
    pub(crate) fn ensure_clauses(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Bool { clauses } => clauses,
            other => panic!("Query: node {} is not a boolean container ({other:?})", id.as_u32()),
        }
    }

    pub(crate) fn ensure_clauses_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        match self.kind_mut(id) {
            NodeKind::Bool { clauses } => clauses,
            other => panic!("Query: node {} is not a boolean container ({other:?})", id.as_u32()),
        }
    }

    pub(crate) fn ensure_terms(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Dis { terms } => terms,
            other => panic!(
                "Query: node {} is not a disjunction container ({other:?})",
                id.as_u32()
            ),
        }
    }

    pub(crate) fn ensure_terms_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        match self.kind_mut(id) {
            NodeKind::Dis { terms } => terms,
            other => panic!(
                "Query: node {} is not a disjunction container ({other:?})",
                id.as_u32()
            ),
        }
    }

    pub(crate) fn ensure_term(&self, id: NodeId) {
        if !matches!(self.kind(id), NodeKind::Term(_)) {
            panic!("Query: node {} is not a term leaf", id.as_u32());
        }
    }

    pub(crate) fn ensure_child_slot(&self, parent: NodeId, child: NodeId) -> usize {
        self.child_slot(parent, child).unwrap_or_else(|| {
            panic!(
                "Query: node {} not found in its parent {} \
                 (parent links must mirror child lists)",
                child.as_u32(),
                parent.as_u32()
            )
        })
    }
}

impl TokenSequence {
    pub(crate) fn ensure_last_position(&mut self) -> &mut Vec<SequenceTerm> {
        self.positions
            .last_mut()
            .expect("TokenSequence: add_term called before next_position")
    }
}
