//! Serializable snapshot of the attached query tree.
//!
//! This is the hand-off shape for search backends: detached nodes are gone
//! and every container is inlined into its parent.

use serde::Serialize;

use crate::query::{NodeId, NodeKind, Query};
use crate::term::{Occur, Term};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Clause {
    Bool { occur: Occur, clauses: Vec<Clause> },
    Dis { occur: Occur, terms: Vec<Term> },
}

impl Query {
    /// Snapshot the attached tree, starting at the root.
    pub fn to_clause(&self) -> Clause {
        self.clause_at(self.root())
    }

    fn clause_at(&self, id: NodeId) -> Clause {
        let occur = self.occur(id);
        match self.kind(id) {
            NodeKind::Bool { clauses } => Clause::Bool {
                occur,
                clauses: clauses.iter().map(|&c| self.clause_at(c)).collect(),
            },
            NodeKind::Dis { terms } => Clause::Dis {
                occur,
                terms: terms.iter().filter_map(|&t| self.term(t).cloned()).collect(),
            },
            NodeKind::Term(_) => unreachable!("term leaves only appear inside disjunctions"),
        }
    }
}
