//! Position-indexed token sequence consumed by the rule matcher.
//!
//! Each position holds one or more alternative terms (e.g. synonyms sharing a
//! slot). Every term remembers the query leaf it came from, so instructions
//! can mutate the exact node that matched instead of an equal-valued copy.

use crate::query::{NodeId, NodeKind, Query};
use crate::term::Term;

/// A term at a sequence position, with its originating term leaf.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SequenceTerm {
    pub term: Term,
    pub node: NodeId,
}

impl SequenceTerm {
    pub fn new(term: Term, node: NodeId) -> Self {
        Self { term, node }
    }
}

/// Append-only sequence of term positions.
///
/// Positions are added with `next_position`, alternatives with `add_term`.
/// The whole sequence can be cleared and reused for another query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence {
    pub(crate) positions: Vec<Vec<SequenceTerm>>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from the disjunction clauses of a boolean container.
    ///
    /// Each attached disjunction child becomes one position, in clause order;
    /// its terms become the alternatives. Nested boolean clauses are skipped.
    pub fn from_dis_clauses(query: &Query, bool_id: NodeId) -> Self {
        let mut seq = Self::new();
        for &clause in query.clauses(bool_id) {
            let NodeKind::Dis { terms } = query.kind(clause) else {
                continue;
            };
            seq.next_position();
            for &leaf in terms {
                if let Some(term) = query.term(leaf) {
                    seq.add_term(term.clone(), leaf);
                }
            }
        }
        seq
    }

    /// Open a new, empty position at the end.
    pub fn next_position(&mut self) {
        self.positions.push(Vec::new());
    }

    /// Add an alternative term to the last position.
    ///
    /// # Panics
    /// Panics if no position has been opened yet.
    pub fn add_term(&mut self, term: Term, node: NodeId) {
        self.ensure_last_position().push(SequenceTerm::new(term, node));
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Alternatives at a position.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn position(&self, index: usize) -> &[SequenceTerm] {
        &self.positions[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[SequenceTerm]> {
        self.positions.iter().map(Vec::as_slice)
    }
}
