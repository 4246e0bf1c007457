//! Deletion instruction.
//!
//! Removes matched term leaves from their disjunction containers, but never
//! empties the query: a removal that would leave no live disjunction
//! anywhere in the tree is skipped. The check runs per term, against the
//! tree as it stands after all earlier removals.

use std::fmt;

use recast_core::{NodeId, Query, SequenceTerm};

use crate::input::InputTerm;
use crate::instruction::{ApplyContext, Instruction};
use crate::options::CaseMode;

/// Delete matched terms, or only those matching `terms` when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteInstruction {
    terms: Vec<InputTerm>,
}

impl DeleteInstruction {
    pub fn new(terms: Vec<InputTerm>) -> Self {
        Self { terms }
    }

    /// Delete every matched term.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &[InputTerm] {
        &self.terms
    }

    fn selects(&self, matched: &SequenceTerm, case: CaseMode) -> bool {
        self.terms.is_empty() || self.terms.iter().any(|t| t.matches(&matched.term, case))
    }
}

/// Whether removing `leaf` would leave the query with no live disjunction.
fn is_last_live_term(query: &Query, leaf: NodeId) -> bool {
    let Some(dis) = query.parent(leaf) else {
        return false;
    };
    query.terms(dis).len() == 1 && query.live_dis_count() == 1
}

impl Instruction for DeleteInstruction {
    fn apply(&self, ctx: &mut ApplyContext<'_>) {
        for matched in ctx.matched {
            if !self.selects(matched, ctx.case) || !ctx.query.is_attached(matched.node) {
                continue;
            }
            if is_last_live_term(ctx.query, matched.node) {
                log::debug!(
                    "keeping `{}` at {}..{}: it is the last live term",
                    matched.term,
                    ctx.span.start,
                    ctx.span.end
                );
                ctx.tracer.trace_delete_skipped(matched);
                continue;
            }
            ctx.query.remove_term(matched.node);
            ctx.tracer.trace_delete(matched);
        }
    }
}

impl fmt::Display for DeleteInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE")?;
        if !self.terms.is_empty() {
            f.write_str(":")?;
            for term in &self.terms {
                write!(f, " {term}")?;
            }
        }
        Ok(())
    }
}
