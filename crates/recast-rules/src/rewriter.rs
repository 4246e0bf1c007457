//! Query rewriting driver.
//!
//! Every attached boolean container is matched on its own: its disjunction
//! clauses form one token sequence. Nested containers are rewritten before
//! their parents. Actions are applied in the order the matcher returns them,
//! and each action's instruction lists in registration order.

use recast_core::{Query, TokenSequence};

use crate::index::RulesCollection;
use crate::instruction::ApplyContext;
use crate::trace::{NoopTracer, Tracer};

/// Applies a rule index to queries. Cheap to create per query.
#[derive(Clone, Copy, Debug)]
pub struct Rewriter<'r> {
    rules: &'r RulesCollection,
}

impl<'r> Rewriter<'r> {
    pub fn new(rules: &'r RulesCollection) -> Self {
        Self { rules }
    }

    /// Rewrite in place. Returns the number of matched actions, including
    /// those whose instructions ended up changing nothing.
    pub fn rewrite(&self, query: &mut Query) -> usize {
        self.rewrite_traced(query, &mut NoopTracer)
    }

    pub fn rewrite_traced<T: Tracer>(&self, query: &mut Query, tracer: &mut T) -> usize {
        let case = self.rules.case_mode();
        let mut applied = 0;

        for container in query.bools_post_order() {
            // An earlier rewrite may have emptied and detached it.
            if !query.is_attached(container) {
                continue;
            }
            let sequence = TokenSequence::from_dis_clauses(query, container);
            if sequence.is_empty() {
                continue;
            }
            tracer.trace_sequence(container, &sequence);

            let actions = self.rules.rewrite_actions_traced(&sequence, tracer);
            for action in &actions {
                for list in &action.instructions {
                    for instruction in list.iter() {
                        tracer.trace_instruction(&**instruction, &action.span());
                        let mut ctx = ApplyContext {
                            query: &mut *query,
                            sequence: &sequence,
                            matched: &action.terms,
                            span: action.span(),
                            case,
                            tracer: &mut *tracer,
                        };
                        instruction.apply(&mut ctx);
                    }
                }
            }
            applied += actions.len();
        }

        applied
    }
}
