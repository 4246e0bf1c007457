//! Rewrite instructions.
//!
//! An instruction is an open capability: anything that can mutate or annotate
//! the query given the terms a rule matched. Instruction kinds do not share
//! state with each other; each receives an `ApplyContext` per match.

use std::fmt;
use std::ops::Range;
use std::slice;
use std::sync::Arc;

use recast_core::{Query, SequenceTerm, TokenSequence};

use crate::options::CaseMode;
use crate::trace::Tracer;

/// A single rewrite operation attached to a rule.
///
/// Implementations are stored in the immutable rule index and shared across
/// query threads, hence `Send + Sync`. `Display` is used in traces and CLI
/// output.
pub trait Instruction: fmt::Debug + fmt::Display + Send + Sync {
    fn apply(&self, ctx: &mut ApplyContext<'_>);
}

/// Everything an instruction may inspect or mutate for one match.
pub struct ApplyContext<'a> {
    pub query: &'a mut Query,
    /// Sequence the match was found in. Built before any instruction ran, so
    /// it may reference leaves that are detached by now.
    pub sequence: &'a TokenSequence,
    /// Matched terms, one per matched position, in sequence order.
    pub matched: &'a [SequenceTerm],
    /// Matched span in the token sequence (end exclusive).
    pub span: Range<usize>,
    pub case: CaseMode,
    pub tracer: &'a mut dyn Tracer,
}

/// Ordered instructions of one rule.
///
/// Equality is identity: two lists are equal when they hold the same
/// instruction instances in the same order.
#[derive(Clone, Debug, Default)]
pub struct Instructions(Vec<Arc<dyn Instruction>>);

impl Instructions {
    pub fn new(instructions: Vec<Arc<dyn Instruction>>) -> Self {
        Self(instructions)
    }

    pub fn single(instruction: impl Instruction + 'static) -> Self {
        Self(vec![Arc::new(instruction)])
    }

    /// Append an instruction (builder style).
    pub fn with(mut self, instruction: impl Instruction + 'static) -> Self {
        self.0.push(Arc::new(instruction));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<dyn Instruction>> {
        self.0.iter()
    }
}

impl PartialEq for Instructions {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(&other.0).all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Eq for Instructions {}

impl<'a> IntoIterator for &'a Instructions {
    type Item = &'a Arc<dyn Instruction>;
    type IntoIter = slice::Iter<'a, Arc<dyn Instruction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, instruction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{instruction}")?;
        }
        f.write_str("]")
    }
}
