use std::fmt;
use std::ops::Range;

use recast_core::SequenceTerm;

use crate::instruction::Instructions;

/// One match occurrence.
///
/// `instructions` holds the instruction lists of every rule sharing the
/// matched input, in registration order. `terms` holds the concrete term
/// taken at each matched position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action<'r> {
    pub instructions: Vec<&'r Instructions>,
    pub terms: Vec<SequenceTerm>,
    /// First matched position.
    pub start: usize,
    /// Position after the last matched one.
    pub end: usize,
}

impl Action<'_> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)?;
        for term in &self.terms {
            write!(f, " {}", term.term)?;
        }
        f.write_str(" =>")?;
        for list in &self.instructions {
            write!(f, " {list}")?;
        }
        Ok(())
    }
}
