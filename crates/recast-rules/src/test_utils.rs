use std::fmt;

use recast_core::{NodeId, Term, TokenSequence};

use crate::{Action, ApplyContext, Instruction, Instructions};

/// Instruction that only carries a name.
#[derive(Debug)]
pub struct Named(pub &'static str);

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Instruction for Named {
    fn apply(&self, _ctx: &mut ApplyContext<'_>) {}
}

pub fn instructions(names: &[&'static str]) -> Instructions {
    names
        .iter()
        .fold(Instructions::default(), |list, &name| list.with(Named(name)))
}

/// Sequence from positions of `field:value` alternatives.
///
/// Leaf handles are numbered from 1 in insertion order.
pub fn sequence(positions: &[&[&str]]) -> TokenSequence {
    let mut seq = TokenSequence::new();
    let mut next_node = 1;
    for alternatives in positions {
        seq.next_position();
        for alt in *alternatives {
            seq.add_term(Term::parse(alt), NodeId::from_raw(next_node));
            next_node += 1;
        }
    }
    seq
}

pub fn render(actions: &[Action<'_>]) -> String {
    actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
