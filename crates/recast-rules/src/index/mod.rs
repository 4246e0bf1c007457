//! Rule index: trie of input patterns and the sequence matcher.
//!
//! Built once by `RulesCollectionBuilder`, then immutable. Lookups take
//! `&self` only, so one `RulesCollection` can serve any number of query
//! threads without locking.

mod action;
mod builder;
mod matcher;
mod trie;

#[cfg(test)]
mod builder_tests;

pub use action::Action;
pub use builder::RulesCollectionBuilder;

use crate::instruction::Instructions;
use crate::options::{CaseMode, RulesOptions};

use trie::Trie;

/// Immutable, shareable rule index.
#[derive(Debug)]
pub struct RulesCollection {
    trie: Trie,
    /// Instruction lists in registration order; trie terminals index into it.
    instructions: Vec<Instructions>,
    options: RulesOptions,
}

impl RulesCollection {
    pub fn options(&self) -> &RulesOptions {
        &self.options
    }

    pub fn case_mode(&self) -> CaseMode {
        self.options.case_mode()
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.instructions.len()
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Number of distinct inputs (terminal trie nodes).
    pub fn input_count(&self) -> usize {
        self.trie.terminal_count()
    }
}
