#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Rule-based query rewriting.
//!
//! Rules pair an input pattern with instructions. Inputs are compiled once
//! into an immutable trie (`RulesCollection`); per query, the matcher walks
//! the trie against a `TokenSequence` and yields `Action`s whose instructions
//! mutate the `Query`.
//!
//! # Example
//!
//! ```
//! use recast_core::{Occur, Query};
//! use recast_rules::{DeleteInstruction, Input, InputTerm, Instructions, Rewriter, RulesCollectionBuilder};
//!
//! let mut builder = RulesCollectionBuilder::new();
//! let delete = DeleteInstruction::new(vec![InputTerm::new("cheap")]);
//! builder
//!     .add_rule(&Input::from_values(["cheap"]), Instructions::single(delete))
//!     .expect("valid rule");
//! let rules = builder.build();
//!
//! let mut query = Query::from_words(Occur::Should, ["cheap", "laptop"]);
//! Rewriter::new(&rules).rewrite(&mut query);
//! assert_eq!(query.live_dis_count(), 1);
//! ```

pub mod delete;
pub mod index;
pub mod input;
pub mod instruction;
pub mod options;
pub mod rewriter;
pub mod trace;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod rewriter_tests;

pub use delete::DeleteInstruction;
pub use index::{Action, RulesCollection, RulesCollectionBuilder};
pub use input::{FieldSet, Input, InputTerm};
pub use instruction::{ApplyContext, Instruction, Instructions};
pub use options::{CaseMode, RulesOptions};
pub use rewriter::Rewriter;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Errors raised while registering rules.
///
/// A failed registration leaves the builder untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("rule input must contain at least one term")]
    EmptyInput,

    #[error("rule input term at position {position} has an empty value")]
    EmptyTermValue { position: usize },

    #[error("rule for input `{input}` has no instructions")]
    EmptyInstructions { input: String },
}

/// Result type for rule registration.
pub type Result<T> = std::result::Result<T, Error>;
