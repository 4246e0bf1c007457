#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for recast query rewriting.
//!
//! Two layers:
//! - **Query tree** (`Query`): arena of boolean containers, disjunction
//!   containers and term leaves that rewrite instructions mutate
//! - **Token sequence** (`TokenSequence`): position-indexed view of the terms
//!   that the rule matcher walks
//!
//! Both are per-query, single-owner structures. Nothing here is shared
//! between threads.

mod colors;
mod export;
mod invariants;
mod query;
mod sequence;
mod term;

#[cfg(test)]
mod sequence_tests;

pub use colors::Colors;
pub use export::Clause;
pub use query::{Node, NodeId, NodeKind, Query};
pub use sequence::{SequenceTerm, TokenSequence};
pub use term::{Occur, Term};
