//! One-time construction of the rule index.

use crate::instruction::Instructions;
use crate::input::Input;
use crate::options::RulesOptions;
use crate::{Error, Result};

use super::RulesCollection;
use super::trie::{ROOT, Trie};

/// Incremental builder for `RulesCollection`.
///
/// Rules with identical inputs (value and field set at every position)
/// converge on one trie terminal; a match then reports all their instruction
/// lists in registration order.
#[derive(Debug)]
pub struct RulesCollectionBuilder {
    trie: Trie,
    instructions: Vec<Instructions>,
    options: RulesOptions,
}

impl Default for RulesCollectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesCollectionBuilder {
    pub fn new() -> Self {
        Self::with_options(RulesOptions::default())
    }

    /// Builder normalizing every rule input under `options`.
    ///
    /// Options are fixed for the builder's lifetime: trie keys are folded on
    /// insertion and lookups fold with the same mode.
    pub fn with_options(options: RulesOptions) -> Self {
        Self {
            trie: Trie::new(),
            instructions: Vec::new(),
            options,
        }
    }

    /// Register a rule.
    ///
    /// Validation happens before the trie is touched, so a rejected rule
    /// leaves the builder unchanged.
    pub fn add_rule(&mut self, input: &Input, instructions: Instructions) -> Result<()> {
        validate(input, &instructions)?;

        let case = self.options.case_mode();
        let mut node = ROOT;
        for term in input.terms() {
            let key = case.fold(&term.value);
            node = self.trie.child_or_insert(node, &key, term.fields.as_ref());
        }

        let index = self.instructions.len() as u32;
        self.instructions.push(instructions);
        self.trie.mark_terminal(node, index);
        Ok(())
    }

    pub fn build(self) -> RulesCollection {
        let collection = RulesCollection {
            trie: self.trie,
            instructions: self.instructions,
            options: self.options,
        };
        log::debug!(
            "built rule index: {} rules, {} inputs, {} trie nodes",
            collection.rule_count(),
            collection.input_count(),
            collection.node_count()
        );
        collection
    }
}

fn validate(input: &Input, instructions: &Instructions) -> Result<()> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(position) = input.terms().iter().position(|t| t.value.is_empty()) {
        return Err(Error::EmptyTermValue { position });
    }
    if instructions.is_empty() {
        return Err(Error::EmptyInstructions {
            input: input.to_string(),
        });
    }
    Ok(())
}
