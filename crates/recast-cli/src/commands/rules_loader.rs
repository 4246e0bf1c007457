//! JSON rules file loading.
//!
//! A rules file is an array of rules:
//!
//! ```json
//! [
//!   { "input": ["cheap", { "value": "laptop", "fields": ["title"] }],
//!     "instructions": [{ "type": "delete", "terms": ["cheap"] }] }
//! ]
//! ```
//!
//! A term is either a bare value or an object with a value and an optional
//! field list; other keys are rejected. A delete instruction without `terms`
//! deletes every matched term.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use recast_rules::{
    DeleteInstruction, Input, InputTerm, Instruction, Instructions, RulesCollection,
    RulesCollectionBuilder, RulesOptions,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid rules file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule #{number}: {source}")]
    Rule {
        /// 1-based position in the file.
        number: usize,
        #[source]
        source: recast_rules::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TermDef {
    Value(String),
    Qualified(QualifiedTermDef),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QualifiedTermDef {
    value: String,
    #[serde(default)]
    fields: Vec<String>,
}

impl From<TermDef> for InputTerm {
    fn from(def: TermDef) -> Self {
        match def {
            TermDef::Value(value) => InputTerm::new(value),
            TermDef::Qualified(QualifiedTermDef { value, fields }) => {
                InputTerm::with_fields(value, fields)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InstructionDef {
    Delete {
        #[serde(default)]
        terms: Vec<TermDef>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDef {
    input: Vec<TermDef>,
    instructions: Vec<InstructionDef>,
}

impl InstructionDef {
    fn into_instruction(self) -> Arc<dyn Instruction> {
        match self {
            InstructionDef::Delete { terms } => Arc::new(DeleteInstruction::new(
                terms.into_iter().map(InputTerm::from).collect(),
            )),
        }
    }
}

impl RuleDef {
    fn into_parts(self) -> (Input, Instructions) {
        let input = Input::new(self.input.into_iter().map(InputTerm::from).collect());
        let instructions = Instructions::new(
            self.instructions
                .into_iter()
                .map(InstructionDef::into_instruction)
                .collect(),
        );
        (input, instructions)
    }
}

/// Read and build a rules file. `-` reads stdin.
pub fn load_rules(path: &Path, options: RulesOptions) -> Result<RulesCollection, LoadError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_rules(&text, options)
}

pub fn parse_rules(text: &str, options: RulesOptions) -> Result<RulesCollection, LoadError> {
    let defs: Vec<RuleDef> = serde_json::from_str(text)?;
    let mut builder = RulesCollectionBuilder::with_options(options);
    for (i, def) in defs.into_iter().enumerate() {
        let (input, instructions) = def.into_parts();
        builder
            .add_rule(&input, instructions)
            .map_err(|source| LoadError::Rule {
                number: i + 1,
                source,
            })?;
    }
    Ok(builder.build())
}
