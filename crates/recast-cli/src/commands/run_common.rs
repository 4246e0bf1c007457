//! Setup shared by match and rewrite.

use std::path::Path;

use recast_core::{Occur, Query};
use recast_rules::{RulesCollection, RulesOptions};

use super::rules_loader::load_rules;

/// Load rules or exit with an error message.
pub fn load_rules_or_exit(path: &Path, options: RulesOptions) -> RulesCollection {
    load_rules(path, options).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// One optional disjunction per whitespace-separated word.
pub fn parse_query_or_exit(text: &str) -> Query {
    if text.split_whitespace().next().is_none() {
        eprintln!("error: query cannot be empty");
        std::process::exit(1);
    }
    Query::from_words(Occur::Should, text.split_whitespace())
}
