//! List the actions a query would trigger.

use std::path::PathBuf;

use recast_core::{Colors, TokenSequence};
use recast_rules::{PrintTracer, RulesOptions, Verbosity};

use super::run_common::{load_rules_or_exit, parse_query_or_exit};

pub struct MatchArgs {
    pub rules_path: PathBuf,
    pub query_text: String,
    pub options: RulesOptions,
    /// Walk trace on stderr when set.
    pub verbosity: Option<Verbosity>,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let rules = load_rules_or_exit(&args.rules_path, args.options);
    let query = parse_query_or_exit(&args.query_text);
    let sequence = TokenSequence::from_dis_clauses(&query, query.root());

    let actions = match args.verbosity {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity, Colors::new(args.color));
            let actions = rules.rewrite_actions_traced(&sequence, &mut tracer);
            eprintln!("{}", tracer.render());
            actions
        }
        None => rules.rewrite_actions(&sequence),
    };

    if actions.is_empty() {
        log::info!("no rule matched `{}`", args.query_text);
    }
    for action in &actions {
        println!("{action}");
    }
}
