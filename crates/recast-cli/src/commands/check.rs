use std::path::PathBuf;

use recast_rules::RulesOptions;

use super::run_common::load_rules_or_exit;

pub struct CheckArgs {
    pub rules_path: PathBuf,
    pub options: RulesOptions,
}

pub fn run(args: CheckArgs) {
    let rules = load_rules_or_exit(&args.rules_path, args.options);
    println!(
        "{} rules, {} distinct inputs, {} trie nodes",
        rules.rule_count(),
        rules.input_count(),
        rules.node_count()
    );
}
