//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("recast")
        .about("Rule-based query rewriting")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(match_command())
        .subcommand(rewrite_command())
}

/// Validate a rules file and print index statistics.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a rules file")
        .after_help(
            r#"EXAMPLES:
  recast check rules.json
  cat rules.json | recast check -"#,
        )
        .arg(rules_path_arg())
        .arg(ignore_case_arg())
}

/// List the actions a query triggers, without applying them.
pub fn match_command() -> Command {
    Command::new("match")
        .about("List rule matches for a query")
        .after_help(
            r#"EXAMPLES:
  recast match rules.json -q 'cheap laptop'
  recast match rules.json -q 'title:laptop bag' -v"#,
        )
        .arg(rules_path_arg())
        .arg(query_text_arg())
        .arg(ignore_case_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Rewrite a query and print the resulting tree.
pub fn rewrite_command() -> Command {
    Command::new("rewrite")
        .about("Rewrite a query and print the result")
        .after_help(
            r#"EXAMPLES:
  recast rewrite rules.json -q 'cheap laptop'
  recast rewrite rules.json -q 'cheap laptop' --trace -v
  recast rewrite rules.json -q 'Cheap Laptop' --ignore-case --json"#,
        )
        .arg(rules_path_arg())
        .arg(query_text_arg())
        .arg(ignore_case_arg())
        .arg(trace_arg())
        .arg(verbose_arg())
        .arg(json_arg())
        .arg(color_arg())
}
