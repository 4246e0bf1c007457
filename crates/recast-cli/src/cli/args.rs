//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Rules file (positional, required).
pub fn rules_path_arg() -> Arg {
    Arg::new("rules_path")
        .value_name("RULES")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON rules file (use \"-\" for stdin)")
}

/// Query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .required(true)
        .help("Query words, whitespace separated (field:value allowed)")
}

/// Case-insensitive value matching (--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .short('i')
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Match term values case-insensitively")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Print a rewrite trace to stderr (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print matched actions and deletions to stderr")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbose trace (trie walks, dead ends, applied instructions)")
}

/// Output JSON instead of a tree dump (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the rewritten query as JSON")
}
