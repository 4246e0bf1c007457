//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use recast_rules::{RulesOptions, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::lookup::MatchArgs;
use crate::commands::rewrite::RewriteArgs;

pub struct CheckParams {
    pub rules_path: PathBuf,
    pub ignore_case: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: rules_path(m),
            ignore_case: m.get_flag("ignore_case"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            rules_path: p.rules_path,
            options: RulesOptions::new().ignore_case(p.ignore_case),
        }
    }
}

pub struct MatchParams {
    pub rules_path: PathBuf,
    pub query_text: String,
    pub ignore_case: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: rules_path(m),
            query_text: query_text(m),
            ignore_case: m.get_flag("ignore_case"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            rules_path: p.rules_path,
            query_text: p.query_text,
            options: RulesOptions::new().ignore_case(p.ignore_case),
            verbosity: (p.verbose > 0).then_some(Verbosity::Verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct RewriteParams {
    pub rules_path: PathBuf,
    pub query_text: String,
    pub ignore_case: bool,
    pub trace: bool,
    pub verbose: u8,
    pub json: bool,
    pub color: ColorChoice,
}

impl RewriteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: rules_path(m),
            query_text: query_text(m),
            ignore_case: m.get_flag("ignore_case"),
            trace: m.get_flag("trace"),
            verbose: m.get_count("verbose"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<RewriteParams> for RewriteArgs {
    fn from(p: RewriteParams) -> Self {
        // -v alone implies --trace
        let trace = p.trace || p.verbose > 0;
        let verbosity = if p.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        };
        Self {
            rules_path: p.rules_path,
            query_text: p.query_text,
            options: RulesOptions::new().ignore_case(p.ignore_case),
            trace: trace.then_some(verbosity),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn rules_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("rules_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn query_text(m: &ArgMatches) -> String {
    m.get_one::<String>("query_text").cloned().unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
