//! Rewrite a query and print the result.

use std::path::PathBuf;

use recast_core::Colors;
use recast_rules::{PrintTracer, Rewriter, RulesOptions, Verbosity};

use super::run_common::{load_rules_or_exit, parse_query_or_exit};

pub struct RewriteArgs {
    pub rules_path: PathBuf,
    pub query_text: String,
    pub options: RulesOptions,
    /// Rewrite trace on stderr when set.
    pub trace: Option<Verbosity>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: RewriteArgs) {
    let rules = load_rules_or_exit(&args.rules_path, args.options);
    let mut query = parse_query_or_exit(&args.query_text);
    let colors = Colors::new(args.color && !args.json);
    let rewriter = Rewriter::new(&rules);

    let applied = match args.trace {
        Some(verbosity) => {
            let mut tracer = PrintTracer::new(verbosity, colors);
            let applied = rewriter.rewrite_traced(&mut query, &mut tracer);
            if !tracer.lines().is_empty() {
                eprintln!("{}", tracer.render());
                eprintln!("{}---{}", colors.dim, colors.reset);
            }
            applied
        }
        None => rewriter.rewrite(&mut query),
    };
    log::info!("{applied} actions applied");

    if args.json {
        match serde_json::to_string_pretty(&query.to_clause()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", query.dump_with(colors));
}
