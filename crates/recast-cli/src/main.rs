mod cli;
mod commands;

use cli::{CheckParams, MatchParams, RewriteParams, build_cli};

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::lookup::run(params.into());
        }
        Some(("rewrite", m)) => {
            let params = RewriteParams::from_matches(m);
            commands::rewrite::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
