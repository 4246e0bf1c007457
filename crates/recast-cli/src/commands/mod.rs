pub mod check;
pub mod lookup;
pub mod rewrite;
pub mod rules_loader;
pub mod run_common;
