//! CLI domain: parse, route, output, and presentation only.
//! The patch itself lives in [`crate::patcher`].

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, FieldArgs, DEFAULT_CHAIN_KEY};
pub use presentation::{format_patch_outcome_json, format_patch_outcome_text};
pub use route::RunContext;
