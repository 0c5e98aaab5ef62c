//! Integration tests for the deployment patcher

mod cli_binary;
mod test_utils;

pub use test_utils::{Workspace, FIXTURE};
