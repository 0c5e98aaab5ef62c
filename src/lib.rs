//! Deployment Patch: format-preserving updates of `deployment.toml`
//!
//! Sets contract addresses and deployment metadata for one chain under the `deployment`
//! table, leaving comments, ordering and every other key exactly as they were.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod logging;
pub mod patcher;
