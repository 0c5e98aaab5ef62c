//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::PatchError;
use owo_colors::OwoColorize;

/// Map a patch error to the lines written to stderr.
///
/// A missing chain also lists the chains the file does have.
pub fn map_error(e: &PatchError, color: bool) -> String {
    let line = format!("❌ {}", e);
    let mut out = if color { line.red().to_string() } else { line };

    if let PatchError::ChainNotFound { available, .. } = e {
        out.push_str(&format!("\nAvailable chains: {:?}", available));
    }
    out
}
