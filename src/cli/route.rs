//! CLI route: run context turning parsed arguments into a patch request and a report.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_patch_outcome_json, format_patch_outcome_text};
use crate::config::Settings;
use crate::error::PatchError;
use crate::fields::FieldUpdateSet;
use crate::patcher::{self, PatchRequest};
use tracing::debug;

/// Runtime context for CLI execution: the resolved settings.
pub struct RunContext {
    settings: Settings,
}

impl RunContext {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the patch described by `cli` and render its report.
    pub fn execute(&self, cli: &Cli) -> Result<String, PatchError> {
        let updates = FieldUpdateSet::from_flags(cli.fields.flags());
        debug!(
            chain_key = %cli.chain_key,
            supplied = updates.len(),
            dry_run = cli.dry_run,
            "Patch request built"
        );

        let outcome = patcher::apply(PatchRequest {
            file: self.settings.file.clone(),
            chain_key: cli.chain_key.clone(),
            updates,
            dry_run: cli.dry_run,
        })?;

        match cli.format.as_str() {
            "json" => format_patch_outcome_json(&outcome),
            _ => Ok(format_patch_outcome_text(&outcome, self.settings.color)),
        }
    }
}
