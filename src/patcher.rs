//! The patch operation: validate, load, resolve the chain, assign fields, write back.
//!
//! Validation and lookup happen before any assignment and the file is written only after
//! every assignment succeeded, so a failed run never leaves a partially patched file.

use crate::document::DeploymentDocument;
use crate::error::PatchError;
use crate::fields::{FieldUpdate, FieldUpdateSet};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One invocation's worth of input
#[derive(Debug, Clone)]
pub struct PatchRequest {
    pub file: PathBuf,
    pub chain_key: String,
    pub updates: FieldUpdateSet,
    pub dry_run: bool,
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub file: PathBuf,
    pub chain_key: String,
    pub updates: Vec<FieldUpdate>,
    pub dry_run: bool,
    /// Whether the file was rewritten (false only for dry runs)
    pub written: bool,
}

pub fn apply(request: PatchRequest) -> Result<PatchOutcome, PatchError> {
    if request.chain_key.is_empty() {
        return Err(PatchError::EmptyChainKey);
    }

    let mut document = DeploymentDocument::load(&request.file)?;
    debug!(file = %request.file.display(), "Loaded deployment file");

    if document.ensure_deployment_section() {
        warn!(
            file = %request.file.display(),
            "No deployment section present; created an empty one"
        );
    }

    if request.updates.is_empty() {
        debug!(chain_key = %request.chain_key, "No field flags supplied");
    }
    document.apply_updates(&request.chain_key, &request.updates)?;
    for update in &request.updates {
        debug!(
            chain_key = %request.chain_key,
            field = %update.field,
            "Field assigned"
        );
    }

    let written = if request.dry_run {
        info!(
            file = %request.file.display(),
            updates = request.updates.len(),
            "Dry run; deployment file not written"
        );
        false
    } else {
        document.save()?;
        info!(
            file = %request.file.display(),
            chain_key = %request.chain_key,
            updates = request.updates.len(),
            "Deployment file written"
        );
        true
    };

    Ok(PatchOutcome {
        file: request.file,
        chain_key: request.chain_key,
        updates: request.updates.into_vec(),
        dry_run: request.dry_run,
        written,
    })
}
