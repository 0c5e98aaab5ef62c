//! CLI presentation: text and json formatters for the patch report.

use crate::error::PatchError;
use crate::patcher::PatchOutcome;
use owo_colors::OwoColorize;
use serde_json::json;

/// Human-readable report. Values are abbreviated; the file keeps them in full.
pub fn format_patch_outcome_text(outcome: &PatchOutcome, color: bool) -> String {
    let file = outcome.file.display();

    if outcome.updates.is_empty() {
        let line = format!("ℹ️  No updates provided, {} unchanged", file);
        return if color { line.blue().to_string() } else { line };
    }

    let header = if outcome.dry_run {
        let line = format!("🔍 Would update {} for chain '{}':", file, outcome.chain_key);
        if color {
            line.yellow().to_string()
        } else {
            line
        }
    } else {
        let line = format!("✅ Updated {} for chain '{}':", file, outcome.chain_key);
        if color {
            line.green().to_string()
        } else {
            line
        }
    };

    let mut lines = vec![header];
    lines.extend(
        outcome
            .updates
            .iter()
            .map(|update| format!("   {} = {}", update.field, update.display_value())),
    );
    lines.join("\n")
}

/// Machine-readable report carrying full values.
pub fn format_patch_outcome_json(outcome: &PatchOutcome) -> Result<String, PatchError> {
    let updates: Vec<_> = outcome
        .updates
        .iter()
        .map(|update| json!({ "field": update.field, "value": update.value }))
        .collect();

    let out = json!({
        "file": outcome.file.display().to_string(),
        "chain_key": outcome.chain_key,
        "dry_run": outcome.dry_run,
        "written": outcome.written,
        "updates": updates,
    });
    serde_json::to_string_pretty(&out).map_err(|e| PatchError::Render(e.to_string()))
}
