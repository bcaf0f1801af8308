//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, StatusJson};
use crate::config::ServerConfig;
use penilaian_core::{
    AssessmentStatus, PenilaianError, StatusInput, StatusResolver, primitives::MAX_BATCH_SIZE,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum file size for batch input (10 MB).
const MAX_BATCH_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file path: resolve symlinks and "..", require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PenilaianError> {
    let canonical = path.canonicalize().map_err(|e| {
        PenilaianError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PenilaianError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PenilaianError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PenilaianError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(PenilaianError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), PenilaianError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PenilaianError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn print_descriptor(status: &AssessmentStatus) {
    println!("Status:        {} ({})", status.combined_status, status.description);
    println!("Badge:         {} {} / {}", status.icon, status.bg_color, status.text_color);
    println!("Can Edit:      {}", yes_no(status.can_edit));
    println!("Can Submit:    {}", yes_no(status.can_submit));
    println!("Can Resubmit:  {}", yes_no(status.can_resubmit));
    println!("Show Feedback: {}", yes_no(status.show_feedback));
    println!("Show Progress: {}", yes_no(status.show_progress));
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(settings: ServerConfig) -> Result<(), PenilaianError> {
    println!("Penilaian Status Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", settings.host);
    println!("  Port:       {}", settings.port);
    println!("  Rate Limit: {} rps", settings.rate_limit);
    println!();
    println!("Endpoints:");
    println!("  GET  /health               - Health check");
    println!("  GET  /statuses             - Status descriptor table");
    println!("  POST /status/resolve       - Resolve one session");
    println!("  POST /status/resolve/batch - Resolve many sessions");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(settings).await
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve one session/review pair.
pub fn cmd_resolve(
    json_mode: bool,
    session: &str,
    review: Option<&str>,
    stage: Option<&str>,
) -> Result<(), PenilaianError> {
    let mut input = StatusInput::new(session);
    if let Some(review) = review {
        input = input.with_review(review);
    }
    if let Some(stage) = stage {
        input = input.with_stage(stage);
    }

    let resolved = api::resolve_session(&StatusResolver::new(), &input);

    if json_mode {
        return print_json(&resolved);
    }

    print_descriptor(input.resolve());
    if let Some(stage) = &resolved.review_stage {
        println!("Review Stage:  {}", stage);
    }
    if resolved.fallback {
        println!();
        println!(
            "Note: '{}' is not a recognized status, shown as in_progress",
            input.session_status
        );
    }

    Ok(())
}

// =============================================================================
// BATCH COMMAND
// =============================================================================

/// Read a batch file, enforcing file size and record count.
pub fn load_batch(path: &Path) -> Result<Vec<StatusInput>, PenilaianError> {
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_BATCH_FILE_SIZE)?;

    let content = std::fs::read_to_string(&path)
        .map_err(|e| PenilaianError::IoError(format!("Cannot read file: {}", e)))?;
    let inputs: Vec<StatusInput> = serde_json::from_str(&content)
        .map_err(|e| PenilaianError::SerializationError(e.to_string()))?;

    if inputs.len() > MAX_BATCH_SIZE {
        return Err(PenilaianError::BatchTooLarge {
            len: inputs.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    Ok(inputs)
}

/// Resolve every record in a JSON file and print a summary.
pub fn cmd_batch(json_mode: bool, file: &Path) -> Result<(), PenilaianError> {
    let inputs = load_batch(file)?;
    let (results, summary) = api::resolve_batch(&StatusResolver::new(), &inputs);

    tracing::info!(
        file = %file.display(),
        total = summary.total,
        fallbacks = summary.fallbacks,
        "Batch resolved"
    );

    if json_mode {
        let output = serde_json::json!({
            "results": results,
            "summary": summary,
        });
        return print_json(&output);
    }

    println!("Batch Resolution: {}", file.display());
    println!("=================");
    for (index, (input, resolved)) in inputs.iter().zip(&results).enumerate() {
        let review = input
            .review_status
            .as_ref()
            .map(|r| r.as_str())
            .unwrap_or("-");
        println!(
            "{:>4}  {:<14} {:<14} -> {}{}",
            index,
            input.session_status.as_str(),
            review,
            resolved.status.combined_status,
            if resolved.fallback { " (fallback)" } else { "" }
        );
    }
    println!();
    println!("Total:           {}", summary.total);
    println!("Awaiting Review: {}", summary.awaiting_review());
    println!("Reviewed:        {}", summary.reviewed());
    println!("Completed:       {}%", summary.completion_percent());
    println!("Fallbacks:       {}", summary.fallbacks);

    Ok(())
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// Print the six descriptors.
pub fn cmd_table(json_mode: bool) -> Result<(), PenilaianError> {
    let table = StatusResolver::new().table();

    if json_mode {
        let statuses: Vec<StatusJson> = table.iter().map(StatusJson::from).collect();
        return print_json(&statuses);
    }

    println!("Assessment Status Table");
    println!("=======================");
    println!(
        "{:<16} {:<16} {:>5} {:>7} {:>9} {:>9} {:>9}",
        "KEY", "LABEL", "EDIT", "SUBMIT", "RESUBMIT", "FEEDBACK", "PROGRESS"
    );
    for status in table {
        println!(
            "{:<16} {:<16} {:>5} {:>7} {:>9} {:>9} {:>9}",
            status.combined_status.as_str(),
            status.description,
            yes_no(status.can_edit),
            yes_no(status.can_submit),
            yes_no(status.can_resubmit),
            yes_no(status.show_feedback),
            yes_no(status.show_progress),
        );
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
