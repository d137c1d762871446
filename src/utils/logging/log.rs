//! Logging helpers shared by the loader and the assembler

use std::error::Error;
use std::path::Path;
use std::time::Duration;

/// Announce an operation on a file
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation}: {}", path.display());
}

/// Report a finished operation with a short summary of what it produced
///
/// # Arguments
/// * `operation` - Past tense description, e.g. "Loaded model artifact"
/// * `path` - File the operation read
/// * `summary` - What was read, e.g. "logistic, 14 parameters"
/// * `elapsed` - Wall time of the operation
pub fn log_operation_complete(operation: &str, path: &Path, summary: &str, elapsed: Duration) {
    log::info!(
        "{operation} {} ({summary}) in {:.1} ms",
        path.display(),
        elapsed.as_secs_f64() * 1000.0
    );
}

/// Warn about a request that was rejected, with the error that caused it
pub fn log_rejection(message: &str, error: &dyn Error) {
    log::warn!("{message}: {error}");
}
