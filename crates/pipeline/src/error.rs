//! Error types for the pipeline crate.
//!
//! Filtering and sorting never fail. The only errors are unknown mode
//! strings coming from UI controls or the command line.

use thiserror::Error;

/// A sort or view mode string that does not name a known mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} mode: {value}")]
pub struct ParseModeError {
    pub kind: &'static str,
    pub value: String,
}
