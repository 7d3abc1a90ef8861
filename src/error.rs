//! Error types for per-file scan failures.
//!
//! Every failure here is contained at single-file granularity: the driver
//! collects these and the batch always runs to completion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// File missing, unreadable, or not decodable as text.
    #[error("error checking {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ScanError {
    /// The file or pattern the failure applies to, for structured output.
    #[must_use]
    pub fn subject(&self) -> String {
        match self {
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
        }
    }
}
