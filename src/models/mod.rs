//! Shared data models for scan reports and summaries.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// A single advisory finding at a 1-indexed line.
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
/// Diagnostics for one scanned file, in scan order.
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Serialize)]
/// Aggregated batch summary used by printers.
pub struct Summary {
    pub files: usize,
    pub flagged: usize,
    pub clean: usize,
    pub errors: usize,
}

#[derive(Debug, Serialize)]
/// Scan results container.
pub struct ScanResult {
    pub reports: Vec<FileReport>,
    pub summary: Summary,
}
