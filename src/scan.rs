//! Batch scan driver.
//!
//! Runs one analyzer over an ordered file list. Processing is sequential:
//! each file is read fully, scanned, and dropped before the next begins,
//! and no state carries across files. Read failures are collected per file
//! and never abort the batch.

use crate::balance;
use crate::error::ScanError;
use crate::models::{Diagnostic, FileReport, ScanResult, Summary};
use crate::patterns;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which analyzer a scan invocation runs. The two are independent leaves;
/// neither shares state with the other.
pub enum Analyzer {
    Balance,
    Patterns,
}

impl Analyzer {
    /// Report title rendered in the output header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Balance => "DELIMITER BALANCE RESULTS",
            Self::Patterns => "TYPE AND SIGNATURE CHECK",
        }
    }

    /// Heading for the all-clear block.
    #[must_use]
    pub const fn all_clear(self) -> &'static str {
        match self {
            Self::Balance => "No delimiter imbalances found in:",
            Self::Patterns => "No obvious type mismatches or signature issues found in:",
        }
    }

    /// Stable identifier for structured output.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Patterns => "patterns",
        }
    }

    fn run(self, source: &str) -> Vec<Diagnostic> {
        match self {
            Self::Balance => balance::analyze_balance(source),
            Self::Patterns => patterns::analyze_patterns(source),
        }
    }
}

/// Scan `entries` (paths or glob patterns, relative to `root`) with the
/// chosen analyzer. Returns the per-file reports in scan order plus the
/// per-file failures encountered along the way.
pub fn run_scan(
    root: &Path,
    entries: &[String],
    analyzer: Analyzer,
) -> (ScanResult, Vec<ScanError>) {
    let mut reports: Vec<FileReport> = Vec::new();
    let mut errors: Vec<ScanError> = Vec::new();

    for path in expand_entries(root, entries, &mut errors) {
        let display = display_path(root, &path);
        match fs::read_to_string(&path) {
            Ok(source) => reports.push(FileReport {
                file: display,
                diagnostics: analyzer.run(&source),
            }),
            Err(source) => errors.push(ScanError::FileRead {
                path: PathBuf::from(display),
                source,
            }),
        }
    }

    let flagged = reports.iter().filter(|r| !r.is_clean()).count();
    let summary = Summary {
        files: reports.len(),
        flagged,
        clean: reports.len() - flagged,
        errors: errors.len(),
    };
    (ScanResult { reports, summary }, errors)
}

// Entries containing glob metacharacters expand to their sorted matches;
// literal entries pass through unchanged so a missing literal path still
// surfaces as a read failure rather than silently matching nothing.
fn expand_entries(root: &Path, entries: &[String], errors: &mut Vec<ScanError>) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for entry in entries {
        if entry.contains(['*', '?', '[']) {
            let pattern = root.join(entry).to_string_lossy().to_string();
            match glob::glob(&pattern) {
                Ok(paths) => {
                    let mut found: Vec<PathBuf> = paths.flatten().collect();
                    found.sort();
                    targets.extend(found);
                }
                Err(source) => errors.push(ScanError::InvalidPattern {
                    pattern: entry.clone(),
                    source,
                }),
            }
        } else {
            targets.push(root.join(entry));
        }
    }
    targets
}

fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
