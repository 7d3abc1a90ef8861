//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The human form prints a
//! header, then either the all-clear block (every scanned file with a
//! success marker) or the flagged block (each flagged file followed by its
//! diagnostics in scan order) — never both. Per-file read errors render
//! inline in both modes. The JSON form includes per-file reports, errors,
//! and a top-level summary.

use crate::error::ScanError;
use crate::models::ScanResult;
use crate::scan::Analyzer;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print scan results in the requested format.
pub fn print_scan(analyzer: Analyzer, res: &ScanResult, errors: &[ScanError], output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_scan_json(analyzer, res, errors)).unwrap()
        ),
        _ => print!(
            "{}",
            render_human(analyzer, res, errors, use_colors(output))
        ),
    }
}

/// Render the human report (pure, for testing/snapshot purposes).
#[must_use]
pub fn render_human(
    analyzer: Analyzer,
    res: &ScanResult,
    errors: &[ScanError],
    color: bool,
) -> String {
    let mut out = String::new();
    let header = format!("=== {} ===", analyzer.title());
    if color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for err in errors {
        let icon = if color {
            "✖".red().to_string()
        } else {
            "✖".to_string()
        };
        out.push_str(&format!("{icon} {err}\n"));
    }

    if res.summary.flagged == 0 {
        // All-clear block: list every scanned file with a success marker.
        out.push('\n');
        out.push_str(analyzer.all_clear());
        out.push('\n');
        for report in &res.reports {
            let mark = if color {
                "✓".green().to_string()
            } else {
                "✓".to_string()
            };
            out.push_str(&format!("  {mark} {}\n", report.file));
        }
    } else {
        // Flagged block: clean files are omitted entirely.
        for report in res.reports.iter().filter(|r| !r.is_clean()) {
            out.push('\n');
            if color {
                out.push_str(&format!("{}:\n", report.file.bold()));
            } else {
                out.push_str(&format!("{}:\n", report.file));
            }
            for diag in &report.diagnostics {
                let icon = if color {
                    "▲".yellow().to_string()
                } else {
                    "▲".to_string()
                };
                out.push_str(&format!("  {icon} line {}: {}\n", diag.line, diag.message));
            }
        }
    }

    let summary = format!(
        "— Summary — files={} flagged={} clean={} errors={}",
        res.summary.files, res.summary.flagged, res.summary.clean, res.summary.errors
    );
    out.push('\n');
    if color {
        out.push_str(&summary.bold().to_string());
    } else {
        out.push_str(&summary);
    }
    out.push('\n');
    out
}

/// Compose scan JSON object (pure) for testing/snapshot purposes.
#[must_use]
pub fn compose_scan_json(analyzer: Analyzer, res: &ScanResult, errors: &[ScanError]) -> JsonVal {
    let errs: Vec<JsonVal> = errors
        .iter()
        .map(|e| json!({"file": e.subject(), "error": e.to_string()}))
        .collect();
    json!({
        "check": analyzer.slug(),
        "results": serde_json::to_value(&res.reports).unwrap(),
        "errors": errs,
        "summary": serde_json::to_value(&res.summary).unwrap(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Diagnostic, FileReport, Summary};

    fn result(reports: Vec<FileReport>, errors: usize) -> ScanResult {
        let flagged = reports.iter().filter(|r| !r.is_clean()).count();
        let summary = Summary {
            files: reports.len(),
            flagged,
            clean: reports.len() - flagged,
            errors,
        };
        ScanResult { reports, summary }
    }

    fn clean(file: &str) -> FileReport {
        FileReport {
            file: file.into(),
            diagnostics: vec![],
        }
    }

    fn flagged(file: &str) -> FileReport {
        FileReport {
            file: file.into(),
            diagnostics: vec![Diagnostic {
                line: 3,
                message: "extra closing brace '}'".into(),
            }],
        }
    }

    #[test]
    fn test_all_clear_lists_every_scanned_file() {
        let res = result(vec![clean("a.dart"), clean("b.dart")], 0);
        let out = render_human(Analyzer::Balance, &res, &[], false);
        assert!(out.contains("=== DELIMITER BALANCE RESULTS ==="));
        assert!(out.contains("No delimiter imbalances found in:"));
        assert!(out.contains("✓ a.dart"));
        assert!(out.contains("✓ b.dart"));
    }

    #[test]
    fn test_flagged_block_omits_clean_files() {
        let res = result(
            vec![clean("a.dart"), flagged("b.dart"), clean("c.dart")],
            0,
        );
        let out = render_human(Analyzer::Balance, &res, &[], false);
        assert!(out.contains("b.dart:"));
        assert!(out.contains("line 3: extra closing brace '}'"));
        // Clean files are not listed and there is no all-clear block.
        assert!(!out.contains("a.dart"));
        assert!(!out.contains("c.dart"));
        assert!(!out.contains("No delimiter imbalances"));
    }

    #[test]
    fn test_read_errors_render_inline_with_all_clear() {
        let errors = vec![crate::error::ScanError::FileRead {
            path: "gone.dart".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }];
        let res = result(vec![clean("a.dart")], errors.len());
        let out = render_human(Analyzer::Patterns, &res, &errors, false);
        assert!(out.contains("error checking gone.dart"));
        assert!(out.contains("No obvious type mismatches"));
        assert!(out.contains("✓ a.dart"));
    }

    #[test]
    fn test_compose_scan_json_shape() {
        let errors = vec![crate::error::ScanError::FileRead {
            path: "gone.dart".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }];
        let res = result(vec![flagged("b.dart")], errors.len());
        let out = compose_scan_json(Analyzer::Balance, &res, &errors);
        assert_eq!(out["check"], "balance");
        assert_eq!(out["results"][0]["file"], "b.dart");
        assert_eq!(out["results"][0]["diagnostics"][0]["line"], 3);
        assert_eq!(out["errors"][0]["file"], "gone.dart");
        assert_eq!(out["summary"]["flagged"], 1);
        assert_eq!(out["summary"]["errors"], 1);
    }
}
