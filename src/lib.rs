//! prescan core library.
//!
//! This crate exposes programmatic APIs for scanning source files for
//! structural problems: unbalanced delimiters and suspicious line shapes.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `balance`: Delimiter balance analysis with per-kind tallies.
//! - `patterns`: Line-pattern heuristic rules, including suppressed ones.
//! - `scan`: Batch driver with per-file fault isolation.
//! - `models`: Diagnostic, report, and summary data models.
//! - `output`: Human/JSON printers for scan results.
//! - `error`: Per-file failure types.
//! - `utils`: Supporting helpers.
pub mod balance;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod patterns;
pub mod scan;
pub mod utils;
