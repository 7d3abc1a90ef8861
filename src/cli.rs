//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "prescan",
    version,
    about = "Structural sanity checks for source text",
    long_about = "prescan — a tiny, fast pre-commit scanner for delimiter balance and suspicious line patterns.\n\nConfiguration precedence: CLI > prescan.toml > defaults.",
    after_help = "Examples:\n  prescan balance lib/main.dart lib/widgets/form.dart\n  prescan patterns --output json 'lib/**/*.dart'\n  prescan balance   # target files from prescan.toml",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands, one per analyzer.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current prescan version."
    )]
    Version,
    /// Check delimiter balance
    #[command(
        about = "Check delimiter balance",
        long_about = "Scan files for unbalanced braces, parentheses, and brackets. Findings are advisory and never affect the exit code.",
        after_help = "Examples:\n  prescan balance lib/main.dart\n  prescan balance --output json"
    )]
    Balance {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(help = "Paths or glob patterns, relative to the repo root")]
        files: Vec<String>,
    },
    /// Check suspicious line patterns
    #[command(
        about = "Check suspicious line patterns",
        long_about = "Scan files line by line for shapes that suggest a defect, such as a string literal assigned to a numeric binding or a nullable type marked as required.",
        after_help = "Examples:\n  prescan patterns lib/state/notifier.dart\n  prescan patterns --output json"
    )]
    Patterns {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(help = "Paths or glob patterns, relative to the repo root")]
        files: Vec<String>,
    },
}
