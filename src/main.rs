//! prescan CLI binary entry point.
//! Delegates to modules for scanning and prints results.

mod balance;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod patterns;
mod scan;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Balance {
            repo_root,
            output,
            files,
        } => run(repo_root, output, files, scan::Analyzer::Balance),
        Commands::Patterns {
            repo_root,
            output,
            files,
        } => run(repo_root, output, files, scan::Analyzer::Patterns),
    }
}

fn run(
    repo_root: Option<String>,
    output: Option<String>,
    files: Vec<String>,
    analyzer: scan::Analyzer,
) {
    let eff = config::resolve_effective(repo_root.as_deref(), &files, output.as_deref());
    // Friendly note if no prescan config was found
    if config::load_config(&eff.repo_root).is_none() && eff.output != "json" {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No prescan.toml found; using defaults."
        );
    }
    // Require a target list from the CLI or the config (no default)
    if eff.files.is_empty() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "No files to scan. Pass paths or add a files list to prescan.toml."
        );
        std::process::exit(2);
    }
    let (result, errors) = scan::run_scan(&eff.repo_root, &eff.files, analyzer);
    output::print_scan(analyzer, &result, &errors, &eff.output);
    // Findings and per-file read errors are advisory; the run always
    // completes with a zero exit once scanning started.
}
