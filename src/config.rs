//! Configuration discovery and effective settings resolution.
//!
//! prescan reads `prescan.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI arguments to produce an
//! `Effective` config. Defaults:
//! - `files`: none (target paths must come from the CLI or the config)
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `prescan.toml|yaml`.
pub struct PrescanConfig {
    /// Ordered list of paths or glob patterns, relative to the repo root.
    pub files: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub files: Vec<String>,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `prescan.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("prescan.toml").exists()
            || cur.join("prescan.yaml").exists()
            || cur.join("prescan.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PrescanConfig` from `prescan.toml` or `prescan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<PrescanConfig> {
    let toml_path = root.join("prescan.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: PrescanConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["prescan.yaml", "prescan.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: PrescanConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI arguments, discovered config, and
/// defaults. CLI positional files take precedence over the config list.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_files: &[String],
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let files = if cli_files.is_empty() {
        cfg.files.unwrap_or_default()
    } else {
        cli_files.to_vec()
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        files,
        output,
    }
}
