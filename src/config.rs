//! Configuration discovery and effective settings resolution.
//!
//! Doclint reads `doclint.toml|yaml|yml` from the target's directory (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. The rule set and thresholds are fixed at compile time; the config
//! file only pre-sets flag defaults.
//! Defaults:
//! - `format`: `console`
//! - `fix|dry_run|strict`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `doclint.toml|yaml`.
pub struct DoclintConfig {
    pub format: Option<String>,
    pub fix: Option<bool>,
    pub dry_run: Option<bool>,
    pub strict: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the run after applying precedence.
pub struct Effective {
    pub format: String,
    pub fix: bool,
    pub dry_run: bool,
    pub strict: bool,
}

/// Walk upward from `start` to locate the config root.
///
/// Stops when a `doclint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("doclint.toml").exists()
            || cur.join("doclint.yaml").exists()
            || cur.join("doclint.yml").exists()
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

/// Load `DoclintConfig` from `doclint.toml` or `doclint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DoclintConfig> {
    let toml_path = root.join("doclint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: DoclintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["doclint.yaml", "doclint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: DoclintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    target: &Path,
    cli_format: Option<&str>,
    cli_fix: Option<bool>,
    cli_dry_run: Option<bool>,
    cli_strict: Option<bool>,
) -> Effective {
    let start = if target.is_dir() {
        target.to_path_buf()
    } else {
        target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let root = detect_config_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let format = cli_format
        .map(str::to_string)
        .or(cfg.format)
        .unwrap_or_else(|| "console".to_string());
    let fix = cli_fix.or(cfg.fix).unwrap_or(false);
    let dry_run = cli_dry_run.or(cfg.dry_run).unwrap_or(false);
    let strict = cli_strict.or(cfg.strict).unwrap_or(false);

    // A dry run exercises the fix logic with all writes suppressed
    Effective {
        format,
        fix: fix || dry_run,
        dry_run,
        strict,
    }
}
