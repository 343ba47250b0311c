//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doclint",
    version,
    about = "Validate markdown documentation conventions",
    long_about = "Doclint — a small, fast CLI that checks markdown documents for frontmatter,\nformatting, link, and size problems, and can repair the safe subset in place.\n\nConfiguration precedence: CLI > doclint.toml > defaults.",
    after_help = "Examples:\n  doclint docs/\n  doclint skills/review-code/SKILL.md --fix\n  doclint docs/ --dry-run --format json\n  doclint docs/ --strict"
)]
/// Top-level CLI options.
pub struct Cli {
    /// File or directory to validate
    pub path: PathBuf,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Auto-fix safe issues in place")]
    pub fix: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Report would-be fixes without writing any file")]
    pub dry_run: bool,
    #[arg(long, help = "Output mode: console|json (default: console)")]
    pub format: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero on warnings as well as errors")]
    pub strict: bool,
}
