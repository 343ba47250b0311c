//! Validation orchestrator: walks the target and runs checks per document.
//!
//! Checks run in a fixed order for each file: formatting → frontmatter →
//! links → size. The first two may rewrite the file when auto-fix is on;
//! downstream checks always read the rewritten content. All writes are
//! suppressed on dry runs, which otherwise report identical issues.

use crate::checks::{formatting, frontmatter, links, size};
use crate::models::{Category, Issue, Severity, ValidationResult};
use std::fs;
use std::path::Path;

/// Directory names that never require a `SKILL.md` of their own.
const RESERVED_DIRS: &[&str] = &["skills", "commands", "agents", "scripts"];

#[derive(Debug, Clone, Copy, Default)]
/// Write-back behavior for a validation run.
pub struct Options {
    /// Apply safe fixes in place.
    pub fix: bool,
    /// Run the fix logic but suppress every write.
    pub dry_run: bool,
}

impl Options {
    fn write_enabled(self) -> bool {
        self.fix && !self.dry_run
    }
}

/// Validate a file or directory tree, producing the aggregated result.
pub fn run_validate(target: &Path, opts: Options) -> ValidationResult {
    let mut v = Validator {
        opts,
        issues: Vec::new(),
        fixed: Vec::new(),
        files_checked: 0,
    };
    if target.is_file() {
        v.validate_file(target);
    } else {
        v.validate_directory(target);
    }
    ValidationResult {
        target: target.to_path_buf(),
        issues: v.issues,
        auto_fixed: v.fixed,
        files_checked: v.files_checked,
    }
}

struct Validator {
    opts: Options,
    issues: Vec<Issue>,
    fixed: Vec<String>,
    files_checked: usize,
}

impl Validator {
    fn validate_directory(&mut self, dir: &Path) {
        let dir_name = dir.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let under_skills =
            dir.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str()) == Some("skills");
        if !RESERVED_DIRS.contains(&dir_name)
            && under_skills
            && !dir.join(frontmatter::PRIMARY_DOC).exists()
        {
            self.issues.push(Issue::new(
                dir,
                None,
                Category::Structure,
                Severity::Error,
                "Skill directory missing SKILL.md",
            ));
        }

        // Escaped so bracket characters in directory names stay literal
        let pattern = format!("{}/**/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
        for entry in glob::glob(&pattern).expect("valid glob pattern") {
            if let Ok(path) = entry {
                self.validate_file(&path);
            }
        }
    }

    fn validate_file(&mut self, path: &Path) {
        let is_md = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_md {
            return;
        }

        self.files_checked += 1;

        let content = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                self.issues.push(Issue::new(
                    path,
                    None,
                    Category::Structure,
                    Severity::Error,
                    format!("Cannot read file: {}", e),
                ));
                return;
            }
        };

        let content = self.check_formatting(path, content);
        let content = self.check_frontmatter(path, content);
        self.issues.extend(links::scan(path, &content));
        self.issues.extend(size::scan(path, &content));
    }

    /// Formatting pass; returns the content downstream checks should read.
    fn check_formatting(&mut self, path: &Path, content: String) -> String {
        let report = formatting::scan(path, &content);
        self.issues.extend(report.issues);
        if self.opts.write_enabled() {
            if let Some(fixed) = report.fixed_content {
                if self.write_back(path, &fixed) {
                    self.fixed.extend(report.fix_notes);
                    return fixed;
                }
            }
        }
        content
    }

    /// Frontmatter pass; synthesizes a minimal block for primary documents
    /// missing theirs when writes are enabled.
    fn check_frontmatter(&mut self, path: &Path, content: String) -> String {
        let report = frontmatter::scan(path, &content);
        self.issues.extend(report.issues);
        if self.opts.write_enabled() {
            if let Some(synthesized) = report.synthesized {
                if self.write_back(path, &synthesized) {
                    self.fixed.extend(report.fix_note);
                    return synthesized;
                }
            }
        }
        content
    }

    /// Rewrite one file in place; a failed write degrades to an issue so the
    /// walk continues with the original content.
    fn write_back(&mut self, path: &Path, content: &str) -> bool {
        match fs::write(path, content) {
            Ok(()) => true,
            Err(e) => {
                self.issues.push(Issue::new(
                    path,
                    None,
                    Category::Structure,
                    Severity::Error,
                    format!("Cannot write file: {}", e),
                ));
                false
            }
        }
    }
}
