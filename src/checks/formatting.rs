//! Line-oriented formatting checks: tabs, trailing whitespace, final newline.
//!
//! `scan` is pure: it reports the issues and builds a fix plan without
//! touching the filesystem. The orchestrator applies `fixed_content` (and
//! records `fix_notes`) only when auto-fix is on and the run is not a dry
//! run, so dry runs report the exact same issues with zero writes.

use crate::models::{Category, Issue, Severity};
use std::path::Path;

/// Outcome of a formatting scan over one document.
pub struct FormattingReport {
    pub issues: Vec<Issue>,
    /// Full reconstructed content with every fix applied, when any applies.
    /// Ends with exactly one trailing newline.
    pub fixed_content: Option<String>,
    /// One note per applied fix, in `file:line - description` form.
    pub fix_notes: Vec<String>,
}

/// Scan document lines for formatting problems and build the fix plan.
///
/// Fence tracking toggles before the line's own checks, so a tab on the
/// opening fence line is exempt while one on the closing line is not.
/// Trailing whitespace is flagged inside code blocks too.
pub fn scan(path: &Path, content: &str) -> FormattingReport {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut issues = Vec::new();
    let mut fix_notes = Vec::new();
    let mut new_lines: Vec<String> = Vec::new();
    let mut modified = false;
    let mut in_code_block = false;

    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_code_block = !in_code_block;
        }

        let mut fixed = line.to_string();

        if line.contains('\t') && !in_code_block {
            issues.push(
                Issue::new(
                    path,
                    Some(lineno),
                    Category::Content,
                    Severity::Warning,
                    "Tab character found (use spaces)",
                )
                .fixable("Convert tabs to spaces"),
            );
            fixed = fixed.replace('\t', "  ");
            modified = true;
            fix_notes.push(format!("{}:{} - Converted tabs to spaces", file_name, lineno));
        }

        if fixed.trim_end() != fixed {
            issues.push(
                Issue::new(
                    path,
                    Some(lineno),
                    Category::Content,
                    Severity::Info,
                    "Trailing whitespace",
                )
                .fixable("Remove trailing whitespace"),
            );
            fixed.truncate(fixed.trim_end().len());
            modified = true;
            fix_notes.push(format!(
                "{}:{} - Removed trailing whitespace",
                file_name, lineno
            ));
        }

        new_lines.push(fixed);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        issues.push(
            Issue::new(
                path,
                None,
                Category::Content,
                Severity::Info,
                "Missing final newline",
            )
            .fixable("Add final newline"),
        );
        modified = true;
        fix_notes.push(format!("{} - Added final newline", file_name));
    }

    let fixed_content = if modified {
        let mut joined = new_lines.join("\n");
        if !joined.ends_with('\n') {
            joined.push('\n');
        }
        Some(joined)
    } else {
        None
    };

    FormattingReport {
        issues,
        fixed_content,
        fix_notes,
    }
}
