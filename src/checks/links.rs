//! Cross-reference checks for markdown links and `@path` references.
//!
//! Two syntaxes are scanned: `[text](target)` inline links and bare
//! `@path` references. External, anchor, and home-relative link targets are
//! skipped; everything else must resolve to an existing filesystem path.

use crate::checks::code_block_map;
use crate::models::{Category, Issue, Severity};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));
static AT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([~./][^\s`]+)").expect("valid at-reference pattern"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid inline code pattern"));

/// Scan one document for unresolvable references.
///
/// Fenced-code state comes from a single forward pass shared for both
/// syntaxes; inline code spans are stripped before matching.
pub fn scan(path: &Path, content: &str) -> Vec<Issue> {
    let lines: Vec<&str> = content.lines().collect();
    let in_code = code_block_map(&lines);
    let mut issues = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if in_code[idx] {
            continue;
        }
        let cleaned = INLINE_CODE_RE.replace_all(line, "");

        for cap in LINK_RE.captures_iter(&cleaned) {
            let (text, target) = (&cap[1], &cap[2]);
            if let Some(resolved) = resolve_link_target(path, target) {
                if !resolved.exists() {
                    issues.push(Issue::new(
                        path,
                        Some(idx + 1),
                        Category::Links,
                        Severity::Error,
                        format!("Broken link: [{}]({}) - file not found", text, target),
                    ));
                }
            }
        }

        for cap in AT_RE.captures_iter(&cleaned) {
            let raw = &cap[1];
            if let Some(resolved) = resolve_at_reference(raw) {
                if !resolved.exists() {
                    issues.push(Issue::new(
                        path,
                        Some(idx + 1),
                        Category::Links,
                        Severity::Error,
                        format!("Broken @file reference: @{} - file not found", raw),
                    ));
                }
            }
        }
    }

    issues
}

/// Classify an inline link target, returning the path to existence-check or
/// `None` when the target is external, an anchor, or home-relative.
fn resolve_link_target(doc: &Path, target: &str) -> Option<PathBuf> {
    if target.starts_with("http://")
        || target.starts_with("https://")
        || target.starts_with("mailto:")
    {
        return None;
    }
    if target.starts_with('#') || target.starts_with('~') {
        return None;
    }
    let resolved = if target.starts_with('/') {
        PathBuf::from(target)
    } else {
        doc.parent().unwrap_or_else(|| Path::new("")).join(target)
    };
    // Drop any #fragment suffix before checking existence
    let joined = resolved.to_string_lossy();
    let trimmed = joined.split('#').next().unwrap_or("");
    Some(PathBuf::from(trimmed))
}

/// Classify an at-reference, returning the expanded path to check or `None`
/// when the token looks like a pattern rather than a literal path.
fn resolve_at_reference(raw: &str) -> Option<PathBuf> {
    if raw.contains(['*', '?', '"', '\'']) {
        return None;
    }
    if let Some(rest) = raw.strip_prefix('~') {
        let hom = home::home_dir()?;
        return Some(PathBuf::from(format!("{}{}", hom.to_string_lossy(), rest)));
    }
    Some(PathBuf::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_broken_relative_link_reports_error() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        fs::write(&doc, "see [other](missing.md)\n").unwrap();
        let issues = scan(&doc, "see [other](missing.md)\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, Category::Links);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].line, Some(1));
        assert_eq!(
            issues[0].message,
            "Broken link: [other](missing.md) - file not found"
        );
    }

    #[test]
    fn test_existing_relative_link_is_clean() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("other.md"), "x\n").unwrap();
        let doc = dir.path().join("doc.md");
        let issues = scan(&doc, "see [other](other.md)\n");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_fragment_is_stripped_before_existence_check() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("other.md"), "x\n").unwrap();
        let doc = dir.path().join("doc.md");
        let issues = scan(&doc, "see [other](other.md#section)\n");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_external_anchor_and_home_targets_are_skipped() {
        let doc = Path::new("/nonexistent/doc.md");
        let content = "[a](https://example.com/x)\n\
                       [b](http://example.com)\n\
                       [c](mailto:x@example.com)\n\
                       [d](#section)\n\
                       [e](~/somewhere/file.md)\n";
        assert!(scan(doc, content).is_empty());
    }

    #[test]
    fn test_links_inside_fenced_code_are_skipped() {
        let doc = Path::new("/nonexistent/doc.md");
        let content = "```\n[a](missing.md)\n```\n";
        assert!(scan(doc, content).is_empty());
    }

    #[test]
    fn test_links_inside_inline_code_are_skipped() {
        let doc = Path::new("/nonexistent/doc.md");
        let content = "use `[a](missing.md)` verbatim\n";
        assert!(scan(doc, content).is_empty());
    }

    #[test]
    fn test_broken_link_after_inline_code_still_reported() {
        let doc = Path::new("/nonexistent/doc.md");
        let content = "`code` then [a](missing.md)\n";
        let issues = scan(doc, content);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_absolute_link_resolves_as_given() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("abs.md");
        fs::write(&target, "x\n").unwrap();
        let doc = Path::new("/elsewhere/doc.md");
        let content = format!("[a]({})\n", target.display());
        assert!(scan(doc, &content).is_empty());
    }

    #[test]
    fn test_broken_at_reference_reports_error() {
        let doc = Path::new("/nonexistent/doc.md");
        let issues = scan(doc, "load @./missing/thing.txt now\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Broken @file reference: @./missing/thing.txt - file not found"
        );
    }

    #[test]
    fn test_existing_at_reference_is_clean() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("ref.txt");
        fs::write(&target, "x").unwrap();
        let doc = Path::new("/nonexistent/doc.md");
        let content = format!("see @{}\n", target.display());
        assert!(scan(doc, &content).is_empty());
    }

    #[test]
    fn test_at_reference_with_wildcards_is_skipped() {
        let doc = Path::new("/nonexistent/doc.md");
        assert!(scan(doc, "match @./src/*.rs files\n").is_empty());
        assert!(scan(doc, "match @./src/file?.rs\n").is_empty());
    }

    #[test]
    fn test_at_reference_stops_at_backtick_and_whitespace() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("ref.txt");
        fs::write(&target, "x").unwrap();
        let doc = Path::new("/nonexistent/doc.md");
        // The backtick terminates the token, so only the path itself is checked
        let content = format!("see @{}`trailing\n", target.display());
        assert!(scan(doc, &content).is_empty());
    }

    #[test]
    fn test_plain_email_like_text_is_not_an_at_reference() {
        let doc = Path::new("/nonexistent/doc.md");
        // @ followed by a word character is not a reference token
        assert!(scan(doc, "mention @someone in review\n").is_empty());
    }
}
