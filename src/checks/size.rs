//! Size thresholds for the primary skill document.

use crate::checks::frontmatter::is_primary;
use crate::models::{Category, Issue, Severity};
use std::path::Path;

/// Hard ceiling before splitting into supporting files is advised.
pub const MAX_SKILL_LINES: usize = 500;
/// Preferred ceiling for a quick-scan skill document.
pub const OPTIMAL_SKILL_LINES: usize = 150;

/// Flag primary documents that outgrow the line-count thresholds.
pub fn scan(path: &Path, content: &str) -> Vec<Issue> {
    if !is_primary(path) {
        return Vec::new();
    }
    let line_count = content.lines().count();
    if line_count > MAX_SKILL_LINES {
        vec![Issue::new(
            path,
            None,
            Category::Structure,
            Severity::Warning,
            format!(
                "File is {} lines (threshold: {}). Consider splitting into supporting files.",
                line_count, MAX_SKILL_LINES
            ),
        )]
    } else if line_count > OPTIMAL_SKILL_LINES {
        vec![Issue::new(
            path,
            None,
            Category::Structure,
            Severity::Info,
            format!(
                "File is {} lines. Optimal is under {} lines.",
                line_count, OPTIMAL_SKILL_LINES
            ),
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of(lines: usize) -> String {
        "line\n".repeat(lines)
    }

    #[test]
    fn test_at_optimal_threshold_is_clean() {
        let issues = scan(Path::new("x/SKILL.md"), &content_of(150));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_just_over_optimal_is_info() {
        let issues = scan(Path::new("x/SKILL.md"), &content_of(151));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].message, "File is 151 lines. Optimal is under 150 lines.");
    }

    #[test]
    fn test_at_max_threshold_is_still_info() {
        let issues = scan(Path::new("x/SKILL.md"), &content_of(500));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_over_max_is_warning() {
        let issues = scan(Path::new("x/SKILL.md"), &content_of(501));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].message,
            "File is 501 lines (threshold: 500). Consider splitting into supporting files."
        );
    }

    #[test]
    fn test_other_documents_are_exempt() {
        let issues = scan(Path::new("x/README.md"), &content_of(1000));
        assert!(issues.is_empty());
    }
}
