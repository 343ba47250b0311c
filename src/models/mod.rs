//! Shared data models for validation findings and run results.

use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Which aspect of a document a finding concerns.
pub enum Category {
    Structure,
    Links,
    Content,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Links => write!(f, "links"),
            Self::Content => write!(f, "content"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// How serious a finding is.
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// A single validation finding with severity and location.
///
/// `line` is absent for file-level findings. `fix_description` rides along
/// for console rendering only and never reaches the JSON report.
pub struct Issue {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub auto_fixable: bool,
    #[serde(skip_serializing)]
    pub fix_description: Option<String>,
}

impl Issue {
    /// Creates a finding that cannot be repaired automatically.
    pub fn new(
        file: &Path,
        line: Option<usize>,
        category: Category,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
            category,
            severity,
            message: message.into(),
            auto_fixable: false,
            fix_description: None,
        }
    }

    /// Marks the finding as auto-fixable with a short fix description.
    #[must_use]
    pub fn fixable(mut self, description: impl Into<String>) -> Self {
        self.auto_fixable = true;
        self.fix_description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Overall outcome of a validation run.
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Warn => write!(f, "WARN"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug)]
/// Aggregate results for one validation run.
pub struct ValidationResult {
    pub target: PathBuf,
    pub issues: Vec<Issue>,
    pub auto_fixed: Vec<String>,
    pub files_checked: usize,
}

impl ValidationResult {
    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of info-severity findings.
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// `Fail` on any error, else `Warn` on any warning, else `Pass`.
    pub fn status(&self) -> Status {
        if self.error_count() > 0 {
            Status::Fail
        } else if self.warning_count() > 0 {
            Status::Warn
        } else {
            Status::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> Issue {
        Issue::new(Path::new("a.md"), None, Category::Content, severity, "m")
    }

    #[test]
    fn test_status_aggregation() {
        let mut res = ValidationResult {
            target: "docs".into(),
            issues: vec![],
            auto_fixed: vec![],
            files_checked: 0,
        };
        assert_eq!(res.status(), Status::Pass);
        res.issues.push(issue(Severity::Info));
        assert_eq!(res.status(), Status::Pass);
        res.issues.push(issue(Severity::Warning));
        assert_eq!(res.status(), Status::Warn);
        res.issues.push(issue(Severity::Error));
        assert_eq!(res.status(), Status::Fail);
        // Errors dominate regardless of what else is present
        res.issues.push(issue(Severity::Warning));
        assert_eq!(res.status(), Status::Fail);
        assert_eq!(res.error_count(), 1);
        assert_eq!(res.warning_count(), 2);
        assert_eq!(res.info_count(), 1);
    }

    #[test]
    fn test_fixable_builder() {
        let is = issue(Severity::Warning).fixable("Convert tabs to spaces");
        assert!(is.auto_fixable);
        assert_eq!(is.fix_description.as_deref(), Some("Convert tabs to spaces"));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Warning).unwrap(), "warning");
        assert_eq!(serde_json::to_value(Category::Links).unwrap(), "links");
    }
}
