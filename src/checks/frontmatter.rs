//! YAML frontmatter extraction and schema validation.
//!
//! Only the primary `SKILL.md` document is required to carry a frontmatter
//! block; when one is missing there a minimal block can be synthesized from
//! the enclosing folder name. The `allowed-tools` and `model` keys are
//! validated on any document that carries them.

use crate::models::{Category, Issue, Severity};
use regex::Regex;
use serde_yaml::Value;
use std::path::Path;
use std::sync::LazyLock;

/// File name that must carry a schema-valid frontmatter block.
pub const PRIMARY_DOC: &str = "SKILL.md";

/// Tool identifiers accepted in `allowed-tools`.
pub const VALID_TOOLS: &[&str] = &[
    "Read",
    "Write",
    "Edit",
    "Grep",
    "Glob",
    "Bash",
    "WebFetch",
    "WebSearch",
    "Task",
    "TodoWrite",
    "NotebookEdit",
    "AskUserQuestion",
    "LSP",
];

/// Model names accepted in `model`.
pub const VALID_MODELS: &[&str] = &["haiku", "sonnet", "opus"];

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid name pattern"));

/// True when `path` names the primary skill document.
pub fn is_primary(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(PRIMARY_DOC)
}

/// Outcome of the frontmatter pass over one document.
pub struct FrontmatterReport {
    pub issues: Vec<Issue>,
    /// Replacement file content carrying a synthesized minimal block, built
    /// only for primary documents that have no block at all.
    pub synthesized: Option<String>,
    pub fix_note: Option<String>,
}

impl FrontmatterReport {
    fn plain(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            synthesized: None,
            fix_note: None,
        }
    }
}

/// Extract and validate the frontmatter block of one document.
pub fn scan(path: &Path, content: &str) -> FrontmatterReport {
    let lines: Vec<&str> = content.lines().collect();
    let primary = is_primary(path);
    let mut issues = Vec::new();

    if lines.first().copied() != Some("---") {
        if !primary {
            return FrontmatterReport::plain(issues);
        }
        issues.push(
            Issue::new(
                path,
                Some(1),
                Category::Structure,
                Severity::Error,
                "Missing YAML frontmatter (should start with ---)",
            )
            .fixable("Add frontmatter delimiters"),
        );
        let folder = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let synthesized = format!(
            "---\nname: {}\ndescription: \"TODO: Add description with trigger keywords\"\n---\n\n{}",
            folder, content
        );
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return FrontmatterReport {
            issues,
            synthesized: Some(synthesized),
            fix_note: Some(format!(
                "{} - Added frontmatter with name and description",
                file_name
            )),
        };
    }

    // Closing marker must match exactly, with no surrounding whitespace
    let Some(end) = lines.iter().skip(1).position(|l| *l == "---").map(|p| p + 1) else {
        issues.push(Issue::new(
            path,
            None,
            Category::Content,
            Severity::Error,
            "Frontmatter not closed (missing closing ---)",
        ));
        return FrontmatterReport::plain(issues);
    };

    let block = lines[1..end].join("\n");
    let parsed: Value = if block.trim().is_empty() {
        Value::Mapping(serde_yaml::Mapping::new())
    } else {
        match serde_yaml::from_str(&block) {
            Ok(v) => v,
            Err(e) => {
                issues.push(Issue::new(
                    path,
                    None,
                    Category::Content,
                    Severity::Error,
                    format!("Invalid YAML in frontmatter: {}", e),
                ));
                return FrontmatterReport::plain(issues);
            }
        }
    };

    let fm = match parsed {
        Value::Null => Value::Mapping(serde_yaml::Mapping::new()),
        v @ Value::Mapping(_) => v,
        _ => {
            issues.push(Issue::new(
                path,
                None,
                Category::Content,
                Severity::Error,
                "Frontmatter is not a key-value mapping",
            ));
            return FrontmatterReport::plain(issues);
        }
    };

    if primary {
        check_required(path, &fm, &mut issues);
    }
    check_optional(path, &fm, &mut issues);

    FrontmatterReport::plain(issues)
}

/// Schema rules that apply to the primary document only.
fn check_required(path: &Path, fm: &Value, issues: &mut Vec<Issue>) {
    if fm.get("name").is_none() {
        issues.push(
            Issue::new(
                path,
                None,
                Category::Content,
                Severity::Error,
                "Missing required field: name",
            )
            .fixable("Generate name from folder"),
        );
    }

    match fm.get("description") {
        None => issues.push(
            Issue::new(
                path,
                None,
                Category::Content,
                Severity::Error,
                "Missing required field: description",
            )
            .fixable("Add placeholder description"),
        ),
        Some(value) => {
            // Quality heuristics run on non-empty string values only
            if let Some(desc) = value.as_str().filter(|d| !d.is_empty()) {
                let chars = desc.chars().count();
                if chars < 20 {
                    issues.push(Issue::new(
                        path,
                        None,
                        Category::Content,
                        Severity::Warning,
                        format!("Description too short ({} chars). Add trigger keywords.", chars),
                    ));
                }
                let lower = desc.to_lowercase();
                if !lower.contains("use when") && !lower.contains("use for") {
                    issues.push(Issue::new(
                        path,
                        None,
                        Category::Content,
                        Severity::Info,
                        "Description could include 'Use when...' trigger phrases",
                    ));
                }
            }
        }
    }

    if let Some(value) = fm.get("name") {
        let name = scalar_string(value);
        if !NAME_RE.is_match(&name) {
            issues.push(Issue::new(
                path,
                None,
                Category::Content,
                Severity::Warning,
                format!("Name '{}' should use only lowercase, numbers, and hyphens", name),
            ));
        }
    }
}

/// Schema rules that apply to any document carrying the key.
fn check_optional(path: &Path, fm: &Value, issues: &mut Vec<Issue>) {
    if let Some(tools) = fm.get("allowed-tools").and_then(Value::as_str) {
        for tool in tools.split(',').map(str::trim) {
            if !tool.is_empty() && !VALID_TOOLS.contains(&tool) {
                issues.push(Issue::new(
                    path,
                    None,
                    Category::Content,
                    Severity::Warning,
                    format!("Unknown tool in allowed-tools: {}", tool),
                ));
            }
        }
    }

    if let Some(value) = fm.get("model") {
        let model = scalar_string(value);
        if !VALID_MODELS.contains(&model.as_str()) {
            issues.push(Issue::new(
                path,
                None,
                Category::Content,
                Severity::Error,
                format!("Invalid model: {}. Use: {}", model, VALID_MODELS.join(", ")),
            ));
        }
    }
}

/// Renders a YAML scalar for messages and pattern checks; non-scalar values
/// render empty and fail the name pattern.
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
