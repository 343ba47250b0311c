//! Output rendering for validation results.
//!
//! Supports `console` (default) and `json` outputs. The JSON form includes
//! per-issue fields and a top-level summary; the console form groups issues
//! by file and ends with a summary block.

use crate::models::{Issue, Severity, Status, ValidationResult};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a validation result in the requested format.
pub fn print_result(res: &ValidationResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_json(res)).unwrap()
        ),
        _ => print_console(res, use_colors(output)),
    }
}

fn print_console(res: &ValidationResult, color: bool) {
    println!("\nValidating: {}\n", res.target.display());

    let mut by_file: BTreeMap<&PathBuf, Vec<&Issue>> = BTreeMap::new();
    for issue in &res.issues {
        by_file.entry(&issue.file).or_default().push(issue);
    }

    for (file, mut issues) in by_file {
        // File-level findings sort first, then ascending line numbers
        issues.sort_by_key(|i| i.line.unwrap_or(0));
        let shown = display_path(file, &res.target);
        if color {
            println!("\n{}", shown.bold());
        } else {
            println!("\n{}", shown);
        }
        for issue in issues {
            println!("{}", render_issue(issue, color));
        }
    }

    if !res.auto_fixed.is_empty() {
        println!("\nAuto-fixed:");
        for fix in &res.auto_fixed {
            println!("  -> {}", fix);
        }
    }

    println!("\nSUMMARY");
    println!("{}", "=".repeat(63));
    println!("Files checked:    {}", res.files_checked);
    println!("Errors:           {}", res.error_count());
    println!("Warnings:         {}", res.warning_count());
    println!("Info:             {}", res.info_count());
    if !res.auto_fixed.is_empty() {
        println!("Auto-fixed:       {} issues", res.auto_fixed.len());
    }
    let status = res.status();
    if color {
        let styled = match status {
            Status::Pass => status.to_string().green().bold().to_string(),
            Status::Warn => status.to_string().yellow().bold().to_string(),
            Status::Fail => status.to_string().red().bold().to_string(),
        };
        println!("Status:           {}", styled);
    } else {
        println!("Status:           {}", status);
    }
}

fn render_issue(issue: &Issue, color: bool) -> String {
    let tag = format!("[{}]", issue.severity.to_string().to_uppercase());
    // Pad before styling so ANSI codes do not break column alignment
    let tag = format!("{:10}", tag);
    let tag = if color {
        match issue.severity {
            Severity::Error => tag.red().bold().to_string(),
            Severity::Warning => tag.yellow().bold().to_string(),
            Severity::Info => tag.blue().bold().to_string(),
        }
    } else {
        tag
    };
    let line = match issue.line {
        Some(n) => format!("Line {}", n),
        None => "Line -".to_string(),
    };
    format!("  {} {}: {}", tag, line, issue.message)
}

/// Issue paths render relative to a directory target when possible.
fn display_path(file: &Path, target: &Path) -> String {
    if target.is_dir() {
        if let Some(rel) = pathdiff::diff_paths(file, target) {
            if !rel.as_os_str().is_empty() {
                return rel.display().to_string();
            }
        }
    }
    file.display().to_string()
}

/// Compose the JSON report object (pure) for testing purposes.
pub fn compose_json(res: &ValidationResult) -> JsonVal {
    let issues: Vec<JsonVal> = res
        .issues
        .iter()
        .map(|i| {
            json!({
                "file": i.file.display().to_string(),
                "line": i.line,
                "category": i.category,
                "severity": i.severity,
                "message": i.message,
                "auto_fixable": i.auto_fixable,
            })
        })
        .collect();
    json!({
        "target": res.target.display().to_string(),
        "summary": {
            "files_checked": res.files_checked,
            "errors": res.error_count(),
            "warnings": res.warning_count(),
            "info": res.info_count(),
            "auto_fixed": res.auto_fixed.len(),
            "status": res.status().to_string(),
        },
        "issues": issues,
        "auto_fixed": res.auto_fixed,
    })
}
