//! Output rendering for lint findings.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-finding fields and a top-level summary.

use crate::models::{LintReport, Severity};
use crate::utils::colors_enabled;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && colors_enabled()
}

/// Display form of a finding path: relative to `cwd` when possible.
fn display_path(file: &str, cwd: &Path) -> String {
    pathdiff::diff_paths(file, cwd)
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty() && !p.starts_with(".."))
        .unwrap_or_else(|| file.to_string())
}

/// Print the lint report in the requested format.
pub fn print_report(report: &LintReport, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => print_human(report),
    }
}

fn print_human(report: &LintReport) {
    let color = colors_enabled();
    if report.findings.is_empty() {
        let message = "No accessibility issues found! 🎉";
        if color {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
        return;
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    let separator = "─".repeat(50);
    for finding in &report.findings {
        let path = display_path(&finding.file, &cwd);
        if color {
            println!("\n{}", separator.bright_black());
            println!(
                "{}:{}:{}",
                path.blue(),
                finding.line.yellow(),
                finding.column.yellow()
            );
            let rule = match finding.severity {
                Severity::Error => finding.rule.red().to_string(),
                Severity::Warning => finding.rule.yellow().to_string(),
            };
            println!("{}: {}", rule, finding.message);
            println!("{}", finding.source.bright_black());
            if let Some(fix) = &finding.fix {
                println!("{} {}", "Suggested fix:".green(), fix.text);
            }
        } else {
            println!("\n{}", separator);
            println!("{}:{}:{}", path, finding.line, finding.column);
            println!("{}: {}", finding.rule, finding.message);
            println!("{}", finding.source);
            if let Some(fix) = &finding.fix {
                println!("Suggested fix: {}", fix.text);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &LintReport) -> JsonVal {
    // Directly serialize the report, keeping a stable shape
    serde_json::to_value(report).unwrap()
}
