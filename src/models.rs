//! Shared data models for findings and report output.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a reported finding.
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Suggested replacement for an offending snippet.
pub struct Fix {
    /// Character range of the snippet within its line, 0-based half-open.
    pub range: (usize, usize),
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
/// A single accessibility finding at a source location.
///
/// `line` and `column` are 1-based; `(0, 0)` means the snippet could not
/// be located in the source text.
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub source: String,
    pub fix: Option<Fix>,
}

#[derive(Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Lint results container passed to the printers.
pub struct LintReport {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

impl LintReport {
    /// Build a report, deriving summary counts from the findings.
    pub fn new(findings: Vec<Finding>, files: usize) -> Self {
        let errors = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = findings.len() - errors;
        LintReport {
            findings,
            summary: Summary {
                errors,
                warnings,
                files,
            },
        }
    }
}
