//! Lint orchestration: per-file analysis and directory walks.
//!
//! For each file the orchestrator wraps bare fragments in a minimal
//! document shell, hands the document to the rules engine restricted to
//! the WCAG 2.0/2.1 A/AA and best-practice tag set, and converts each
//! reported violation node into a `Finding` positioned by the location
//! resolver. Files are linted strictly one at a time, in enumeration
//! order.

use crate::config::LinterConfig;
use crate::engine::{
    BuiltinEngine, Document, Impact, RuleOptions, RulesEngine, Scope, Violation, RUN_TAGS,
};
use crate::error::{LintError, Result};
use crate::location;
use crate::models::{Finding, Fix, Severity};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Accessibility linter bound to one configuration and rules engine.
pub struct AccessibilityLinter {
    config: LinterConfig,
    engine: Box<dyn RulesEngine>,
}

impl AccessibilityLinter {
    pub fn new(config: LinterConfig) -> AccessibilityLinter {
        AccessibilityLinter {
            config,
            engine: Box::new(BuiltinEngine::new()),
        }
    }

    /// Build a linter around an alternate rules engine.
    pub fn with_engine(config: LinterConfig, engine: Box<dyn RulesEngine>) -> AccessibilityLinter {
        AccessibilityLinter { config, engine }
    }

    fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            tags: RUN_TAGS.iter().map(|t| t.to_string()).collect(),
            overrides: self
                .config
                .rules
                .iter()
                .map(|(id, toggle)| (id.clone(), toggle.enabled))
                .collect(),
        }
    }

    /// Lint one file, mapping each violation node back to a position in
    /// the original source text.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let source = fs::read_to_string(path).map_err(|e| LintError::Analysis {
            file: path.to_string_lossy().into_owned(),
            message: e.to_string(),
        })?;

        let lowered = source.to_ascii_lowercase();
        let is_fragment = !lowered.contains("<!doctype") && !lowered.contains("<html");
        let document = if is_fragment {
            let wrapped = format!(
                "<!DOCTYPE html><html lang=\"en\"><head><title>Fragment</title></head>\
                 <body><main>{}</main></body></html>",
                source
            );
            Document::parse(&wrapped, Scope::Fragment)
        } else {
            Document::parse(&source, Scope::Document)
        };

        let violations = self.engine.analyze(&document, &self.rule_options())?;
        Ok(self.collect_findings(&violations, &source, path))
    }

    /// Lint every configured-extension file under `dir`, honoring ignore
    /// globs, in sorted order.
    pub fn lint_directory(&self, dir: &Path) -> Result<(Vec<Finding>, usize)> {
        let mut targets = Vec::new();
        for ext in &self.config.extensions {
            let pattern = format!("{}/**/*{}", dir.to_string_lossy(), ext);
            let entries = glob::glob(&pattern).map_err(|e| LintError::Analysis {
                file: pattern.clone(),
                message: e.to_string(),
            })?;
            for path in entries.flatten() {
                if !self.is_ignored(&path, dir) {
                    targets.push(path);
                }
            }
        }
        targets.sort();
        targets.dedup();

        let mut findings = Vec::new();
        for path in &targets {
            findings.extend(self.lint_file(path)?);
        }
        Ok((findings, targets.len()))
    }

    fn is_ignored(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.config.ignore.iter().any(|pat| {
            Pattern::new(pat)
                .map(|p| p.matches_path(relative) || p.matches_path(path))
                .unwrap_or(false)
        })
    }

    fn collect_findings(
        &self,
        violations: &[Violation],
        source: &str,
        path: &Path,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        for violation in violations {
            for node in &violation.nodes {
                let loc = location::locate(source, &node.html);
                findings.push(Finding {
                    file: path.to_string_lossy().into_owned(),
                    line: loc.line,
                    column: loc.column,
                    rule: violation.id.to_string(),
                    severity: if violation.impact == Impact::Critical {
                        Severity::Error
                    } else {
                        Severity::Warning
                    },
                    message: violation.help.to_string(),
                    source: node.html.clone(),
                    fix: Some(Fix {
                        range: (
                            loc.column.saturating_sub(1),
                            loc.column.saturating_sub(1) + node.html.len(),
                        ),
                        text: self.fix_suggestion(violation),
                    }),
                });
            }
        }
        findings
    }

    /// Suggested fix text for a violation, overridable per rule id via
    /// `rulesMessages`.
    fn fix_suggestion(&self, violation: &Violation) -> String {
        if let Some(message) = self.config.rules_messages.get(violation.id) {
            return message.clone();
        }
        match violation.id {
            "image-alt" => "Add alt attribute to img element".to_string(),
            "button-name" => "Add text content or aria-label to button".to_string(),
            "region" => "Add role='region' attribute".to_string(),
            "landmark-one-main" => "Add role='main' attribute to main element".to_string(),
            _ => violation.help.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_fragment_is_wrapped_and_linted() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("card.html");
        fs::write(&file, "<div>\n  <img src=\"photo.jpg\">\n</div>").unwrap();

        let linter = AccessibilityLinter::new(LinterConfig::default());
        let findings = linter.lint_file(&file).unwrap();

        let alt = findings
            .iter()
            .find(|f| f.rule == "image-alt")
            .expect("missing-alt finding");
        assert_eq!(alt.severity, Severity::Error);
        assert_eq!((alt.line, alt.column), (2, 3));
        assert_eq!(alt.fix.as_ref().unwrap().text, "Add alt attribute to img element");
        // document-level rules must not fire against the synthetic shell
        assert!(findings.iter().all(|f| f.rule != "html-has-lang"));
        assert!(findings.iter().all(|f| f.rule != "landmark-one-main"));
    }

    #[test]
    fn test_accessible_document_yields_no_findings() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("ok.html");
        fs::write(
            &file,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>Fine</title></head>\n<body>\n\
             <main>\n<h1>Welcome</h1>\n<img src=\"a.png\" alt=\"A description\">\n\
             <button>Click me</button>\n</main>\n</body>\n</html>\n",
        )
        .unwrap();

        let linter = AccessibilityLinter::new(LinterConfig::default());
        let findings = linter.lint_file(&file).unwrap();
        assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    #[test]
    fn test_fix_message_override_applies() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("card.html");
        fs::write(&file, "<img src=\"photo.jpg\">").unwrap();

        let mut messages = HashMap::new();
        messages.insert(
            "image-alt".to_string(),
            "Décrivez l'image avec un attribut alt".to_string(),
        );
        let config = LinterConfig {
            rules_messages: messages,
            ..LinterConfig::default()
        };
        let linter = AccessibilityLinter::new(config);
        let findings = linter.lint_file(&file).unwrap();

        let alt = findings.iter().find(|f| f.rule == "image-alt").unwrap();
        assert_eq!(
            alt.fix.as_ref().unwrap().text,
            "Décrivez l'image avec un attribut alt"
        );
    }

    #[test]
    fn test_unlocatable_snippet_degrades_to_sentinel() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("split.html");
        // The offending button spans two lines, so no single line contains
        // its serialized HTML.
        fs::write(&file, "<div>\n  <button>\n  </button>\n</div>").unwrap();

        let linter = AccessibilityLinter::new(LinterConfig::default());
        let findings = linter.lint_file(&file).unwrap();

        let button = findings.iter().find(|f| f.rule == "button-name").unwrap();
        assert_eq!((button.line, button.column), (0, 0));
    }

    #[test]
    fn test_directory_lint_honors_extensions_and_ignores() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("a.html"), "<img src=\"a.png\">").unwrap();
        fs::write(dir.path().join("b.txt"), "<img src=\"b.png\">").unwrap();
        fs::write(dir.path().join("vendor/c.html"), "<img src=\"c.png\">").unwrap();

        let config = LinterConfig {
            ignore: vec!["vendor/**".to_string()],
            ..LinterConfig::default()
        };
        let linter = AccessibilityLinter::new(config);
        let (findings, files) = linter.lint_directory(dir.path()).unwrap();

        assert_eq!(files, 1);
        assert!(findings.iter().all(|f| f.file.ends_with("a.html")));
        assert!(findings.iter().any(|f| f.rule == "image-alt"));
    }

    #[test]
    fn test_directory_findings_follow_file_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<img src=\"a.png\">").unwrap();
        fs::write(dir.path().join("b.html"), "<img src=\"b.png\">").unwrap();

        let linter = AccessibilityLinter::new(LinterConfig::default());
        let (findings, files) = linter.lint_directory(dir.path()).unwrap();

        assert_eq!(files, 2);
        let positions: Vec<&str> = findings
            .iter()
            .filter(|f| f.rule == "image-alt")
            .map(|f| f.file.as_str())
            .collect();
        assert_eq!(positions.len(), 2);
        assert!(positions[0] < positions[1]);
    }

    #[test]
    fn test_unreadable_file_is_an_analysis_error() {
        let linter = AccessibilityLinter::new(LinterConfig::default());
        let err = linter.lint_file(Path::new("/definitely/not/here.html"));
        assert!(matches!(err, Err(LintError::Analysis { .. })));
    }
}
