//! Rules-engine boundary.
//!
//! The orchestrator talks to the engine exclusively through the
//! `RulesEngine` trait and the `Document` handle, so an alternate engine
//! or version can be substituted without touching the location, config, or
//! path resolvers. The built-in engine evaluates a fixed catalog of
//! WCAG 2.0/2.1 A/AA and best-practice rules over a scraper DOM.

pub mod contrast;
pub mod rules;

use crate::error::LintError;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// Rule tags the linter runs by default: WCAG 2.0/2.1 levels A/AA plus
/// best-practice rules.
pub const RUN_TAGS: [&str; 5] = ["wcag2a", "wcag2aa", "wcag21a", "wcag21aa", "best-practice"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How much of the document the engine should inspect.
pub enum Scope {
    /// A full document: document-level rules (lang, title, landmarks) apply.
    Document,
    /// A wrapped fragment: analysis is restricted to the synthetic `<main>`.
    Fragment,
}

/// Parsed HTML handed to the engine.
pub struct Document {
    html: Html,
    scope: Scope,
}

impl Document {
    /// Parse `text` into an analyzable document.
    pub fn parse(text: &str, scope: Scope) -> Document {
        Document {
            html: Html::parse_document(text),
            scope,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Root element the rules search under: the synthetic `<main>` for
    /// fragments, the document element otherwise.
    pub fn analysis_root(&self) -> ElementRef<'_> {
        if self.scope == Scope::Fragment {
            let main = Selector::parse("main").expect("valid selector");
            if let Some(el) = self.html.select(&main).next() {
                return el;
            }
        }
        self.html.root_element()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Impact reported for a violation, following the axe-core taxonomy.
pub enum Impact {
    Minor,
    Moderate,
    Serious,
    Critical,
}

#[derive(Debug, Clone)]
/// A DOM node affected by a violation, carried as serialized HTML.
pub struct ViolationNode {
    pub html: String,
}

#[derive(Debug, Clone)]
/// One violated rule with all affected nodes.
pub struct Violation {
    pub id: &'static str,
    pub impact: Impact,
    pub help: &'static str,
    pub nodes: Vec<ViolationNode>,
}

#[derive(Debug, Clone, Default)]
/// Options restricting an engine run.
pub struct RuleOptions {
    /// Only rules carrying at least one of these tags run.
    pub tags: Vec<String>,
    /// Per-rule enable/disable overrides (`rule id -> enabled`).
    pub overrides: HashMap<String, bool>,
}

/// Capability interface for the accessibility rules engine.
pub trait RulesEngine {
    /// Evaluate `document` and report all rule violations.
    fn analyze(
        &self,
        document: &Document,
        options: &RuleOptions,
    ) -> Result<Vec<Violation>, LintError>;
}

/// The built-in scraper-backed engine.
pub struct BuiltinEngine {
    rules: Vec<Box<dyn rules::Rule>>,
}

impl BuiltinEngine {
    pub fn new() -> BuiltinEngine {
        BuiltinEngine {
            rules: rules::catalog(),
        }
    }
}

impl Default for BuiltinEngine {
    fn default() -> Self {
        BuiltinEngine::new()
    }
}

impl RulesEngine for BuiltinEngine {
    fn analyze(
        &self,
        document: &Document,
        options: &RuleOptions,
    ) -> Result<Vec<Violation>, LintError> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            if !rule.tags().iter().any(|t| options.tags.iter().any(|o| o == t)) {
                continue;
            }
            let enabled = options
                .overrides
                .get(rule.id())
                .copied()
                .unwrap_or_else(|| rule.enabled_by_default());
            if !enabled {
                continue;
            }
            let nodes = rule.check(document);
            if !nodes.is_empty() {
                violations.push(Violation {
                    id: rule.id(),
                    impact: rule.impact(),
                    help: rule.help(),
                    nodes,
                });
            }
        }
        Ok(violations)
    }
}
