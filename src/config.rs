//! Linter configuration discovery.
//!
//! ay11lint reads a JSON configuration from the working directory, probing
//! `ay11lint.json` first and the legacy `.ay11lintrc` second. Only the
//! first candidate that exists is consulted; a file that cannot be read or
//! parsed logs a note and falls back to the defaults. Loading never fails.
//!
//! Defaults:
//! - `extensions`: `[".html"]`
//! - everything else: empty/absent

use crate::utils;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Config file names probed in the working directory, in order.
const CONFIG_FILE_NAMES: [&str; 2] = ["ay11lint.json", ".ay11lintrc"];

#[derive(Debug, Clone, Deserialize)]
/// Per-rule toggle under `"rules"`, passed through to the rules engine.
pub struct RuleToggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Root configuration loaded from `ay11lint.json` (or legacy `.ay11lintrc`).
pub struct LinterConfig {
    /// File extensions linted when the target is a directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns excluded from directory lints.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Source-folder substitution applied to CLI path arguments, for
    /// linting compiled output whose templates live elsewhere.
    pub source_folder: Option<String>,
    /// Per-rule enable/disable overrides.
    #[serde(default)]
    pub rules: HashMap<String, RuleToggle>,
    /// Per-rule overrides for the suggested-fix text.
    #[serde(default)]
    pub rules_messages: HashMap<String, String>,
}

fn default_extensions() -> Vec<String> {
    vec![".html".to_string()]
}

impl Default for LinterConfig {
    fn default() -> Self {
        LinterConfig {
            extensions: default_extensions(),
            ignore: Vec::new(),
            source_folder: None,
            rules: HashMap::new(),
            rules_messages: HashMap::new(),
        }
    }
}

/// Load the configuration from `cwd`, falling back to the defaults.
///
/// Both candidates are parsed as JSON; the legacy dotfile is honored only
/// when its content is valid JSON.
pub fn load_config(cwd: &Path) -> LinterConfig {
    for name in CONFIG_FILE_NAMES {
        let path = cwd.join(name);
        if !path.exists() {
            continue;
        }
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str::<LinterConfig>(&s).map_err(|e| e.to_string()));
        match parsed {
            Ok(cfg) => return cfg,
            Err(err) => {
                eprintln!(
                    "{} failed to load config from {}: {}",
                    utils::note_prefix(),
                    path.to_string_lossy(),
                    err
                );
                return LinterConfig::default();
            }
        }
    }
    LinterConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_json_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ay11lint.json"),
            r#"{
                "extensions": [".njk", ".html"],
                "ignore": ["node_modules/**"],
                "sourceFolder": "dist"
            }"#,
        )
        .unwrap();

        let cfg = load_config(dir.path());
        assert_eq!(cfg.extensions, vec![".njk", ".html"]);
        assert_eq!(cfg.ignore, vec!["node_modules/**"]);
        assert_eq!(cfg.source_folder.as_deref(), Some("dist"));
    }

    #[test]
    fn test_default_when_no_config_exists() {
        let dir = tempdir().unwrap();
        let cfg = load_config(dir.path());
        assert_eq!(cfg.extensions, vec![".html"]);
        assert!(cfg.ignore.is_empty());
        assert!(cfg.source_folder.is_none());
    }

    #[test]
    fn test_default_on_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ay11lint.json"), "not json at all").unwrap();

        let cfg = load_config(dir.path());
        assert_eq!(cfg.extensions, vec![".html"]);
    }

    #[test]
    fn test_legacy_rc_parsed_as_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".ay11lintrc"), r#"{"extensions": [".htm"]}"#).unwrap();

        let cfg = load_config(dir.path());
        assert_eq!(cfg.extensions, vec![".htm"]);
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ay11lint.json"),
            r#"{"extensions": [".html"]}"#,
        )
        .unwrap();
        fs::write(dir.path().join(".ay11lintrc"), r#"{"extensions": [".njk"]}"#).unwrap();

        let cfg = load_config(dir.path());
        assert_eq!(cfg.extensions, vec![".html"]);
    }

    #[test]
    fn test_rule_overrides_and_messages() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ay11lint.json"),
            r#"{
                "rules": { "color-contrast": { "enabled": true } },
                "rulesMessages": { "image-alt": "Describe the image" }
            }"#,
        )
        .unwrap();

        let cfg = load_config(dir.path());
        // extensions default applies even when the file omits them
        assert_eq!(cfg.extensions, vec![".html"]);
        assert!(cfg.rules.get("color-contrast").map(|r| r.enabled).unwrap());
        assert_eq!(
            cfg.rules_messages.get("image-alt").map(String::as_str),
            Some("Describe the image")
        );
    }
}
