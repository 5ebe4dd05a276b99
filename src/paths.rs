//! Target path resolution for CLI arguments.
//!
//! Supports the source-folder substitution rule: when linting compiled
//! output whose templates live elsewhere, a template path given on the
//! command line is rewritten into the corresponding compiled `.html` path.

use crate::config::LinterConfig;
use crate::error::LintError;
use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Rewrite `raw` through the configured source folder, if any.
///
/// With `sourceFolder = "dist"`, `src/components/test.njk` becomes
/// `dist/components/test.html` and a bare `test.njk` becomes
/// `dist/test.html`. Without the override the path passes through
/// unchanged.
pub fn transform_path(raw: &str, config: &LinterConfig) -> String {
    let folder = match config.source_folder.as_deref() {
        Some(f) if !f.is_empty() => f,
        _ => return raw.to_string(),
    };

    let sep = MAIN_SEPARATOR.to_string();
    let mut parts: Vec<String> = raw.split(MAIN_SEPARATOR).map(str::to_string).collect();
    if parts.len() > 1 {
        parts[0] = folder.to_string();
    } else {
        parts[0] = format!("{}{}{}", folder, sep, parts[0]);
    }
    if let Some(last) = parts.last_mut() {
        *last = Path::new(last.as_str())
            .with_extension("html")
            .to_string_lossy()
            .into_owned();
    }
    parts.join(&sep)
}

/// Resolve a CLI path argument to an absolute path that exists on disk.
///
/// `"."` resolves to the current working directory; anything else is
/// resolved against it. A missing path yields `PathNotFound`, with a
/// build-step hint when a source-folder override is configured.
pub fn resolve_target_path(raw: &str, config: &LinterConfig) -> Result<PathBuf, LintError> {
    let transformed = transform_path(raw, config);
    let cwd = env::current_dir()?;
    let target = if transformed == "." {
        cwd
    } else {
        cwd.join(&transformed)
    };

    if !target.exists() {
        let hint = if config.source_folder.as_deref().is_some_and(|f| !f.is_empty()) {
            " Did you set sourceFolder in the config file and forget to compile?"
        } else {
            ""
        };
        return Err(LintError::PathNotFound {
            path: target.to_string_lossy().into_owned(),
            hint: hint.to_string(),
        });
    }
    Ok(target)
}
