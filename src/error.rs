//! Error types for ay11lint.
//!
//! Resolvers return these instead of terminating the process; `main` maps
//! each kind to a diagnostic and an exit status exactly once.

use thiserror::Error;

/// Main error type for a lint run.
#[derive(Error, Debug)]
pub enum LintError {
    /// No path argument was supplied on the command line.
    #[error("missing path argument")]
    Usage,

    /// A target path did not exist after transformation and resolution.
    /// `hint` is non-empty when a source-folder override is configured.
    #[error("Path \"{path}\" does not exist!{hint}")]
    PathNotFound { path: String, hint: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document construction or rules-engine evaluation failed.
    #[error("analysis failed for {file}: {message}")]
    Analysis { file: String, message: String },
}

pub type Result<T> = std::result::Result<T, LintError>;
