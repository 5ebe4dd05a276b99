//! ay11lint core library.
//!
//! Lints HTML documents for accessibility (WCAG) violations and maps each
//! reported violation back to a best-effort line/column in the original
//! source text.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: JSON configuration discovery and defaults.
//! - `engine`: rules-engine boundary and the built-in scraper-backed engine.
//! - `error`: typed errors mapped to exit statuses at the top level.
//! - `linter`: per-file and per-directory lint orchestration.
//! - `location`: violation-snippet to line/column resolution.
//! - `models`: finding, fix, and summary data models.
//! - `output`: human/JSON printers.
//! - `paths`: CLI target path transformation and resolution.
//! - `utils`: colored stderr helpers.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod linter;
pub mod location;
pub mod models;
pub mod output;
pub mod paths;
pub mod utils;
