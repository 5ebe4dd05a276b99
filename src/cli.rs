//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ay11lint",
    version,
    about = "Accessibility (WCAG) linter for HTML files",
    long_about = "ay11lint — lint HTML documents for accessibility violations and map each \
violation back to a source position.\n\nConfiguration is read from ay11lint.json (or the \
legacy .ay11lintrc) in the working directory.",
    after_help = "Examples:\n  ay11lint dist/index.html\n  ay11lint .  (to lint the current directory)\n  ay11lint --fix src/components/card.njk"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Files or directories to lint ("." for the current directory)
    pub paths: Vec<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Request automatic fixes (currently report-only)")]
    pub fix: bool,
    #[arg(long, default_value = "human", help = "Output mode: human|json (default: human)")]
    pub output: String,
}
