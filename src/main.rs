//! ay11lint CLI binary entry point.
//! Resolves configuration and target paths, runs the linter, prints results.

use ay11lint::cli::Cli;
use ay11lint::config;
use ay11lint::error::LintError;
use ay11lint::linter::AccessibilityLinter;
use ay11lint::models::LintReport;
use ay11lint::output;
use ay11lint::paths;
use ay11lint::utils;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_fatal(&err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LintError> {
    if cli.paths.is_empty() {
        return Err(LintError::Usage);
    }

    let cwd = std::env::current_dir()?;
    let config = config::load_config(&cwd);
    let linter = AccessibilityLinter::new(config.clone());

    let mut findings = Vec::new();
    let mut files = 0usize;
    for raw in &cli.paths {
        let target = paths::resolve_target_path(raw, &config)?;
        if target.is_dir() {
            if cli.output != "json" {
                println!("Linting directory: {}", target.to_string_lossy());
            }
            let (dir_findings, dir_files) = linter.lint_directory(&target)?;
            findings.extend(dir_findings);
            files += dir_files;
        } else if target.is_file() {
            if cli.output != "json" {
                println!("Linting file: {}", target.to_string_lossy());
            }
            findings.extend(linter.lint_file(&target)?);
            files += 1;
        } else {
            return Err(LintError::Analysis {
                file: target.to_string_lossy().into_owned(),
                message: "path is neither a file nor a directory".into(),
            });
        }
    }

    output::print_report(&LintReport::new(findings, files), &cli.output);
    Ok(())
}

fn report_fatal(err: &LintError) {
    match err {
        LintError::Usage => {
            eprintln!("Usage: ay11lint [--fix] <file-or-directory-path>");
            eprintln!("       ay11lint [--fix] .  (to lint current directory)");
        }
        other => eprintln!("{} {}", utils::error_prefix(), other),
    }
}
