use crate::OutputFormat;
use crate::commands::{load_config, read_document};
use crate::output::{json, text};
use anyhow::Result;
use docdiff::{ComparisonResult, compare_with_config};
use std::io;
use std::process::ExitCode;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

pub fn run(
    old_path: &str,
    new_path: &str,
    format: OutputFormat,
    config_path: Option<&str>,
    quiet: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let verbosity = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let config = load_config(config_path)?;
    let old_text = read_document(old_path)?;
    let new_text = read_document(new_path)?;

    let result = compare_with_config(&old_text, &new_text, &config);

    print_warnings_to_stderr(&result);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            text::write_text_report(&mut handle, &result, old_path, new_path, verbosity)?;
        }
        OutputFormat::Json => {
            json::write_json_report(&mut handle, &result)?;
        }
    }

    Ok(exit_code_from_result(&result))
}

fn print_warnings_to_stderr(result: &ComparisonResult) {
    for warning in &result.structural_warnings {
        eprintln!("Warning: {}", warning.message);
    }
}

fn exit_code_from_result(result: &ComparisonResult) -> ExitCode {
    if result.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
