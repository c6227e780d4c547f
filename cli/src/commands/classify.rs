use crate::commands::{load_config, read_document};
use crate::output::{category_str, severity_str};
use anyhow::Result;
use docdiff::{Category, classify_line, normalize_line};
use std::io::{self, Write};
use std::process::ExitCode;

/// Dump the per-line classification of a document, one output line per
/// input line. Useful for checking what the comparison engine actually
/// sees after normalization.
pub fn run(path: &str, config_path: Option<&str>, include_noise: bool) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let text = read_document(path)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for line in text.lines() {
        let category = classify_line(line, &config);
        if category == Category::Noise && !include_noise {
            continue;
        }
        let norm = normalize_line(line, &config);
        writeln!(
            handle,
            "{:<14} {:<6} {}",
            category_str(category),
            severity_str(category.severity()),
            norm
        )?;
    }

    Ok(ExitCode::SUCCESS)
}
