//! Structural validation.
//!
//! Three independent defect detectors run alongside the line diff:
//! numbering gaps in step sequences, missing expected sections in
//! procedural documents, and prerequisite statements that survive in
//! the old text but not the new. The first two run on both texts and
//! only newly introduced warnings are reported, so a pre-existing gap
//! does not re-alert on every comparison.

use crate::classify::classify_line;
use crate::config::CompareConfig;
use crate::normalize::normalize_line;
use crate::report::{Category, StructuralWarning, WarningKind};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Leading step number of a line (`"3. Choose..."` -> `Some(3)`).
///
/// A digit run too large for `u64` is treated as no match; the line is
/// skipped rather than failing the whole comparison.
fn step_number(line: &str) -> Option<u64> {
    let s = line.trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    match s[digits..].chars().next() {
        Some('.') | Some(')') => s[..digits].parse().ok(),
        _ => None,
    }
}

/// Detect gaps in step numbering (11 followed by 13 means 12 is
/// missing). A restart at 1 opens a new sub-procedure and resets the
/// tracker instead of reporting a jump back.
pub fn detect_numbering_gaps(text: &str) -> Vec<StructuralWarning> {
    let mut warnings = Vec::new();
    let mut prev: Option<u64> = None;

    for line in text.lines() {
        let Some(num) = step_number(line) else {
            continue;
        };
        if num == 1 {
            prev = Some(1);
            continue;
        }
        // checked_add keeps a step numbered u64::MAX from wrapping;
        // nothing can follow it, so it opens no gap.
        if let Some(p) = prev {
            if let Some(next) = p.checked_add(1) {
                if num > next {
                    for missing in next..num {
                        warnings.push(StructuralWarning::new(
                            WarningKind::NumberingGap,
                            format!(
                                "Step {missing} is missing (numbering jumps from {p} to {num})"
                            ),
                        ));
                    }
                }
            }
        }
        prev = Some(num);
    }

    warnings
}

/// Warn when a document that looks procedural (contains one of the
/// configured trigger words) lacks an expected section keyword.
pub fn detect_missing_sections(text: &str, config: &CompareConfig) -> Vec<StructuralWarning> {
    let lowered = text.to_lowercase();

    let is_procedural = config
        .procedural_triggers
        .iter()
        .any(|trigger| lowered.contains(trigger.as_str()));
    if !is_procedural {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    for section in &config.expected_sections {
        if !lowered.contains(section.keyword.as_str()) {
            warnings.push(StructuralWarning::new(
                WarningKind::MissingSection,
                format!("{} may be missing from the document", section.label),
            ));
        }
    }
    warnings
}

/// Detect prerequisite lines present in the old text but absent from
/// the new, by normalized form. Inherently relative, so these warnings
/// are never suppressed.
pub fn detect_missing_prerequisites(
    old_text: &str,
    new_text: &str,
    config: &CompareConfig,
) -> Vec<StructuralWarning> {
    let old_prereqs = prerequisite_lines(old_text, config);
    let new_prereqs = prerequisite_lines(new_text, config);

    old_prereqs
        .difference(&new_prereqs)
        .map(|missing| {
            StructuralWarning::new(
                WarningKind::MissingPrerequisite,
                format!("Prerequisite removed: \"{missing}\""),
            )
        })
        .collect()
}

// BTreeSet keeps the emission order canonical.
fn prerequisite_lines(text: &str, config: &CompareConfig) -> BTreeSet<String> {
    text.lines()
        .filter(|line| classify_line(line, config) == Category::Prerequisite)
        .map(|line| normalize_line(line, config))
        .collect()
}

/// Run all structural validations for one comparison.
///
/// Numbering and section warnings already present in the old text are
/// suppressed by message string, so only newly introduced defects are
/// reported.
pub fn validate_structure(
    old_text: &str,
    new_text: &str,
    config: &CompareConfig,
) -> Vec<StructuralWarning> {
    let mut old_warnings = detect_numbering_gaps(old_text);
    old_warnings.extend(detect_missing_sections(old_text, config));

    let mut new_warnings = detect_numbering_gaps(new_text);
    new_warnings.extend(detect_missing_sections(new_text, config));

    let old_messages: FxHashSet<&str> =
        old_warnings.iter().map(|w| w.message.as_str()).collect();

    let mut retained: Vec<StructuralWarning> = new_warnings
        .into_iter()
        .filter(|w| !old_messages.contains(w.message.as_str()))
        .collect();

    retained.extend(detect_missing_prerequisites(old_text, new_text, config));
    retained
}
