//! docdiff: a library for semantic comparison of documentation pages.
//!
//! This crate decides whether the *meaning* of a documentation page
//! changed between two snapshots, as opposed to cosmetic formatting
//! drift (bullet glyphs, whitespace, step-number re-rendering). It
//! provides:
//! - Deep line normalization that erases formatting noise
//! - Semantic classification of lines (headers, instructions,
//!   prerequisites, notes) with HIGH/MEDIUM/LOW severities
//! - A count-aware, order-insensitive diff over normalized lines
//! - Structural validation: numbering gaps, missing sections, removed
//!   prerequisite statements
//!
//! # Quick Start
//!
//! ```
//! let old = "Prerequisites\nYou must have admin access.\n1. Choose Save.";
//! let new = "Prerequisites\n1. Choose Save.";
//!
//! let result = docdiff::compare(old, new);
//!
//! assert!(result.has_changes);
//! assert_eq!(result.removed.len(), 1);
//! assert_eq!(result.structural_warnings.len(), 1);
//! assert_eq!(result.max_severity, Some(docdiff::Severity::High));
//! ```
//!
//! `compare` is a pure, synchronous function of its two inputs: no I/O,
//! no shared state, no failure channel. Any well-formed string input
//! produces a well-defined (possibly empty) result, so callers may
//! invoke it concurrently across pages without coordination.

mod classify;
mod config;
mod engine;
mod normalize;
mod report;
mod structure;

pub use classify::classify_line;
pub use config::{CompareConfig, CompareConfigBuilder, ConfigError, ExpectedSection};
pub use engine::diff_lines;
pub use normalize::{is_noise, normalize_line};
pub use report::{
    Category, ChangeEntry, ComparisonResult, Severity, StructuralWarning, WarningKind,
};
pub use structure::{
    detect_missing_prerequisites, detect_missing_sections, detect_numbering_gaps,
    validate_structure,
};

/// Compare two documentation texts with the default rule tables.
///
/// See [`compare_with_config`] for the full contract.
pub fn compare(old_text: &str, new_text: &str) -> ComparisonResult {
    compare_with_config(old_text, new_text, &CompareConfig::default())
}

/// Compare two documentation texts with explicit rule tables.
///
/// Runs the count-aware line diff and the structural validators, then
/// assembles a [`ComparisonResult`] with `has_changes`, `max_severity`,
/// and severity-descending ordering applied. Output is bit-identical
/// across repeated calls with the same inputs.
pub fn compare_with_config(
    old_text: &str,
    new_text: &str,
    config: &CompareConfig,
) -> ComparisonResult {
    let (added, removed) = engine::diff_lines(old_text, new_text, config);
    let warnings = structure::validate_structure(old_text, new_text, config);
    ComparisonResult::from_parts(added, removed, warnings)
}
