//! Change entries, structural warnings, and the comparison result.
//!
//! This module defines the types produced by a comparison:
//! - [`ChangeEntry`]: a single added or removed semantic line
//! - [`StructuralWarning`]: a documentation-integrity defect found by the
//!   structural validator
//! - [`ComparisonResult`]: the full outcome of one `compare()` call
//!
//! The JSON field names (`text`, `category`, `severity` for entries;
//! `type`, `severity`, `message` for warnings) are a stable contract
//! relied on by report-building consumers.

use serde::{Deserialize, Serialize};

/// Semantic role of a line of documentation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A section heading ("Prerequisites", "Procedure", "Steps in ...").
    SectionHeader,
    /// A procedural instruction (first word is an action verb).
    Instruction,
    /// A prerequisite statement ("You must have ...").
    Prerequisite,
    /// A note block ("Note: ...").
    Note,
    /// Meaningful text with no more specific role.
    Content,
    /// No semantic content (blank, horizontal rule, table separator).
    /// Noise lines are filtered before diffing and never appear in a
    /// finalized [`ChangeEntry`].
    Noise,
}

/// Priority level attached to a change or structural warning.
///
/// Derived `Ord` gives `Low < Medium < High`, which is the order the
/// engine relies on when computing `max_severity` and sorting output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Category {
    /// Deterministic category-to-severity mapping.
    ///
    /// `Noise` maps to `Low` defensively; noise lines are dropped before
    /// any entry is built, so the value is never surfaced.
    pub fn severity(self) -> Severity {
        match self {
            Category::Instruction => Severity::High,
            Category::SectionHeader => Severity::High,
            Category::Prerequisite => Severity::High,
            Category::Note => Severity::Medium,
            Category::Content => Severity::Medium,
            Category::Noise => Severity::Low,
        }
    }
}

/// A single semantic line that was added to or removed from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// First-seen raw (trimmed) form of the line on the side it came from.
    pub text: String,
    pub category: Category,
    pub severity: Severity,
}

impl ChangeEntry {
    pub fn new(text: impl Into<String>, category: Category) -> ChangeEntry {
        debug_assert!(
            category != Category::Noise,
            "noise lines must be filtered before entry construction"
        );
        ChangeEntry {
            text: text.into(),
            severity: category.severity(),
            category,
        }
    }
}

/// The kind of structural defect a [`StructuralWarning`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum WarningKind {
    NumberingGap,
    MissingSection,
    MissingPrerequisite,
}

/// A documentation-integrity defect detected independently of the
/// line-level diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
}

impl StructuralWarning {
    pub fn new(kind: WarningKind, message: String) -> StructuralWarning {
        StructuralWarning {
            kind,
            severity: Severity::High,
            message,
        }
    }
}

/// The outcome of comparing an old and a new version of one document.
///
/// Invariants (maintained by [`ComparisonResult::from_parts`]):
/// - `has_changes` is true iff `added` or `removed` is non-empty;
///   structural-only findings do not set it.
/// - `max_severity` is the highest severity across all three lists, or
///   `None` when all are empty.
/// - Each list is sorted by severity descending; ties keep the
///   deterministic emission order of the engine and detectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub has_changes: bool,
    pub added: Vec<ChangeEntry>,
    pub removed: Vec<ChangeEntry>,
    pub structural_warnings: Vec<StructuralWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_severity: Option<Severity>,
}

impl ComparisonResult {
    /// Assemble a result from raw engine and validator output, computing
    /// the `has_changes`/`max_severity` invariants and imposing the
    /// severity-descending order on each list.
    pub fn from_parts(
        added: Vec<ChangeEntry>,
        removed: Vec<ChangeEntry>,
        structural_warnings: Vec<StructuralWarning>,
    ) -> ComparisonResult {
        let mut result = ComparisonResult {
            has_changes: !added.is_empty() || !removed.is_empty(),
            added,
            removed,
            structural_warnings,
            max_severity: None,
        };

        result.max_severity = result
            .added
            .iter()
            .map(|e| e.severity)
            .chain(result.removed.iter().map(|e| e.severity))
            .chain(result.structural_warnings.iter().map(|w| w.severity))
            .max();

        // Vec::sort_by_key is stable, so equal severities keep the
        // engine's canonical emission order.
        result.added.sort_by_key(|e| std::cmp::Reverse(e.severity));
        result.removed.sort_by_key(|e| std::cmp::Reverse(e.severity));
        result
            .structural_warnings
            .sort_by_key(|w| std::cmp::Reverse(w.severity));

        result
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.structural_warnings.is_empty()
    }
}
