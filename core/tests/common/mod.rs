//! Common test utilities shared across integration tests.

#![allow(dead_code)]

/// Join lines into a newline-delimited document.
pub fn doc(lines: &[&str]) -> String {
    lines.join("\n")
}

/// A small, well-formed procedural document: both expected sections
/// present, contiguous numbering, one prerequisite.
pub fn procedural_doc() -> String {
    doc(&[
        "Prerequisites",
        "• You must have admin access.",
        "",
        "Procedure",
        "1. Navigate to Settings → General.",
        "2. Choose Save.",
        "3. Verify the status.",
    ])
}
