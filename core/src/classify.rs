//! Semantic line classification.
//!
//! `classify_line` assigns each line a [`Category`] through an ordered
//! priority chain. The order is load-bearing: the prerequisite rule
//! inspects the raw bullet-stripped line rather than the normalized
//! first token, so it must run after the action-verb rule to keep
//! instruction lines inside prerequisite bullets classified the same
//! way the downstream severity logic expects.

use crate::config::CompareConfig;
use crate::normalize::{is_noise, normalize_line};
use crate::report::Category;

/// Classify a line into a semantic category. First match wins:
///
/// 1. noise (blank, rule, separator, or normalizes to empty)
/// 2. exact section keyword ("Prerequisites", "Procedure", ...)
/// 3. step-group sub-header ("Steps in ...", "Steps for ...")
/// 4. first normalized token is an action verb -> instruction
/// 5. raw bullet-stripped line starts with a prerequisite phrase
/// 6. note block ("Note:", "Note ...", "Note")
/// 7. anything else -> content
pub fn classify_line(line: &str, config: &CompareConfig) -> Category {
    let stripped = line.trim();
    if stripped.is_empty() || is_noise(stripped) {
        return Category::Noise;
    }

    let norm = normalize_line(stripped, config);
    if norm.is_empty() {
        return Category::Noise;
    }

    let heading = norm.trim_end_matches(':').trim();
    if config.section_keywords.iter().any(|k| k == heading) {
        return Category::SectionHeader;
    }

    if config
        .section_prefixes
        .iter()
        .any(|p| norm.starts_with(p.as_str()))
    {
        return Category::SectionHeader;
    }

    let first_word = norm.split_whitespace().next().unwrap_or("");
    if config.action_verbs.iter().any(|v| v == first_word) {
        return Category::Instruction;
    }

    // Prerequisite phrases are matched against the raw line with only
    // bullets stripped; step numbers and arrows stay in place.
    let raw = stripped
        .trim_start_matches(|c: char| c == ' ' || config.bullet_chars.contains(&c))
        .to_lowercase();
    if config
        .prerequisite_prefixes
        .iter()
        .any(|p| raw.starts_with(p.as_str()))
    {
        return Category::Prerequisite;
    }

    if let Some(rest) = norm.strip_prefix(config.note_keyword.as_str()) {
        if rest.is_empty() || rest.starts_with(':') || rest.starts_with(' ') {
            return Category::Note;
        }
    }

    Category::Content
}
