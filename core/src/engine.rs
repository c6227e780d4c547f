//! Count-aware diff engine.
//!
//! Compares two documents as multisets of normalized lines: each side is
//! reduced to a frequency map keyed by normalized form, and only count
//! deltas are reported. A line that appears the same number of times on
//! both sides is invisible to the diff regardless of where it moved or
//! how its formatting drifted, which is exactly the signal the severity
//! logic downstream wants. Positional diffing is deliberately avoided.

use crate::classify::classify_line;
use crate::config::CompareConfig;
use crate::normalize::{is_noise, normalize_line};
use crate::report::{Category, ChangeEntry};
use rustc_hash::FxHashMap;

/// One side of the comparison: duplicate-preserving counts plus the
/// first-seen raw (trimmed) line per normalized key.
#[derive(Debug, Default)]
struct LineIndex {
    counts: FxHashMap<String, u32>,
    first_raw: FxHashMap<String, String>,
}

impl LineIndex {
    fn build(text: &str, config: &CompareConfig) -> LineIndex {
        let mut index = LineIndex::default();
        for line in text.lines() {
            if is_noise(line) {
                continue;
            }
            let norm = normalize_line(line, config);
            if norm.is_empty() {
                continue;
            }
            index
                .first_raw
                .entry(norm.clone())
                .or_insert_with(|| line.trim().to_string());
            *index.counts.entry(norm).or_insert(0) += 1;
        }
        index
    }

    fn count(&self, norm: &str) -> u32 {
        self.counts.get(norm).copied().unwrap_or(0)
    }

    fn representative<'a>(&'a self, norm: &'a str) -> &'a str {
        self.first_raw.get(norm).map(String::as_str).unwrap_or(norm)
    }
}

/// Diff two texts into `(added, removed)` change entries.
///
/// Keys are visited in sorted order so repeated runs over identical
/// input produce identical output; hash-map iteration order never leaks
/// into the result. Entries are emitted once per surplus occurrence:
/// three copies in `old` against one in `new` yield two removals.
pub fn diff_lines(
    old_text: &str,
    new_text: &str,
    config: &CompareConfig,
) -> (Vec<ChangeEntry>, Vec<ChangeEntry>) {
    let old = LineIndex::build(old_text, config);
    let new = LineIndex::build(new_text, config);

    let mut keys: Vec<&String> = old.counts.keys().chain(new.counts.keys()).collect();
    keys.sort();
    keys.dedup();

    let mut added = Vec::new();
    let mut removed = Vec::new();

    for norm in keys {
        let old_count = old.count(norm);
        let new_count = new.count(norm);

        if old_count > new_count {
            let original = old.representative(norm);
            let category = classify_line(original, config);
            if category == Category::Noise {
                continue;
            }
            for _ in 0..(old_count - new_count) {
                removed.push(ChangeEntry::new(original, category));
            }
        } else if new_count > old_count {
            let original = new.representative(norm);
            let category = classify_line(original, config);
            if category == Category::Noise {
                continue;
            }
            for _ in 0..(new_count - old_count) {
                added.push(ChangeEntry::new(original, category));
            }
        }
    }

    (added, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn diff(old: &str, new: &str) -> (Vec<ChangeEntry>, Vec<ChangeEntry>) {
        diff_lines(old, new, &CompareConfig::default())
    }

    #[test]
    fn identical_texts_produce_no_entries() {
        let text = "Prerequisites\n• You must have admin access.\n1. Choose Save.";
        let (added, removed) = diff(text, text);
        assert!(added.is_empty());
        assert!(removed.is_empty());
    }

    #[test]
    fn cosmetic_drift_is_invisible() {
        let old = "• Choose Save.\nSettings → General";
        let new = "- choose   SAVE.\nSettings » General";
        let (added, removed) = diff(old, new);
        assert!(added.is_empty(), "added: {added:?}");
        assert!(removed.is_empty(), "removed: {removed:?}");
    }

    #[test]
    fn duplicate_counts_yield_surplus_entries() {
        let old = "Choose Save.\nChoose Save.\nChoose Save.";
        let new = "Choose Save.";
        let (added, removed) = diff(old, new);
        assert!(added.is_empty());
        assert_eq!(removed.len(), 2);
        for entry in &removed {
            assert_eq!(entry.text, "Choose Save.");
            assert_eq!(entry.category, Category::Instruction);
            assert_eq!(entry.severity, Severity::High);
        }
    }

    #[test]
    fn representative_is_first_seen_raw_form() {
        let old = "";
        let new = "  • Choose Save.  \n3. Choose Save.";
        let (added, removed) = diff(old, new);
        assert!(removed.is_empty());
        assert_eq!(added.len(), 2);
        // Both occurrences normalize to the same key; the first raw
        // (trimmed) form represents them.
        assert_eq!(added[0].text, "• Choose Save.");
        assert_eq!(added[1].text, "• Choose Save.");
    }

    #[test]
    fn added_and_removed_are_classified_independently() {
        let old = "The old descriptive paragraph.";
        let new = "Note: behavior changed.\nClick Next.";
        let (added, removed) = diff(old, new);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].category, Category::Content);
        assert_eq!(added.len(), 2);
        let categories: Vec<Category> = added.iter().map(|e| e.category).collect();
        assert!(categories.contains(&Category::Instruction));
        assert!(categories.contains(&Category::Note));
    }

    #[test]
    fn emission_order_is_sorted_by_normalized_key() {
        let old = "";
        let new = "zebra line\nalpha line\nmiddle line";
        let (added, _) = diff(old, new);
        let texts: Vec<&str> = added.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha line", "middle line", "zebra line"]);
    }

    #[test]
    fn noise_lines_never_reach_the_diff() {
        let old = "Choose Save.\n------\n\n";
        let new = "Choose Save.\n======\n   \n---  ---";
        let (added, removed) = diff(old, new);
        assert!(added.is_empty());
        assert!(removed.is_empty());
    }
}
