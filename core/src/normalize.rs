//! Line normalization and noise detection.
//!
//! Normalization produces the identity key used by the diff engine:
//! bullets, step numbers, arrow glyphs, whitespace, and letter case are
//! all erased so that purely cosmetic re-rendering is invisible to the
//! comparison. We intentionally avoid regex here to keep core deps
//! minimal and to remain deterministic.

use crate::config::CompareConfig;

/// Canonicalize one line for comparison.
///
/// Pipeline: trim, strip a leading bullet glyph, strip a leading step
/// number (`3. ` / `3) `), rewrite arrow glyphs to `" > "`, collapse
/// internal whitespace, lowercase. Empty or whitespace-only input
/// normalizes to the empty string.
pub fn normalize_line(line: &str, config: &CompareConfig) -> String {
    let s = line.trim();
    if s.is_empty() {
        return String::new();
    }

    let s = strip_bullet(s, &config.bullet_chars);
    let s = strip_step_number(s);

    let mut buf = String::with_capacity(s.len());
    for ch in s.chars() {
        if config.arrow_chars.contains(&ch) {
            buf.push_str(" > ");
        } else {
            buf.push(ch);
        }
    }

    let collapsed: Vec<&str> = buf.split_whitespace().collect();
    collapsed.join(" ").to_lowercase()
}

/// Strip one leading bullet glyph and the whitespace after it.
fn strip_bullet<'a>(s: &'a str, bullets: &[char]) -> &'a str {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, ch)) if bullets.contains(&ch) => {
            let rest = &s[ch.len_utf8()..];
            rest.trim_start()
        }
        _ => s,
    }
}

/// Strip a leading step-number prefix: one or more digits followed by
/// `.` or `)` and optional whitespace ("3. Choose ..." -> "Choose ...").
fn strip_step_number(s: &str) -> &str {
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return s;
    }
    let rest = &s[digits..];
    match rest.chars().next() {
        Some('.') | Some(')') => rest[1..].trim_start(),
        _ => s,
    }
}

/// True when `line` carries no semantic content: blank, a horizontal
/// rule, or a table column-separator row.
pub fn is_noise(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.is_empty() {
        return true;
    }
    if is_horizontal_rule(stripped) {
        return true;
    }
    is_table_separator(stripped)
}

/// 3+ run of rule characters (`---`, `===`, `___`, `───`, `***` or any
/// mix of them) and nothing else.
fn is_horizontal_rule(s: &str) -> bool {
    let mut count = 0;
    for ch in s.chars() {
        if !matches!(ch, '-' | '=' | '*' | '_' | '─') {
            return false;
        }
        count += 1;
    }
    count >= 3
}

/// Two or more dash runs separated by 2+ spaces, e.g. the
/// `-----  ------  ----` row under a plain-text table header.
fn is_table_separator(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    let mut runs = 0;
    loop {
        let mut len = 0;
        while matches!(chars.peek(), Some('-') | Some('─')) {
            chars.next();
            len += 1;
        }
        if len == 0 {
            return false;
        }
        runs += 1;

        let mut gap = 0;
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
            gap += 1;
        }
        if chars.peek().is_none() {
            return runs >= 2;
        }
        if gap < 2 {
            return false;
        }
    }
}
