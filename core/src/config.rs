//! Configuration for the comparison engine.
//!
//! `CompareConfig` centralizes the classification rule tables (bullet
//! glyphs, arrow glyphs, action verbs, section keywords, prerequisite
//! phrases, expected sections) so they are injectable and independently
//! testable instead of being module-level constants scattered through
//! the classifier.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A section the structural validator expects in procedural documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedSection {
    /// Lowercase substring searched for in the document text.
    pub keyword: String,
    /// Human-readable label used in the warning message.
    pub label: String,
}

impl ExpectedSection {
    pub fn new(keyword: &str, label: &str) -> ExpectedSection {
        ExpectedSection {
            keyword: keyword.to_string(),
            label: label.to_string(),
        }
    }
}

/// Rule tables driving normalization, classification, and structural
/// validation.
///
/// All text tables are matched against lowercased input, so entries must
/// themselves be lowercase ([`CompareConfig::validate`] enforces this).
/// Table order is preserved and meaningful where noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Leading glyphs stripped as list bullets.
    pub bullet_chars: Vec<char>,
    /// Arrow glyphs rewritten to `" > "` during normalization.
    pub arrow_chars: Vec<char>,
    /// First-token verbs that mark a line as an instruction.
    pub action_verbs: Vec<String>,
    /// Exact normalized headings (trailing colon stripped) that mark a
    /// section header.
    pub section_keywords: Vec<String>,
    /// Normalized-text prefixes that mark a step-group sub-header
    /// (e.g. "steps in the cockpit:").
    pub section_prefixes: Vec<String>,
    /// Raw bullet-stripped lowercase prefixes that mark a prerequisite.
    pub prerequisite_prefixes: Vec<String>,
    /// Keyword opening a note block (matched as `{kw}`, `{kw}:`, `{kw} `).
    pub note_keyword: String,
    /// Lowercase substrings whose presence marks a document as procedural,
    /// activating the missing-section detector.
    pub procedural_triggers: Vec<String>,
    /// Sections the missing-section detector requires, in report order.
    pub expected_sections: Vec<ExpectedSection>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            bullet_chars: vec!['•', '·', '-', '*', '‣', '◦', '⁃', '∙'],
            arrow_chars: vec!['→', '►', '▶', '➜', '➤', '»'],
            action_verbs: to_strings(&[
                "choose",
                "select",
                "click",
                "enter",
                "navigate",
                "open",
                "upload",
                "download",
                "save",
                "add",
                "remove",
                "delete",
                "create",
                "configure",
                "check",
                "verify",
                "confirm",
                "submit",
                "type",
                "drag",
                "drop",
                "browse",
                "expand",
                "collapse",
                "go",
                "log",
                "sign",
                "press",
                "enable",
                "disable",
                "set",
                "change",
                "update",
                "assign",
                "map",
                "register",
                "subscribe",
                "search",
                "copy",
                "paste",
                "refresh",
            ]),
            section_keywords: to_strings(&[
                "prerequisites",
                "prerequisite",
                "procedure",
                "results",
                "result",
                "context",
                "steps",
                "next steps",
                "related information",
            ]),
            section_prefixes: to_strings(&["steps in", "steps for"]),
            prerequisite_prefixes: to_strings(&[
                "you've",
                "you're",
                "you need",
                "you must",
                "you have",
                "you should",
            ]),
            note_keyword: "note".to_string(),
            procedural_triggers: to_strings(&["choose ", "select ", "navigate "]),
            expected_sections: vec![
                ExpectedSection::new("prerequisites", "Prerequisites section"),
                ExpectedSection::new("procedure", "Procedure section"),
            ],
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl CompareConfig {
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder {
            inner: CompareConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_empty(&self.action_verbs, "action_verbs")?;
        ensure_non_empty(&self.section_keywords, "section_keywords")?;
        ensure_non_empty(&self.prerequisite_prefixes, "prerequisite_prefixes")?;
        if self.note_keyword.is_empty() {
            return Err(ConfigError::EmptyRuleTable {
                field: "note_keyword",
            });
        }

        for (field, table) in [
            ("action_verbs", &self.action_verbs),
            ("section_keywords", &self.section_keywords),
            ("section_prefixes", &self.section_prefixes),
            ("prerequisite_prefixes", &self.prerequisite_prefixes),
            ("procedural_triggers", &self.procedural_triggers),
        ] {
            for entry in table {
                ensure_lowercase(entry, field)?;
            }
        }
        ensure_lowercase(&self.note_keyword, "note_keyword")?;
        for section in &self.expected_sections {
            ensure_lowercase(&section.keyword, "expected_sections")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must contain at least one entry")]
    EmptyRuleTable { field: &'static str },
    #[error("{field} entry '{value}' must be lowercase (rules match lowercased text)")]
    NotLowercase { field: &'static str, value: String },
}

fn ensure_non_empty(table: &[String], field: &'static str) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::EmptyRuleTable { field });
    }
    Ok(())
}

fn ensure_lowercase(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.chars().any(|c| c.is_uppercase()) {
        return Err(ConfigError::NotLowercase {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CompareConfigBuilder {
    inner: CompareConfig,
}

impl Default for CompareConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareConfigBuilder {
    pub fn new() -> Self {
        CompareConfig::builder()
    }

    pub fn bullet_chars(mut self, value: Vec<char>) -> Self {
        self.inner.bullet_chars = value;
        self
    }

    pub fn arrow_chars(mut self, value: Vec<char>) -> Self {
        self.inner.arrow_chars = value;
        self
    }

    pub fn action_verbs(mut self, value: Vec<String>) -> Self {
        self.inner.action_verbs = value;
        self
    }

    pub fn section_keywords(mut self, value: Vec<String>) -> Self {
        self.inner.section_keywords = value;
        self
    }

    pub fn section_prefixes(mut self, value: Vec<String>) -> Self {
        self.inner.section_prefixes = value;
        self
    }

    pub fn prerequisite_prefixes(mut self, value: Vec<String>) -> Self {
        self.inner.prerequisite_prefixes = value;
        self
    }

    pub fn note_keyword(mut self, value: impl Into<String>) -> Self {
        self.inner.note_keyword = value.into();
        self
    }

    pub fn procedural_triggers(mut self, value: Vec<String>) -> Self {
        self.inner.procedural_triggers = value;
        self
    }

    pub fn expected_sections(mut self, value: Vec<ExpectedSection>) -> Self {
        self.inner.expected_sections = value;
        self
    }

    pub fn build(self) -> Result<CompareConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        CompareConfig::default().validate().expect("default config");
    }

    #[test]
    fn default_tables_match_rule_set() {
        let cfg = CompareConfig::default();
        assert!(cfg.action_verbs.iter().any(|v| v == "choose"));
        assert!(cfg.action_verbs.iter().any(|v| v == "refresh"));
        assert_eq!(cfg.section_keywords.len(), 9);
        assert_eq!(cfg.prerequisite_prefixes.len(), 6);
        assert_eq!(cfg.expected_sections.len(), 2);
        assert_eq!(cfg.procedural_triggers.len(), 3);
    }

    #[test]
    fn serde_roundtrip_preserves_defaults() {
        let cfg = CompareConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize default config");
        let parsed: CompareConfig =
            serde_json::from_str(&json).expect("deserialize default config");
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_json_fills_remaining_fields_from_defaults() {
        let json = r#"{ "note_keyword": "hint" }"#;
        let cfg: CompareConfig = serde_json::from_str(json).expect("deserialize partial");
        assert_eq!(cfg.note_keyword, "hint");
        assert_eq!(cfg.action_verbs, CompareConfig::default().action_verbs);
    }

    #[test]
    fn builder_rejects_empty_action_verbs() {
        let err = CompareConfig::builder()
            .action_verbs(Vec::new())
            .build()
            .expect_err("builder should reject empty verb table");
        assert!(matches!(
            err,
            ConfigError::EmptyRuleTable {
                field: "action_verbs"
            }
        ));
    }

    #[test]
    fn builder_rejects_uppercase_rule_entries() {
        let err = CompareConfig::builder()
            .section_keywords(vec!["Procedure".to_string()])
            .build()
            .expect_err("builder should reject uppercase keyword");
        assert!(matches!(err, ConfigError::NotLowercase { .. }));
    }
}
