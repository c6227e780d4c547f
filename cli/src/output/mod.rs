pub mod json;
pub mod text;

use docdiff::{Category, Severity};

pub fn severity_str(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "HIGH",
        Severity::Medium => "MEDIUM",
        Severity::Low => "LOW",
    }
}

pub fn category_str(category: Category) -> &'static str {
    match category {
        Category::SectionHeader => "section_header",
        Category::Instruction => "instruction",
        Category::Prerequisite => "prerequisite",
        Category::Note => "note",
        Category::Content => "content",
        Category::Noise => "noise",
    }
}
