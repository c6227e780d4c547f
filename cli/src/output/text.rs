use crate::commands::diff::Verbosity;
use crate::output::{category_str, severity_str};
use anyhow::Result;
use docdiff::{ChangeEntry, ComparisonResult};
use std::io::Write;

pub fn write_text_report<W: Write>(
    w: &mut W,
    result: &ComparisonResult,
    old_path: &str,
    new_path: &str,
    verbosity: Verbosity,
) -> Result<()> {
    if result.is_empty() {
        writeln!(w, "No semantic changes found.")?;
        return Ok(());
    }

    if verbosity != Verbosity::Quiet {
        if !result.removed.is_empty() {
            writeln!(w, "Removed ({}):", result.removed.len())?;
            for entry in &result.removed {
                write_entry(w, '-', entry, verbosity)?;
            }
            writeln!(w)?;
        }

        if !result.added.is_empty() {
            writeln!(w, "Added ({}):", result.added.len())?;
            for entry in &result.added {
                write_entry(w, '+', entry, verbosity)?;
            }
            writeln!(w)?;
        }

        if !result.structural_warnings.is_empty() {
            writeln!(w, "Structural warnings ({}):", result.structural_warnings.len())?;
            for warning in &result.structural_warnings {
                writeln!(w, "  ! [{}] {}", severity_str(warning.severity), warning.message)?;
            }
            writeln!(w)?;
        }
    }

    write_summary(w, result, old_path, new_path)?;
    Ok(())
}

fn write_entry<W: Write>(
    w: &mut W,
    sign: char,
    entry: &ChangeEntry,
    verbosity: Verbosity,
) -> Result<()> {
    if verbosity == Verbosity::Verbose {
        writeln!(
            w,
            "  {} [{}] ({}) {}",
            sign,
            severity_str(entry.severity),
            category_str(entry.category),
            entry.text
        )?;
    } else {
        writeln!(w, "  {} [{}] {}", sign, severity_str(entry.severity), entry.text)?;
    }
    Ok(())
}

fn write_summary<W: Write>(
    w: &mut W,
    result: &ComparisonResult,
    old_path: &str,
    new_path: &str,
) -> Result<()> {
    writeln!(
        w,
        "{} -> {}: {} added, {} removed, {} structural warning(s){}",
        old_path,
        new_path,
        result.added.len(),
        result.removed.len(),
        result.structural_warnings.len(),
        match result.max_severity {
            Some(severity) => format!(", max severity {}", severity_str(severity)),
            None => String::new(),
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdiff::compare;

    fn render(old: &str, new: &str, verbosity: Verbosity) -> String {
        let result = compare(old, new);
        let mut buf = Vec::new();
        write_text_report(&mut buf, &result, "old.txt", "new.txt", verbosity).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn silent_comparison_prints_no_changes() {
        let out = render("Choose Save.\nPrerequisites\nProcedure", "Choose Save.\nPrerequisites\nProcedure", Verbosity::Normal);
        assert_eq!(out, "No semantic changes found.\n");
    }

    #[test]
    fn normal_report_lists_entries_with_signs_and_severity() {
        let out = render("Click Delete.", "Note: the button moved.", Verbosity::Normal);
        assert!(out.contains("Removed (1):"));
        assert!(out.contains("  - [HIGH] Click Delete."));
        assert!(out.contains("Added (1):"));
        assert!(out.contains("  + [MEDIUM] Note: the button moved."));
        assert!(out.contains("max severity HIGH"));
    }

    #[test]
    fn quiet_report_is_summary_only() {
        let out = render("Click Delete.", "Note: the button moved.", Verbosity::Quiet);
        assert!(!out.contains("Removed"));
        assert!(out.starts_with("old.txt -> new.txt: 1 added, 1 removed"));
    }

    #[test]
    fn verbose_report_includes_categories() {
        let out = render("Click Delete.", "", Verbosity::Verbose);
        assert!(out.contains("(instruction)"));
    }
}
