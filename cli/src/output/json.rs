use anyhow::Result;
use docdiff::ComparisonResult;
use std::io::Write;

pub fn write_json_report<W: Write>(w: &mut W, result: &ComparisonResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)?;
    Ok(())
}
