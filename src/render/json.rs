use std::io::Write;

use anyhow::{Context, Result};

use crate::collect::DiskReport;

/// Serialize the report list as an indented JSON array, trailing newline
/// included. `free_pct` goes out at full double precision.
pub fn render_json(out: &mut impl Write, reports: &[DiskReport]) -> Result<()> {
    let data = serde_json::to_string_pretty(reports).context("encoding disk reports as JSON")?;
    writeln!(out, "{data}")?;
    Ok(())
}
