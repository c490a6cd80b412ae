use std::io::Write;

use anyhow::Result;

use crate::collect::DiskReport;

/// Escape a value for embedding in HTML text or attribute position. Device
/// and mountpoint strings come from the OS, but a hostile mount label must
/// not break out of its table cell.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a static HTML document with one table row per disk. Sizes to two
/// decimals, free percentage rounded to a whole number.
pub fn render_html(out: &mut impl Write, reports: &[DiskReport]) -> Result<()> {
    let mut rows = String::new();
    for report in reports {
        rows.push_str(&format!(
            "    <tr>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{:.2}</td>\n      <td>{:.2}</td>\n      <td>{:.0}%</td>\n    </tr>\n",
            escape(&report.device),
            escape(&report.mountpoint),
            report.total_gb,
            report.free_gb,
            report.free_pct,
        ));
    }

    writeln!(
        out,
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Disk Usage</title>
  <style>
    table {{ border-collapse: collapse; width: 60%; }}
    th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
    th {{ background-color: #f2f2f2; }}
  </style>
</head>
<body>
  <h2>Disk Usage Summary</h2>
  <table>
    <tr>
      <th>Device</th>
      <th>Mountpoint</th>
      <th>Total (GB)</th>
      <th>Free (GB)</th>
      <th>Free (%)</th>
    </tr>
{rows}  </table>
</body>
</html>"#
    )?;
    Ok(())
}
