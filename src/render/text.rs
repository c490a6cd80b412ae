use std::io::Write;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::collect::DiskReport;

/// Styling roles used by the text report. Actual escape sequences come from
/// `colored`, which also handles capability detection (tty, NO_COLOR), so
/// output degrades to plain text when piped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Banner,
    Heading,
    FreeOk,
    FreeAlert,
}

fn stylize(style: Style, s: &str) -> ColoredString {
    match style {
        Style::Banner => s.cyan().bold(),
        Style::Heading => s.green().bold(),
        Style::FreeOk => s.bright_green(),
        Style::FreeAlert => s.bright_red(),
    }
}

/// Free space under 10% gets the alert style.
pub fn free_style(free_pct: f64) -> Style {
    if free_pct < 10.0 {
        Style::FreeAlert
    } else {
        Style::FreeOk
    }
}

pub fn render_text(out: &mut impl Write, reports: &[DiskReport]) -> Result<()> {
    writeln!(out, "{}", stylize(Style::Banner, "\n📦 Disk Usage Summary\n"))?;

    for report in reports {
        writeln!(
            out,
            "{}",
            stylize(Style::Heading, &format!("🔹 Device: {}", report.device))
        )?;
        writeln!(out, "   Mountpoint: {}", report.mountpoint)?;
        writeln!(
            out,
            "   Total:      {}",
            stylize(Style::Heading, &format!("{:.2} GB", report.total_gb))
        )?;
        let free = format!("{:.2} GB ({:.2}%)", report.free_gb, report.free_pct);
        writeln!(
            out,
            "   Free:       {}",
            stylize(free_style(report.free_pct), &free)
        )?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn report(device: &str, free_pct: f64) -> DiskReport {
        DiskReport {
            device: device.to_string(),
            mountpoint: "/".to_string(),
            total_gb: 100.0,
            free_gb: free_pct,
            free_pct,
        }
    }

    #[test]
    fn test_alert_style_strictly_below_ten_percent() {
        assert_eq!(free_style(9.999), Style::FreeAlert);
        assert_eq!(free_style(0.0), Style::FreeAlert);
        assert_eq!(free_style(10.0), Style::FreeOk);
        assert_eq!(free_style(100.0), Style::FreeOk);
    }

    #[test]
    #[serial]
    fn test_plain_output_layout() {
        colored::control::set_override(false);
        let reports = vec![DiskReport {
            device: "/dev/sda".to_string(),
            mountpoint: "/".to_string(),
            total_gb: 100.0,
            free_gb: 20.0,
            free_pct: 20.0,
        }];
        let mut buf = Vec::new();
        let result = render_text(&mut buf, &reports);
        colored::control::unset_override();
        result.unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("📦 Disk Usage Summary"));
        assert!(text.contains("🔹 Device: /dev/sda"));
        assert!(text.contains("   Mountpoint: /"));
        assert!(text.contains("   Total:      100.00 GB"));
        assert!(text.contains("   Free:       20.00 GB (20.00%)"));
    }

    #[test]
    #[serial]
    fn test_zero_records_render_banner_only() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let result = render_text(&mut buf, &[]);
        colored::control::unset_override();
        result.unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("📦 Disk Usage Summary"));
        assert!(!text.contains("Device:"));
    }

    #[test]
    #[serial]
    fn test_low_free_space_uses_alert_color() {
        colored::control::set_override(true);
        let mut buf = Vec::new();
        let result = render_text(&mut buf, &[report("/dev/sda", 9.5)]);
        colored::control::unset_override();
        result.unwrap();

        let text = String::from_utf8(buf).unwrap();
        // bright red foreground
        assert!(text.contains("\x1b[91m"));
    }
}
