mod collect;
mod provider;
mod render;

use clap::Parser;
use colored::Colorize;
use std::io;
use std::process;

use crate::provider::SysinfoProvider;
use crate::render::OutputFormat;

/// Disk usage snapshot for the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format: text, json or html (anything else means text)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() {
    let cli = Cli::parse();

    let reports = match collect::collect(&SysinfoProvider::new()) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    let rendered = match OutputFormat::from_arg(&cli.format) {
        OutputFormat::Json => render::render_json(&mut stdout, &reports),
        OutputFormat::Html => render::render_html(&mut stdout, &reports),
        OutputFormat::Text => render::render_text(&mut stdout, &reports),
    };

    if let Err(e) = rendered {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}
