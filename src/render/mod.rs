pub mod html;
pub mod json;
pub mod text;

pub use html::render_html;
pub use json::render_json;
pub use text::render_text;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    /// Unrecognized values fall back to text rather than erroring.
    pub fn from_arg(arg: &str) -> Self {
        match arg.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "html" => OutputFormat::Html,
            _ => OutputFormat::Text,
        }
    }
}
