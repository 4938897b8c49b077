// Output renderers. Every renderer consumes the same validated `Resume` and
// is side-effect free: the caller decides where the text goes.
// Markdown, HTML and typeset output would plug in here as further
// `Renderer` implementations.

pub mod json;
pub mod text;
pub mod walk;

use std::str::FromStr;

use crate::errors::ResumeError;
use crate::models::Resume;

pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Turns a validated résumé into a complete document in one notation.
pub trait Renderer {
    fn render(&self, resume: &Resume) -> Result<String, ResumeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ResumeError::UnknownFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
