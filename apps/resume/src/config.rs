use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::OutputFormat;

pub const DEFAULT_INPUT: &str = "resume.xml";

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; with none set the tool reads `resume.xml`
/// and prints plain text.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let format = match lookup("RESUME_FORMAT") {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .context("RESUME_FORMAT must be 'text' or 'json'")?,
            None => OutputFormat::default(),
        };

        Ok(Config {
            input: lookup("RESUME_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            format,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "warn".to_string()),
        })
    }

    /// A positional path on the command line overrides `RESUME_FILE`.
    pub fn with_input_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.input = PathBuf::from(path);
        }
        self
    }
}
