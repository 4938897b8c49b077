mod config;
mod errors;
mod loader;
mod models;
mod parser;
mod render;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::load_resume;
use crate::render::Renderer;

fn main() -> Result<()> {
    // Load configuration first; an invalid RESUME_FORMAT aborts here.
    let config = Config::from_env()?.with_input_arg(std::env::args().nth(1));

    // Structured logging goes to stderr so stdout carries only the rendering.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Rendering {} as {:?}",
        config.input.display(),
        config.format
    );

    run(
        &config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Loads, validates and renders `config.input`.
///
/// Diagnostics are written to `err` before any fatal error is returned.
fn run(config: &Config, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let mut diagnostics = Vec::new();
    let loaded = load_resume(&config.input, &mut diagnostics);

    for diagnostic in &diagnostics {
        writeln!(err, "{diagnostic}")?;
    }

    let resume =
        loaded.with_context(|| format!("Failed to render {}", config.input.display()))?;

    let rendered = config
        .format
        .renderer()
        .render(&resume)
        .context("Failed to format output")?;

    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(())
}
