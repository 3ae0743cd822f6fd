use anyhow::Result;
use clap::Parser;
use glyphmask::{MaskError, Masker};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// glyphmask - homoglyph text masking
///
/// Replaces characters in a string with visually similar Unicode
/// look-alikes. The output reads the same but evades naive string
/// matching.
#[derive(Parser)]
#[command(name = "glyphmask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The text to mask
    text: OsString,

    /// Probability of replacing each character
    #[arg(short, long, default_value_t = 0.5)]
    probability: f64,

    /// Write the masked text to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let text = cli.text.into_string().map_err(|_| MaskError::InvalidText)?;

    let masked = Masker::new().mask(&text, cli.probability)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &masked).map_err(|source| MaskError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            tracing::info!("masked text written to {}", path.display());
        }
        None => println!("{}", masked),
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}
