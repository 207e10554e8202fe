//! Expressive TTS pipeline command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use tts_core::RuntimeConfig;

mod commands;

/// Expressive TTS pipeline CLI
#[derive(Debug, Parser)]
#[command(name = "tts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON); command-line flags override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl LogFormatArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render text to an audio plan using the offline backend
    Render {
        /// Input text or file path (use @file.txt for file input)
        input: String,

        /// Default exaggeration, until a marker overrides it
        #[arg(short, long)]
        exaggeration: Option<f32>,

        /// Default temperature, until a marker overrides it
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Word budget per synthesis chunk
        #[arg(long)]
        max_chunk_words: Option<usize>,

        /// Abort if rendering exceeds this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Sanitize text without synthesis (dry run)
    Sanitize {
        /// Input text
        input: String,
    },

    /// Parse inline markers (dry run)
    Parse {
        /// Input text
        input: String,

        /// Emit segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split text into synthesis chunks (dry run)
    Chunk {
        /// Input text
        input: String,

        /// Word budget per chunk
        #[arg(long)]
        max_words: Option<usize>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<RuntimeConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))
        }
        None => Ok(RuntimeConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    config.logging.level = cli.log_level.clone();
    config.logging.format = cli.log_format.as_str().to_string();
    synth_runtime::logging::init_logging_from_config(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting TTS CLI");

    match cli.command {
        Commands::Render {
            input,
            exaggeration,
            temperature,
            max_chunk_words,
            timeout_ms,
        } => {
            if let Some(e) = exaggeration {
                config.pipeline.default_exaggeration = e;
            }
            if let Some(t) = temperature {
                config.pipeline.default_temperature = t;
            }
            if let Some(w) = max_chunk_words {
                config.pipeline.max_chunk_words = w;
            }

            let options = commands::render::RenderOptions {
                input,
                config: config.pipeline,
                timeout_ms,
            };
            commands::render::run(options).context("render failed")?;
        }
        Commands::Sanitize { input } => {
            commands::sanitize::run(&input).context("sanitization failed")?;
        }
        Commands::Parse { input, json } => {
            commands::parse::run(&input, json).context("parsing failed")?;
        }
        Commands::Chunk { input, max_words } => {
            let max_words = max_words.unwrap_or(config.pipeline.max_chunk_words);
            commands::chunk::run(&input, max_words).context("chunking failed")?;
        }
    }

    Ok(())
}
