//! Configuration structures for the TTS pipeline.

use serde::{Deserialize, Serialize};

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum whitespace-delimited words per synthesis chunk.
    ///
    /// Word count is a calibrated proxy for the backend tokenizer's true
    /// output length: English words expand to roughly 1-3 subword tokens,
    /// so 400 words stays safely under a 1000-token backend ceiling.
    #[serde(default = "default_max_chunk_words")]
    pub max_chunk_words: usize,

    /// Default exaggeration when the request does not specify one.
    #[serde(default = "default_exaggeration")]
    pub default_exaggeration: f32,

    /// Default temperature when the request does not specify one.
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
}

fn default_max_chunk_words() -> usize {
    400
}

fn default_exaggeration() -> f32 {
    0.5
}

fn default_temperature() -> f32 {
    0.5
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chunk_words: default_max_chunk_words(),
            default_exaggeration: default_exaggeration(),
            default_temperature: default_temperature(),
        }
    }
}

/// Queue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum queued requests before new submissions are rejected.
    #[serde(default = "default_max_queue_size")]
    pub max_queue_size: usize,
    /// Default request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_max_queue_size() -> usize {
    64
}

fn default_request_timeout_ms() -> u64 {
    120_000
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_queue_size: default_max_queue_size(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json or text).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Pipeline configuration.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Queue configuration.
    #[serde(default)]
    pub queue: QueueConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}
