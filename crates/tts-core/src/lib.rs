//! # tts-core
//!
//! Core types, traits, and error definitions for the expressive TTS
//! pipeline.
//!
//! This crate provides the foundational abstractions used across all other
//! crates in the workspace, including:
//!
//! - Common data types (`Segment`, `Marker`, `SynthesisSettings`,
//!   `AudioBuffer`, `SynthesisRequest`)
//! - The `Synthesizer` trait implemented by speech backends
//! - Unified error handling via `TtsError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{LoggingConfig, PipelineConfig, QueueConfig, RuntimeConfig};
pub use error::{TtsError, TtsResult};
pub use traits::Synthesizer;
pub use types::{
    AudioBuffer, Marker, MarkerKind, Segment, SynthesisRequest, SynthesisSettings, VoiceRef,
};
