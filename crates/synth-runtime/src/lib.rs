//! # synth-runtime
//!
//! Runtime orchestration for the expressive TTS pipeline.
//!
//! This crate provides:
//! - The synthesis sequencer: a linear state machine over parsed segments
//!   that drives the `Synthesizer` backend and splices in silences
//! - Audio assembly (ordered concatenation of per-chunk buffers)
//! - A service context owning the loaded synthesizer capability with a
//!   lock-free status enum
//! - A bounded FIFO request queue with deadlines and cancellation
//! - Structured logging setup

pub mod assembler;
pub mod context;
pub mod logging;
pub mod mock;
pub mod queue;
pub mod sequencer;
pub mod silence;

pub use assembler::concatenate;
pub use context::{ServiceContext, SynthStatus};
pub use mock::MockSynthesizer;
pub use queue::{QueuedRequest, RequestQueue};
pub use sequencer::{RenderControl, SpeechPipeline};
pub use silence::silence;
