//! Trait definitions for pipeline collaborators.

use crate::error::TtsResult;
use crate::types::{AudioBuffer, SynthesisSettings, VoiceRef};

/// Speech synthesis backend.
///
/// Implementations convert a bounded text chunk into an audio buffer at the
/// backend's fixed native sample rate. The pipeline never manages model
/// loading or device placement; it only sequences calls.
///
/// Within one request, calls are strictly sequential: order determines both
/// the audio track and which settings apply. Implementations should be
/// treated as a constrained shared resource with at most one call in flight
/// per execution context unless they document otherwise.
pub trait Synthesizer: Send + Sync {
    /// Synthesize one text chunk.
    ///
    /// # Arguments
    /// * `text` - Chunk text, already sanitized and bounded in size
    /// * `voice` - Voice reference for conditioning
    /// * `settings` - Active exaggeration/temperature at this point of the
    ///   document
    ///
    /// # Returns
    /// An audio buffer at [`Self::sample_rate`]. May block for seconds.
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceRef,
        settings: &SynthesisSettings,
    ) -> TtsResult<AudioBuffer>;

    /// The backend's fixed output sample rate in Hz.
    ///
    /// Silence buffers spliced between chunks are generated at this rate.
    fn sample_rate(&self) -> u32;
}
