//! Mock synthesizer for tests and offline pipeline exercise.

use parking_lot::Mutex;

use tts_core::{AudioBuffer, SynthesisSettings, Synthesizer, TtsError, TtsResult, VoiceRef};

/// A recorded synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Chunk text as received.
    pub text: String,
    /// Settings active for the chunk.
    pub settings: SynthesisSettings,
    /// Voice reference as received.
    pub voice: VoiceRef,
}

/// Deterministic synthesizer that needs no model weights.
///
/// Produces `samples_per_word` samples per whitespace-delimited word and
/// records every call with the settings it saw, so tests can assert call
/// order and settings persistence. Optionally fails on chunks containing a
/// trigger substring, to exercise abort paths.
#[derive(Debug)]
pub struct MockSynthesizer {
    sample_rate: u32,
    samples_per_word: usize,
    fail_on: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSynthesizer {
    /// Create a mock with the given output sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples_per_word: 100,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail any chunk whose text contains `trigger`.
    pub fn failing_on(mut self, trigger: impl Into<String>) -> Self {
        self.fail_on = Some(trigger.into());
        self
    }

    /// Set how many samples each word expands to.
    pub fn with_samples_per_word(mut self, samples_per_word: usize) -> Self {
        self.samples_per_word = samples_per_word;
        self
    }

    /// Get all calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl Synthesizer for MockSynthesizer {
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceRef,
        settings: &SynthesisSettings,
    ) -> TtsResult<AudioBuffer> {
        if let Some(trigger) = &self.fail_on {
            if text.contains(trigger.as_str()) {
                return Err(TtsError::synthesis(format!(
                    "mock failure triggered by {trigger:?}"
                )));
            }
        }

        self.calls.lock().push(RecordedCall {
            text: text.to_string(),
            settings: *settings,
            voice: voice.clone(),
        });

        let words = text.split_whitespace().count();
        // Non-zero constant so silence and speech are distinguishable.
        let pcm = vec![0.25f32; words * self.samples_per_word];
        Ok(AudioBuffer::new(pcm, self.sample_rate))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
