//! Core data types for the TTS pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of inline control marker, with its parsed value.
///
/// Markers are part of the text-input wire contract: `<p=N>` pauses for N
/// milliseconds, `<e=N>` overrides exaggeration, `<t=N>` overrides
/// temperature. They are zero-width in the rendered transcript.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Pause for the given duration in milliseconds.
    Pause { ms: u64 },
    /// Override the exaggeration setting for subsequent text.
    Exaggeration { value: f32 },
    /// Override the temperature setting for subsequent text.
    Temperature { value: f32 },
}

/// An inline control marker together with the source span it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// The typed directive.
    pub kind: MarkerKind,
    /// Start byte offset in the scanned text.
    pub start: usize,
    /// End byte offset in the scanned text (exclusive).
    pub end: usize,
}

impl Marker {
    /// Create a marker covering the given byte span.
    pub fn new(kind: MarkerKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// An ordered unit of parsed input: literal text or a settings delta.
///
/// Segments preserve strict left-to-right document order. Empty text
/// segments are never materialized by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A non-empty, trimmed run of literal text.
    Text(String),
    /// A control marker consumed from the text.
    Marker(Marker),
}

impl Segment {
    /// Get the text content if this is a text segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(s) => Some(s),
            Segment::Marker(_) => None,
        }
    }

    /// Check if this segment is a marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, Segment::Marker(_))
    }
}

/// Mutable synthesis settings carried across segments of one request.
///
/// Seeded from request-level defaults, then updated field-independently by
/// markers: a pause marker never resets exaggeration or temperature, and
/// vice versa. Last write wins per field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisSettings {
    /// Expressiveness control, passed through to the backend unmodified.
    pub exaggeration: f32,
    /// Sampling temperature, passed through to the backend unmodified.
    pub temperature: f32,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            exaggeration: 0.5,
            temperature: 0.5,
        }
    }
}

impl SynthesisSettings {
    /// Create settings with explicit values.
    pub fn new(exaggeration: f32, temperature: f32) -> Self {
        Self {
            exaggeration,
            temperature,
        }
    }

    /// Apply a marker's settings delta in place.
    ///
    /// Pause markers carry no settings change and leave both fields
    /// untouched.
    pub fn apply(&mut self, kind: &MarkerKind) {
        match kind {
            MarkerKind::Exaggeration { value } => self.exaggeration = *value,
            MarkerKind::Temperature { value } => self.temperature = *value,
            MarkerKind::Pause { .. } => {}
        }
    }
}

/// A buffer of decoded audio: opaque sample data plus its sample rate.
///
/// Produced either by the synthesizer backend (per chunk) or by the
/// silence generator (per pause marker); owned by the sequencer until
/// consumed by the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// PCM samples (f32, mono).
    pub pcm: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer.
    pub fn new(pcm: Vec<f32>, sample_rate: u32) -> Self {
        Self { pcm, sample_rate }
    }

    /// Get the number of samples in this buffer.
    pub fn num_samples(&self) -> usize {
        self.pcm.len()
    }

    /// Get the duration of this buffer in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.pcm.len() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// Check if the buffer contains no samples.
    pub fn is_empty(&self) -> bool {
        self.pcm.is_empty()
    }
}

/// Voice reference for conditioning the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceRef {
    /// A named voice preset known to the backend.
    Preset(String),
    /// An opaque voice sample (e.g. decoded reference audio bytes).
    Sample(Vec<u8>),
}

impl Default for VoiceRef {
    fn default() -> Self {
        Self::Preset("default".to_string())
    }
}

impl VoiceRef {
    /// Create a preset voice reference.
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    /// Create a voice reference from an opaque sample.
    pub fn sample(bytes: Vec<u8>) -> Self {
        Self::Sample(bytes)
    }
}

/// A synthesis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Raw UTF-8 text, possibly containing inline markers.
    pub text: String,
    /// Voice reference for conditioning.
    pub voice: VoiceRef,
    /// Default exaggeration, used until a marker overrides it.
    pub exaggeration: f32,
    /// Default temperature, used until a marker overrides it.
    pub temperature: f32,
    /// Maximum end-to-end latency in milliseconds.
    pub max_latency_ms: Option<u64>,
}

impl SynthesisRequest {
    /// Create a new synthesis request with default settings.
    pub fn new(text: impl Into<String>) -> Self {
        let defaults = SynthesisSettings::default();
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            voice: VoiceRef::default(),
            exaggeration: defaults.exaggeration,
            temperature: defaults.temperature,
            max_latency_ms: None,
        }
    }

    /// Set the voice reference.
    pub fn with_voice(mut self, voice: VoiceRef) -> Self {
        self.voice = voice;
        self
    }

    /// Set the default exaggeration.
    pub fn with_exaggeration(mut self, exaggeration: f32) -> Self {
        self.exaggeration = exaggeration;
        self
    }

    /// Set the default temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the latency deadline.
    pub fn with_max_latency_ms(mut self, ms: u64) -> Self {
        self.max_latency_ms = Some(ms);
        self
    }

    /// Build the initial settings state for this request.
    pub fn initial_settings(&self) -> SynthesisSettings {
        SynthesisSettings::new(self.exaggeration, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_apply_is_field_independent() {
        let mut settings = SynthesisSettings::default();

        settings.apply(&MarkerKind::Exaggeration { value: 0.8 });
        assert!((settings.exaggeration - 0.8).abs() < f32::EPSILON);
        assert!((settings.temperature - 0.5).abs() < f32::EPSILON);

        settings.apply(&MarkerKind::Temperature { value: 0.3 });
        assert!((settings.exaggeration - 0.8).abs() < f32::EPSILON);
        assert!((settings.temperature - 0.3).abs() < f32::EPSILON);

        // A pause carries no settings change.
        settings.apply(&MarkerKind::Pause { ms: 500 });
        assert!((settings.exaggeration - 0.8).abs() < f32::EPSILON);
        assert!((settings.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_audio_buffer_duration() {
        let buffer = AudioBuffer::new(vec![0.0; 24000], 24000);
        assert_eq!(buffer.num_samples(), 24000);
        assert!((buffer.duration_ms() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_voice_ref_default() {
        assert_eq!(VoiceRef::default(), VoiceRef::preset("default"));
    }

    #[test]
    fn test_request_builder() {
        let req = SynthesisRequest::new("Hello")
            .with_voice(VoiceRef::preset("narrator"))
            .with_exaggeration(0.7)
            .with_temperature(0.4)
            .with_max_latency_ms(30000);

        assert_eq!(req.text, "Hello");
        assert_eq!(req.voice, VoiceRef::preset("narrator"));
        assert_eq!(req.max_latency_ms, Some(30000));

        let settings = req.initial_settings();
        assert!((settings.exaggeration - 0.7).abs() < f32::EPSILON);
        assert!((settings.temperature - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_request_defaults() {
        let req = SynthesisRequest::new("Test");
        assert!((req.exaggeration - 0.5).abs() < f32::EPSILON);
        assert!((req.temperature - 0.5).abs() < f32::EPSILON);
        assert!(req.max_latency_ms.is_none());
    }

    #[test]
    fn test_segment_accessors() {
        let text = Segment::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(!text.is_marker());

        let marker = Segment::Marker(Marker::new(MarkerKind::Pause { ms: 100 }, 0, 8));
        assert!(marker.is_marker());
        assert!(marker.as_text().is_none());
    }
}
