//! The synthesis sequencer: a linear state machine over parsed segments.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use text_processor::{parse, split};
use tts_core::{
    AudioBuffer, MarkerKind, PipelineConfig, Segment, SynthesisRequest, Synthesizer, TtsError,
    TtsResult,
};

use crate::assembler;
use crate::silence;

/// Cooperative cancellation and deadline control for one render.
///
/// The sequencer checks the control between segments and between chunks, so
/// a long multi-chunk request stops at the next boundary rather than
/// mid-synthesis. Clones share the same cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct RenderControl {
    cancelled: Arc<AtomicBool>,
    deadline: Option<(Instant, u64)>,
}

impl RenderControl {
    /// Create a control with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control that times out after `timeout_ms` milliseconds.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some((
                Instant::now() + std::time::Duration::from_millis(timeout_ms),
                timeout_ms,
            )),
        }
    }

    /// Request cancellation. Takes effect at the next chunk boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check whether rendering may proceed.
    pub fn check(&self) -> TtsResult<()> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(TtsError::Cancelled);
        }
        if let Some((deadline, ms)) = self.deadline {
            if Instant::now() > deadline {
                return Err(TtsError::Timeout { ms });
            }
        }
        Ok(())
    }
}

/// The text-to-audio pipeline: parsing, chunking, sequencing, assembly.
///
/// Stateless across requests; each render owns its own settings state and
/// buffer list. Chunk synthesis within one request is strictly sequential
/// because order determines both the audio track and which settings apply.
pub struct SpeechPipeline {
    synthesizer: Arc<dyn Synthesizer>,
    config: PipelineConfig,
}

impl std::fmt::Debug for SpeechPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechPipeline")
            .field("config", &self.config)
            .field("sample_rate", &self.synthesizer.sample_rate())
            .finish()
    }
}

impl SpeechPipeline {
    /// Create a pipeline over the given synthesizer backend.
    pub fn new(synthesizer: Arc<dyn Synthesizer>, config: PipelineConfig) -> Self {
        Self {
            synthesizer,
            config,
        }
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Create a request seeded with this pipeline's default settings.
    pub fn new_request(&self, text: impl Into<String>) -> SynthesisRequest {
        SynthesisRequest::new(text)
            .with_exaggeration(self.config.default_exaggeration)
            .with_temperature(self.config.default_temperature)
    }

    /// Render a request into one assembled audio buffer.
    ///
    /// A request carrying `max_latency_ms` is rendered under a matching
    /// deadline and times out at the next chunk boundary past it.
    #[instrument(skip(self, request), fields(request_id = %request.id, text_len = request.text.len()))]
    pub fn render(&self, request: &SynthesisRequest) -> TtsResult<AudioBuffer> {
        let control = match request.max_latency_ms {
            Some(ms) => RenderControl::with_timeout_ms(ms),
            None => RenderControl::new(),
        };
        self.render_with_control(request, &control)
    }

    /// Render a request under a cancellation/deadline control.
    ///
    /// Any synthesizer failure aborts the whole request: audio already
    /// produced is discarded and the error propagates. On every exit path,
    /// success or not, transient buffers are dropped with the call frame;
    /// nothing outlives the request.
    pub fn render_with_control(
        &self,
        request: &SynthesisRequest,
        control: &RenderControl,
    ) -> TtsResult<AudioBuffer> {
        let started = Instant::now();

        // Fail fast, before any synthesis call: a request with no literal
        // text to speak is a caller error even if it carries markers.
        let segments = parse(&request.text);
        if segments.is_empty() {
            return Err(TtsError::invalid_input(
                "no segments after parsing: text is empty or whitespace",
            ));
        }
        if !segments.iter().any(|s| matches!(s, Segment::Text(_))) {
            return Err(TtsError::invalid_input(
                "text contains only markers, nothing to synthesize",
            ));
        }

        let mut settings = request.initial_settings();
        let sample_rate = self.synthesizer.sample_rate();
        let mut buffers: Vec<AudioBuffer> = Vec::new();

        for segment in &segments {
            control.check()?;

            match segment {
                Segment::Text(text) => {
                    let chunks = split(text, self.config.max_chunk_words);
                    debug!(chunks = chunks.len(), "Split text segment");

                    for chunk in &chunks {
                        control.check()?;
                        debug!(
                            chunk_len = chunk.len(),
                            exaggeration = settings.exaggeration,
                            temperature = settings.temperature,
                            "Synthesizing chunk"
                        );
                        let audio =
                            self.synthesizer
                                .synthesize(chunk, &request.voice, &settings)?;
                        buffers.push(audio);
                    }
                }
                Segment::Marker(marker) => {
                    // Settings update and pause generation belonging to one
                    // marker happen together, before the next segment.
                    settings.apply(&marker.kind);
                    if let MarkerKind::Pause { ms } = marker.kind {
                        debug!(pause_ms = ms, "Inserting pause");
                        buffers.push(silence::silence(ms, sample_rate));
                    }
                }
            }
        }

        if buffers.is_empty() {
            return Err(TtsError::invalid_input(
                "no audio produced: text segments were empty after sanitization",
            ));
        }

        let audio = assembler::concatenate(&buffers)?;

        info!(
            buffers = buffers.len(),
            samples = audio.num_samples(),
            duration_ms = audio.duration_ms(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Render complete"
        );

        Ok(audio)
    }
}
