//! Render command implementation.
//!
//! Runs the full pipeline over the deterministic offline backend, so the
//! text path can be exercised without model weights.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{debug, info};

use synth_runtime::{MockSynthesizer, RenderControl, SpeechPipeline};
use tts_core::{PipelineConfig, Synthesizer};

/// Options for the render command.
#[derive(Debug)]
pub struct RenderOptions {
    pub input: String,
    pub config: PipelineConfig,
    pub timeout_ms: Option<u64>,
}

/// Run the render command.
pub fn run(options: RenderOptions) -> Result<()> {
    let start = Instant::now();

    // Get input text
    let text = if let Some(path) = options.input.strip_prefix('@') {
        info!(path = path, "Reading text from file");
        std::fs::read_to_string(path)?
    } else {
        options.input
    };

    if text.trim().is_empty() {
        bail!("input text is empty");
    }

    info!(
        text_len = text.len(),
        exaggeration = options.config.default_exaggeration,
        temperature = options.config.default_temperature,
        "Starting render"
    );

    let mock = Arc::new(MockSynthesizer::new(24000));
    let pipeline = SpeechPipeline::new(Arc::clone(&mock) as Arc<dyn Synthesizer>, options.config);

    let request = pipeline.new_request(text);

    let control = match options.timeout_ms {
        Some(ms) => RenderControl::with_timeout_ms(ms),
        None => RenderControl::new(),
    };

    let render_start = Instant::now();
    let audio = pipeline.render_with_control(&request, &control)?;
    let render_duration = render_start.elapsed();

    debug!(
        samples = audio.num_samples(),
        sample_rate = audio.sample_rate,
        render_ms = render_duration.as_millis() as u64,
        "Render completed"
    );

    let calls = mock.calls();
    let total_duration = start.elapsed();

    // Print summary
    println!("Render complete!");
    println!();
    println!("Input:     {} chars", request.text.len());
    println!("Chunks:    {}", calls.len());
    for (i, call) in calls.iter().enumerate() {
        println!(
            "  [{i}] e={:.2} t={:.2} {:?}",
            call.settings.exaggeration, call.settings.temperature, call.text
        );
    }
    println!();
    println!("Audio:");
    println!("  Duration:    {:.2} sec", audio.duration_ms() / 1000.0);
    println!("  Samples:     {}", audio.num_samples());
    println!("  Sample rate: {} Hz", audio.sample_rate);
    println!();
    println!("Performance:");
    println!("  Render:      {:.1} ms", render_duration.as_millis());
    println!("  Total:       {:.1} ms", total_duration.as_millis());

    info!(
        duration_ms = audio.duration_ms(),
        chunks = calls.len(),
        "Render summary printed"
    );

    Ok(())
}
