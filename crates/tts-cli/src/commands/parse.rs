//! Parse command implementation.

use anyhow::Result;

use text_processor::parse;
use tts_core::Segment;

/// Run the parse command.
pub fn run(input: &str, json: bool) -> Result<()> {
    let segments = parse(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
        return Ok(());
    }

    println!("Segments: {}", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Text(text) => println!("  [{i}] text    {text:?}"),
            Segment::Marker(marker) => println!(
                "  [{i}] marker  {:?} (bytes {}-{})",
                marker.kind, marker.start, marker.end
            ),
        }
    }

    Ok(())
}
