//! Chunk command implementation.

use anyhow::Result;

use text_processor::split;

/// Run the chunk command.
pub fn run(input: &str, max_words: usize) -> Result<()> {
    let chunks = split(input, max_words);

    println!("Chunks: {} (budget {max_words} words)", chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let words = chunk.split_whitespace().count();
        println!("  [{i}] {words} words: {chunk:?}");
    }

    Ok(())
}
