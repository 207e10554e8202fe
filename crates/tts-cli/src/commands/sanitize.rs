//! Sanitize command implementation.

use anyhow::Result;

use text_processor::sanitize;

/// Run the sanitize command.
pub fn run(input: &str) -> Result<()> {
    let cleaned = sanitize(input);

    println!("Input:     {input:?}");
    println!("Sanitized: {cleaned:?}");
    println!();
    println!("{cleaned}");

    Ok(())
}
