//! # text-processor
//!
//! Text preparation for the expressive TTS pipeline:
//!
//! - [`sanitize`]: control-character removal and whitespace normalization
//! - [`parse`]: single-pass scan for inline `<p=N>`, `<e=N>`, `<t=N>`
//!   control markers, producing an ordered segment list
//! - [`split`]: sentence-respecting, size-bounded chunking under the
//!   backend token ceiling
//!
//! # Example
//!
//! ```
//! use text_processor::{parse, split};
//! use tts_core::Segment;
//!
//! let segments = parse("Hello <p=500> world");
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[0], Segment::Text("Hello".to_string()));
//!
//! let chunks = split("One sentence. Another one.", 400);
//! assert_eq!(chunks, vec!["One sentence. Another one."]);
//! ```

mod chunker;
mod markers;
mod sanitize;

pub use chunker::split;
pub use markers::parse;
pub use sanitize::sanitize;
