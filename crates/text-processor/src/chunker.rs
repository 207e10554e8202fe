//! Sentence-aware chunking under a word budget.

use tracing::debug;

use crate::sanitize::sanitize;

/// Split text into synthesis chunks that respect sentence boundaries and a
/// word budget.
///
/// The budget counts whitespace-delimited words, a conservative proxy for
/// the backend tokenizer's output length. Sentences are packed greedily
/// into a running chunk; when the next sentence would overflow the budget
/// the running chunk is flushed. A single sentence that alone exceeds the
/// budget is hard-split into fixed-size word windows (the last window may
/// be shorter). A single word over the budget is emitted unsplit: there is
/// no finer-grained splitting below word boundaries.
///
/// Empty input yields an empty sequence.
pub fn split(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let text = sanitize(text);
    if text.is_empty() {
        return Vec::new();
    }

    let sentences = split_sentences(&text);

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_words = 0;

    for sentence in &sentences {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        if current_words + words.len() > max_words {
            if !current.is_empty() {
                chunks.push(current.join(" "));
                current.clear();
                current_words = 0;
            }

            if words.len() > max_words {
                // Sentence alone exceeds the budget: hard-split into word
                // windows and reset the accumulator.
                for window in words.chunks(max_words) {
                    chunks.push(window.join(" "));
                }
            } else {
                current.push(sentence);
                current_words = words.len();
            }
        } else {
            current.push(sentence);
            current_words += words.len();
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    debug!(
        sentences = sentences.len(),
        chunks = chunks.len(),
        max_words,
        "Split text into chunks"
    );

    chunks
}

/// Segment sanitized text into sentences.
///
/// A sentence ends at a run of `.`/`!`/`?` followed by whitespace; the
/// punctuation stays attached to the preceding sentence and the whitespace
/// run is consumed. Trailing text without terminal punctuation forms the
/// final sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        // Extend over the whole punctuation run.
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminal(next) {
                chars.next();
                end = j + next.len_utf8();
            } else {
                break;
            }
        }

        // Only whitespace after the run terminates a sentence; "3.14" or a
        // final "Bye." fall through to the trailing sentence.
        if chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            sentences.push(text[start..end].to_string());
            while chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
                chars.next();
            }
            start = chars.peek().map_or(text.len(), |&(j, _)| j);
        }
    }

    if start < text.len() {
        sentences.push(text[start..].to_string());
    }

    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
