//! Inline control marker parsing.
//!
//! Markers have the literal form `<p=N>`, `<e=N>`, `<t=N>` where N is a
//! non-negative integer or decimal. The scan is a single forward pass over
//! the bytes: no regex, no re-scanning. Anything that does not match the
//! grammar exactly (unterminated, non-numeric value, unknown key) stays in
//! the text as literal characters.

use tts_core::{Marker, MarkerKind, Segment};

/// Parse text into an ordered sequence of text and marker segments.
///
/// The output is exactly the interleaving of trimmed text spans and marker
/// deltas in scan order; empty text spans are omitted. Empty input yields
/// an empty sequence, which callers must treat as an input error.
pub fn parse(text: &str) -> Vec<Segment> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut pending = 0; // start of text not yet emitted
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' {
            if let Some(marker) = match_marker(text, i) {
                push_text(&mut segments, &text[pending..i]);
                i = marker.end;
                pending = marker.end;
                segments.push(Segment::Marker(marker));
                continue;
            }
        }
        i += 1;
    }

    push_text(&mut segments, &text[pending..]);
    segments
}

fn push_text(segments: &mut Vec<Segment>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        segments.push(Segment::Text(trimmed.to_string()));
    }
}

/// Try to match a complete marker starting at the `<` at byte `start`.
///
/// Grammar: `<` (`p`|`e`|`t`) `=` digits [`.` digits] `>`. Pause values
/// are truncated toward zero to whole milliseconds.
fn match_marker(text: &str, start: usize) -> Option<Marker> {
    let bytes = text.as_bytes();

    let key = *bytes.get(start + 1)?;
    if !matches!(key, b'p' | b'e' | b't') {
        return None;
    }
    if *bytes.get(start + 2)? != b'=' {
        return None;
    }

    let digits_start = start + 3;
    let mut i = digits_start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }

    // Optional fractional part; a bare trailing dot does not match.
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            i = j;
        }
    }

    if *bytes.get(i)? != b'>' {
        return None;
    }

    let value: f64 = text[digits_start..i].parse().ok()?;
    let end = i + 1;

    let kind = match key {
        b'p' => MarkerKind::Pause { ms: value as u64 },
        b'e' => MarkerKind::Exaggeration {
            value: value as f32,
        },
        _ => MarkerKind::Temperature {
            value: value as f32,
        },
    };

    Some(Marker::new(kind, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_text_only() {
        let segments = parse("  Hello world  ");
        assert_eq!(segments, vec![Segment::Text("Hello world".to_string())]);
    }

    #[test]
    fn test_pause_marker_between_text() {
        let segments = parse("Hello <p=500> world");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Text("Hello".to_string()));
        assert_eq!(
            segments[1],
            Segment::Marker(Marker::new(MarkerKind::Pause { ms: 500 }, 6, 13))
        );
        assert_eq!(segments[2], Segment::Text("world".to_string()));
    }

    #[test]
    fn test_leading_and_trailing_markers() {
        let segments = parse("<e=0.8>Speak boldly<t=0.3> now");
        assert_eq!(segments.len(), 4);
        assert!(matches!(
            segments[0],
            Segment::Marker(Marker {
                kind: MarkerKind::Exaggeration { value },
                ..
            }) if (value - 0.8).abs() < f32::EPSILON
        ));
        assert_eq!(segments[1], Segment::Text("Speak boldly".to_string()));
        assert!(matches!(
            segments[2],
            Segment::Marker(Marker {
                kind: MarkerKind::Temperature { value },
                ..
            }) if (value - 0.3).abs() < f32::EPSILON
        ));
        assert_eq!(segments[3], Segment::Text("now".to_string()));
    }

    #[test]
    fn test_decimal_pause_truncates() {
        let segments = parse("<p=500.9>");
        assert_eq!(
            segments,
            vec![Segment::Marker(Marker::new(
                MarkerKind::Pause { ms: 500 },
                0,
                9
            ))]
        );
    }

    #[test]
    fn test_malformed_markers_stay_literal() {
        for input in ["<p=>", "<p=abc>", "<p=5", "<x=5>", "<p5>", "<p=5.>"] {
            let segments = parse(input);
            assert_eq!(
                segments,
                vec![Segment::Text(input.to_string())],
                "expected {input:?} to stay literal"
            );
        }
    }

    #[test]
    fn test_adjacent_markers() {
        let segments = parse("<e=1.0><p=100><t=0.2>go");
        assert_eq!(segments.len(), 4);
        assert!(segments[0].is_marker());
        assert!(segments[1].is_marker());
        assert!(segments[2].is_marker());
        assert_eq!(segments[3], Segment::Text("go".to_string()));
    }

    #[test]
    fn test_marker_spans_cover_source() {
        let text = "ab <p=1> cd";
        let segments = parse(text);
        let Segment::Marker(marker) = &segments[1] else {
            panic!("expected marker");
        };
        assert_eq!(&text[marker.start..marker.end], "<p=1>");
    }

    #[test]
    fn test_angle_bracket_text_untouched() {
        let segments = parse("x < y and y > z");
        assert_eq!(segments, vec![Segment::Text("x < y and y > z".to_string())]);
    }
}
