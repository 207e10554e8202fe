//! Raw text sanitization.

/// Sanitize raw text for synthesis.
///
/// - Strips non-printable control characters except newline (tab survives
///   long enough to be folded into the surrounding whitespace run).
/// - Collapses runs of spaces/tabs to a single space.
/// - Collapses any whitespace run containing two or more newlines (a blank
///   line) to a single newline.
/// - Trims leading and trailing whitespace.
///
/// Empty input yields empty output. The function is idempotent:
/// `sanitize(sanitize(x)) == sanitize(x)` for all inputs, and text already
/// free of control characters and repeated whitespace passes through
/// unchanged.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Collapsed form of the whitespace run currently being scanned, plus
    // how many newlines the uncollapsed run contained.
    let mut run = String::new();
    let mut run_newlines = 0usize;

    for c in text.chars() {
        match c {
            ' ' | '\t' => {
                if !run.ends_with(' ') {
                    run.push(' ');
                }
            }
            '\n' => {
                run.push('\n');
                run_newlines += 1;
            }
            _ if c.is_control() => {}
            _ => {
                flush_run(&mut out, &mut run, &mut run_newlines);
                out.push(c);
            }
        }
    }

    out
}

/// Emit a pending whitespace run before a printable character.
///
/// A run at the start of the output is dropped entirely (leading trim);
/// the trailing run never gets flushed (trailing trim). A run spanning a
/// blank line becomes a single newline; otherwise the space-collapsed run
/// is kept as-is so already-sanitized text round-trips unchanged.
fn flush_run(out: &mut String, run: &mut String, run_newlines: &mut usize) {
    if !run.is_empty() && !out.is_empty() {
        if *run_newlines >= 2 {
            out.push('\n');
        } else {
            out.push_str(run);
        }
    }
    run.clear();
    *run_newlines = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \t\n  "), "");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize("he\u{0}llo\u{7f}"), "hello");
        assert_eq!(sanitize("a\u{1}\u{2}\u{3}b"), "ab");
        // Carriage returns are control characters too.
        assert_eq!(sanitize("line one\r\nline two"), "line one\nline two");
    }

    #[test]
    fn test_collapses_spaces_and_tabs() {
        assert_eq!(sanitize("a  b"), "a b");
        assert_eq!(sanitize("a\t\tb"), "a b");
        assert_eq!(sanitize("a \t b"), "a b");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(sanitize("a\n\nb"), "a\nb");
        assert_eq!(sanitize("a\n\n\n\nb"), "a\nb");
        assert_eq!(sanitize("a\n  \n  b"), "a\nb");
    }

    #[test]
    fn test_preserves_single_newline() {
        assert_eq!(sanitize("a\nb"), "a\nb");
        assert_eq!(sanitize("a \n b"), "a \n b");
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize("  hello  "), "hello");
        assert_eq!(sanitize("\n\nhello\n\n"), "hello");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "hello world",
            "  a \t b\u{0} \n\n c  ",
            "a \n b",
            "one.\n\n\ntwo.",
            "\u{1}\u{2}",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_clean_text_unchanged() {
        let clean = "Hello world.\nSecond line, still clean.";
        assert_eq!(sanitize(clean), clean);
    }
}
