//! Greedy width-constrained line wrapping.

use super::TextMeasurer;
use crate::model::StyleSpec;

/// Slack for float rounding when comparing widths.
const FIT_TOLERANCE: f32 = 1e-4;

/// Wrap `text` into lines no wider than `max_width`.
///
/// Words are accumulated onto a line while it still fits and a new line is
/// started otherwise. Runs of whitespace collapse to a single space. A word
/// wider than `max_width` on its own is broken between characters; a single
/// character wider than the line is still placed alone. Text with no words
/// produces no lines.
pub fn wrap_text<M>(text: &str, max_width: f32, style: &StyleSpec, measurer: &M) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let fits = |s: &str| measurer.measure(s, style) <= max_width + FIT_TOLERANCE;

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            if fits(word) {
                current.push_str(word);
            } else {
                current = break_word(word, &fits, &mut lines);
            }
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if fits(word) {
            current.push_str(word);
        } else {
            current = break_word(word, &fits, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split an over-long word into full lines, returning the unfinished tail.
fn break_word<F>(word: &str, fits: &F, lines: &mut Vec<String>) -> String
where
    F: Fn(&str) -> bool,
{
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if !fits(&chunk) && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMetrics;

    fn wrap(text: &str, columns: usize) -> Vec<String> {
        wrap_text(
            text,
            columns as f32,
            &StyleSpec::default(),
            &MonospaceMetrics::new(1.0),
        )
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap("Set up analytics", 40), vec!["Set up analytics"]);
    }

    #[test]
    fn test_greedy_break() {
        assert_eq!(
            wrap("one two three four five", 9),
            vec!["one two", "three", "four five"]
        );
    }

    #[test]
    fn test_exact_fit() {
        assert_eq!(wrap("abc def", 7), vec!["abc def"]);
        assert_eq!(wrap("abc def", 6), vec!["abc", "def"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("go abcdefghij x", 4), vec!["go", "abcd", "efgh", "ij x"]);
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(wrap("  a   b  ", 10), vec!["a b"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_char_wider_than_line() {
        let lines = wrap_text(
            "ab",
            0.5,
            &StyleSpec::default(),
            &MonospaceMetrics::new(1.0),
        );
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = "Grow the newsletter audience through partnerships, referral \
                    incentives and a consistent weekly publishing cadence";
        for line in wrap(text, 20) {
            assert!(line.chars().count() <= 20, "{line:?} too wide");
        }
    }
}
