//! Line wrapping for message bodies.
//!
//! Text parts are soft-wrapped on spaces, base64 output is hard-wrapped at a
//! fixed column.

/// Column at which body text and encoded attachments are wrapped.
pub const LINE_LENGTH: usize = 70;

/// Soft-wraps text at `width` characters.
///
/// Only spaces are break points: a space is replaced by `\n` when the line
/// would otherwise grow past `width`. Existing newlines start a new line.
/// A word longer than `width` is kept intact on a line of its own.
/// A `width` of zero returns the text unchanged.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    let mut line_start = 0;
    let mut last_space = 0;

    for current in 0..chars.len() {
        match chars[current] {
            '\n' => {
                line_start = current + 1;
                last_space = current + 1;
            }
            ' ' => {
                if current - line_start >= width {
                    chars[current] = '\n';
                    line_start = current + 1;
                }
                last_space = current;
            }
            _ => {
                if current - line_start >= width && line_start != last_space {
                    chars[last_space] = '\n';
                    line_start = last_space + 1;
                }
            }
        }
    }

    chars.into_iter().collect()
}

/// Hard-wraps text every `width` characters regardless of content.
///
/// A `width` of zero returns the text unchanged.
#[must_use]
pub fn hard_wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + text.len() / width);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            result.push('\n');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_text("hello world", LINE_LENGTH), "hello world");
    }

    #[test]
    fn test_wrap_breaks_on_last_space() {
        // 15 four-letter words: 74 characters on one line
        let text = vec!["abcd"; 15].join(" ");
        let wrapped = wrap_text(&text, LINE_LENGTH);

        let expected = format!("{}\nabcd", vec!["abcd"; 14].join(" "));
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn test_wrap_space_at_limit() {
        assert_eq!(wrap_text("abcde fgh", 5), "abcde\nfgh");
    }

    #[test]
    fn test_wrap_keeps_long_word_intact() {
        let long = "x".repeat(90);
        let text = format!("ab {long} cd");
        assert_eq!(wrap_text(&text, LINE_LENGTH), format!("ab\n{long}\ncd"));
    }

    #[test]
    fn test_wrap_existing_newline_resets_line() {
        let text = format!("{}\n{}", "a".repeat(60), vec!["bb"; 20].join(" "));
        let wrapped = wrap_text(&text, LINE_LENGTH);
        assert_eq!(wrapped, text);
    }

    #[test]
    fn test_wrap_multibyte_counts_characters() {
        let text = format!("{} é", "é".repeat(5));
        assert_eq!(wrap_text(&text, 5), "ééééé\né");
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("a b c", 0), "a b c");
        assert_eq!(hard_wrap("abc", 0), "abc");
    }

    #[test]
    fn test_hard_wrap() {
        assert_eq!(hard_wrap("abcdefg", 3), "abc\ndef\ng");
        assert_eq!(hard_wrap("abcdef", 3), "abc\ndef");
        assert_eq!(hard_wrap("", 3), "");
    }

    proptest! {
        #[test]
        fn prop_wrap_only_replaces_spaces(text in "[a-z \n]{0,300}", width in 1usize..80) {
            let wrapped = wrap_text(&text, width);
            prop_assert_eq!(wrapped.chars().count(), text.chars().count());
            for (before, after) in text.chars().zip(wrapped.chars()) {
                prop_assert!(before == after || (before == ' ' && after == '\n'));
            }
        }

        #[test]
        fn prop_wrapped_words_fit_width(text in "[a-z]{1,10}( [a-z]{1,10}){0,40}", width in 20usize..=70) {
            let wrapped = wrap_text(&text, width);
            for line in wrapped.lines() {
                prop_assert!(line.chars().count() <= width, "line too long: {:?}", line);
            }
        }

        #[test]
        fn prop_hard_wrap_rejoins(text in "[A-Za-z0-9+/]{0,500}", width in 1usize..100) {
            let wrapped = hard_wrap(&text, width);
            prop_assert!(wrapped.lines().all(|line| line.len() <= width));
            prop_assert_eq!(wrapped.replace('\n', ""), text);
        }
    }
}
