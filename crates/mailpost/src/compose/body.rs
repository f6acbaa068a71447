//! Text body composition: single part or multipart/alternative.

use mailpost_mime::wrap::{LINE_LENGTH, wrap_text};
use mailpost_mime::{Boundary, MultipartKind, text_content_type};
use std::fmt::Write as _;

/// Content type used when a message has no body at all.
const FALLBACK_TYPE: &str = "text/plain";

/// Body text together with the `Content-Type` describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedBody {
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Rendered body.
    pub body: String,
    /// Whether the body is a multipart section carrying its own preamble.
    pub multipart: bool,
}

/// Composes the text bodies of a message.
///
/// A single body is wrapped and returned as is. Several bodies become a
/// `multipart/alternative` section in insertion order, introduced by a
/// `Content-Type` preamble line so the section can also be nested as a part.
#[must_use]
pub fn compose_body(bodies: &[(String, String)], charset: &str) -> ComposedBody {
    match bodies {
        [] => single(FALLBACK_TYPE, "", charset),
        [(mime_type, text)] => single(mime_type, text, charset),
        _ => alternative(bodies, charset),
    }
}

fn single(mime_type: &str, text: &str, charset: &str) -> ComposedBody {
    ComposedBody {
        content_type: text_content_type(mime_type, charset),
        body: wrap_text(text, LINE_LENGTH),
        multipart: false,
    }
}

fn alternative(bodies: &[(String, String)], charset: &str) -> ComposedBody {
    let wrapped: Vec<String> = bodies
        .iter()
        .map(|(_, text)| wrap_text(text, LINE_LENGTH))
        .collect();
    let contents: Vec<&str> = wrapped.iter().map(String::as_str).collect();
    let boundary = Boundary::generate_avoiding(&contents);
    let content_type = MultipartKind::Alternative.content_type(&boundary);

    let mut body = format!("Content-Type: {content_type}\n\n");
    for ((mime_type, _), text) in bodies.iter().zip(&wrapped) {
        let _ = writeln!(body, "{}", boundary.delimiter());
        let _ = writeln!(body, "Content-Type: {}\n", text_content_type(mime_type, charset));
        let _ = writeln!(body, "{text}\n");
    }
    body.push_str(&boundary.close_delimiter());

    tracing::debug!(parts = bodies.len(), %boundary, "composed multipart/alternative body");

    ComposedBody {
        content_type,
        body,
        multipart: true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::similar_names)]
mod tests {
    use super::*;

    fn bodies(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(t, b)| ((*t).to_string(), (*b).to_string()))
            .collect()
    }

    fn boundary_of(content_type: &str) -> &str {
        content_type
            .split("boundary=\"")
            .nth(1)
            .unwrap()
            .trim_end_matches('"')
    }

    #[test]
    fn test_single_body() {
        let composed = compose_body(&bodies(&[("text/plain", "hello world")]), "UTF-8");
        assert_eq!(composed.content_type, "text/plain;charset=\"UTF-8\"");
        assert_eq!(composed.body, "hello world");
        assert!(!composed.multipart);
        assert!(!composed.body.contains("--"));
    }

    #[test]
    fn test_single_body_is_wrapped() {
        let text = vec!["word"; 30].join(" ");
        let composed = compose_body(&bodies(&[("text/plain", &text)]), "UTF-8");
        assert!(composed.body.lines().all(|line| line.len() <= 70));
        assert_eq!(composed.body.replace('\n', " "), text);
    }

    #[test]
    fn test_empty_bodies_fall_back_to_plain_text() {
        let composed = compose_body(&[], "ISO-8859-1");
        assert_eq!(composed.content_type, "text/plain;charset=\"ISO-8859-1\"");
        assert_eq!(composed.body, "");
    }

    #[test]
    fn test_alternative_layout() {
        let composed = compose_body(
            &bodies(&[("text/plain", "plain text"), ("text/html", "<p>html</p>")]),
            "UTF-8",
        );
        assert!(composed.multipart);
        assert!(composed.content_type.starts_with("multipart/alternative;boundary=\""));

        let b = boundary_of(&composed.content_type);
        let expected = format!(
            "Content-Type: multipart/alternative;boundary=\"{b}\"\n\n\
             --{b}\n\
             Content-Type: text/plain;charset=\"UTF-8\"\n\n\
             plain text\n\n\
             --{b}\n\
             Content-Type: text/html;charset=\"UTF-8\"\n\n\
             <p>html</p>\n\n\
             --{b}--"
        );
        assert_eq!(composed.body, expected);
    }

    #[test]
    fn test_alternative_delimiter_count_and_order() {
        let composed = compose_body(
            &bodies(&[
                ("text/html", "<b>1</b>"),
                ("text/plain", "2"),
                ("text/enriched", "3"),
            ]),
            "UTF-8",
        );
        let b = boundary_of(&composed.content_type);
        let open = format!("--{b}");
        let close = format!("--{b}--");

        let delimiters = composed.body.lines().filter(|line| *line == open).count();
        let closings = composed.body.lines().filter(|line| *line == close).count();
        assert_eq!(delimiters, 3);
        assert_eq!(closings, 1);

        let html = composed.body.find("text/html;").unwrap();
        let plain = composed.body.find("text/plain;").unwrap();
        let enriched = composed.body.find("text/enriched;").unwrap();
        assert!(html < plain && plain < enriched);
    }

    #[test]
    fn test_alternative_boundaries_are_fresh() {
        let input = bodies(&[("text/plain", "a"), ("text/html", "b")]);
        let first = compose_body(&input, "UTF-8");
        let second = compose_body(&input, "UTF-8");
        assert_ne!(first.content_type, second.content_type);
    }
}
