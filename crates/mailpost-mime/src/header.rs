//! Ordered header collection.

use std::fmt;

/// Line terminator between serialized header fields.
pub const CRLF: &str = "\r\n";

/// Collection of email headers.
///
/// Insertion order is preserved. Names compare case-insensitively, and
/// [`Headers::set`] on an existing name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    headers: Vec<(String, String)>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header value, replacing any existing value under the same name.
    ///
    /// A replaced header keeps its original position and spelling.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => self.headers[index].1 = value,
            None => self.headers.push((name, value)),
        }
    }

    /// Gets the value of a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.headers[index].1.as_str())
    }

    /// Returns the number of headers, including empty-valued ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if no headers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns an iterator over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

/// Renders `Name: Value` lines joined by CRLF.
///
/// Headers with an empty value are skipped. Long lines are not folded.
impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter().filter(|(_, value)| !value.is_empty()) {
            if !first {
                f.write_str(CRLF)?;
            }
            write!(f, "{name}: {value}")?;
            first = false;
        }
        Ok(())
    }
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

    #[test]
    fn test_headers_new() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.to_string(), "");
    }

    #[test]
    fn test_headers_set_get() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "text/plain");
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(headers.get("content-type"), Some("text/plain")); // Case insensitive
    }

    #[test]
    fn test_headers_set_replaces_in_place() {
        let mut headers = Headers::new();
        headers.set("X-Mailer", "custom");
        headers.set("to", "old@example.com");
        headers.set("Subject", "Test");

        headers.set("To", "new@example.com");

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["X-Mailer", "to", "Subject"]);
        assert_eq!(headers.get("TO"), Some("new@example.com"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_headers_get_case_insensitive() {
        let mut headers = Headers::new();
        headers.set("Subject", "Test");
        assert_eq!(headers.get("subject"), Some("Test"));
        assert_eq!(headers.get("Cc"), None);
    }

    #[test]
    fn test_headers_display_crlf_in_order() {
        let headers: Headers = [
            ("From", "sender@example.com"),
            ("To", "recipient@example.com"),
            ("MIME-Version", "1.0"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            headers.to_string(),
            "From: sender@example.com\r\nTo: recipient@example.com\r\nMIME-Version: 1.0"
        );
    }

    #[test]
    fn test_headers_display_skips_empty_values() {
        let mut headers = Headers::new();
        headers.set("Cc", "");
        headers.set("To", "a@x.com");
        headers.set("Bcc", "");

        assert_eq!(headers.to_string(), "To: a@x.com");
        assert_eq!(headers.len(), 3);
    }
}
