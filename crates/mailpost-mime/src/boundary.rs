//! Multipart boundary tokens.

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::fmt;

/// Prefix of every generated boundary.
pub const BOUNDARY_PREFIX: &str = "MAILPOST_";

/// Number of random characters following the prefix.
const TOKEN_LENGTH: usize = 24;

/// Delimiter token separating the parts of one multipart section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary(String);

impl Boundary {
    /// Generates a fresh random boundary.
    #[must_use]
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(format!("{BOUNDARY_PREFIX}{token}"))
    }

    /// Generates a boundary that does not occur in any of `contents`.
    ///
    /// Passing the text of a nested multipart section also guarantees the new
    /// boundary differs from the nested one.
    #[must_use]
    pub fn generate_avoiding(contents: &[&str]) -> Self {
        loop {
            let boundary = Self::generate();
            if !contents.iter().any(|content| content.contains(boundary.as_str())) {
                return boundary;
            }
        }
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the line that opens a part (`--boundary`).
    #[must_use]
    pub fn delimiter(&self) -> String {
        format!("--{}", self.0)
    }

    /// Returns the line that closes the section (`--boundary--`).
    #[must_use]
    pub fn close_delimiter(&self) -> String {
        format!("--{}--", self.0)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Boundary {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_format() {
        let boundary = Boundary::generate();
        let token = boundary.as_str().strip_prefix(BOUNDARY_PREFIX).unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_boundaries_are_fresh() {
        let a = Boundary::generate();
        let b = Boundary::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delimiters() {
        let boundary = Boundary("XYZ".to_string());
        assert_eq!(boundary.delimiter(), "--XYZ");
        assert_eq!(boundary.close_delimiter(), "--XYZ--");
        assert_eq!(boundary.to_string(), "XYZ");
    }

    #[test]
    fn test_generate_avoiding_nested_section() {
        let inner = Boundary::generate();
        let nested = format!("{}\nbody\n{}", inner.delimiter(), inner.close_delimiter());
        let outer = Boundary::generate_avoiding(&[&nested]);
        assert_ne!(outer, inner);
        assert!(!nested.contains(outer.as_str()));
    }
}
