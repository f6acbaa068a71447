//! Content-Type and Content-Disposition values.

use crate::boundary::Boundary;
use std::fmt;

/// Default content type of an attachment.
pub const DEFAULT_ATTACHMENT_TYPE: &str = "text/plain";

/// Multipart subtypes produced by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultipartKind {
    /// Alternative renderings of the same content.
    Alternative,
    /// Body followed by attachments.
    Mixed,
}

impl MultipartKind {
    /// Returns the subtype name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alternative => "alternative",
            Self::Mixed => "mixed",
        }
    }

    /// Formats the `Content-Type` value for this kind and boundary.
    ///
    /// ```
    /// use mailpost_mime::{Boundary, MultipartKind};
    ///
    /// let boundary = Boundary::generate();
    /// let value = MultipartKind::Mixed.content_type(&boundary);
    /// assert_eq!(value, format!("multipart/mixed;boundary=\"{boundary}\""));
    /// ```
    #[must_use]
    pub fn content_type(self, boundary: &Boundary) -> String {
        format!("multipart/{};boundary=\"{boundary}\"", self.as_str())
    }
}

impl fmt::Display for MultipartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a text content type with its charset, e.g. `text/plain;charset="UTF-8"`.
#[must_use]
pub fn text_content_type(mime_type: &str, charset: &str) -> String {
    format!("{mime_type};charset=\"{charset}\"")
}

/// Returns `true` if the header value carries parameter `name`.
///
/// Parameters are the `;`-separated segments after the first one; the match
/// on the parameter name is case-insensitive and ignores leading whitespace.
/// `filename=` therefore does not count as `name=`.
#[must_use]
pub fn has_parameter(value: &str, name: &str) -> bool {
    value.split(';').skip(1).any(|segment| {
        segment
            .trim_start()
            .split_once('=')
            .is_some_and(|(key, _)| key.trim_end().eq_ignore_ascii_case(name))
    })
}

/// Appends `; name="value"` unless the parameter is already present.
#[must_use]
pub fn with_parameter(header_value: &str, name: &str, value: &str) -> String {
    if has_parameter(header_value, name) {
        header_value.to_string()
    } else {
        format!("{header_value}; {name}=\"{value}\"")
    }
}
