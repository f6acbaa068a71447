//! Message composition.
//!
//! Turns a [`Message`] into a header map and a body string in one forward
//! pass:
//!
//! 1. [`assemble_headers`] maps address fields, `Date` and `MIME-Version`.
//! 2. [`compose_body`] renders the text bodies, single part or
//!    `multipart/alternative`.
//! 3. [`attach_all`] wraps everything into `multipart/mixed` when the
//!    message has attachments.
//!
//! The resulting `Content-Type` is written into the headers last.

mod attachment;
mod body;
mod headers;

pub use attachment::{attach_all, encode_part, resolve_content};
pub use body::{ComposedBody, compose_body};
pub use headers::{ADDRESS_HEADERS, assemble_headers};

use crate::error::Result;
use crate::message::Message;
use mailpost_mime::Headers;

/// Headers and body ready for the send primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    /// Top-level headers. Address fields without addresses hold empty
    /// values; [`Composed::header_block`] drops them.
    pub headers: Headers,
    /// Full body text.
    pub body: String,
}

impl Composed {
    /// Renders the headers in wire format, dropping empty values.
    #[must_use]
    pub fn header_block(&self) -> String {
        self.headers.to_string()
    }
}

/// Composes a message into headers and body.
///
/// # Errors
///
/// Returns [`crate::Error::AttachmentUnreadable`] if an attachment cannot be
/// read. Nothing is produced in that case.
pub fn compose(message: &Message) -> Result<Composed> {
    let mut headers = assemble_headers(message);
    let body = compose_body(message.bodies(), &message.charset);
    let body = attach_all(body, &message.attachments)?;

    headers.set("Content-Type", body.content_type);

    tracing::debug!(
        bodies = message.bodies().len(),
        attachments = message.attachments.len(),
        headers = headers.len(),
        "message composed"
    );

    Ok(Composed {
        headers,
        body: body.body,
    })
}
