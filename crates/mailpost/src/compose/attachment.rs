//! Attachment encoding and the multipart/mixed wrapper.

use super::body::ComposedBody;
use crate::error::{Error, Result};
use crate::message::{Attachment, AttachmentSource};
use mailpost_mime::encoding::encode_base64_wrapped;
use mailpost_mime::{Boundary, MultipartKind, with_parameter};
use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs;
use std::io;

/// Reads the bytes of an attachment.
///
/// Path sources are resolved to an absolute path first, then read in full.
///
/// # Errors
///
/// Returns [`Error::AttachmentUnreadable`] if the path does not resolve,
/// cannot be read, or yields no data.
pub fn resolve_content(attachment: &Attachment) -> Result<Cow<'_, [u8]>> {
    let path = match &attachment.source {
        AttachmentSource::Data(data) => return Ok(Cow::Borrowed(data.as_slice())),
        AttachmentSource::Path(path) => path,
    };

    let unreadable = |source: Option<io::Error>| {
        tracing::warn!(path = %path.display(), ?source, "attachment unreadable");
        Error::attachment_unreadable(path.clone(), source)
    };

    let absolute = fs::canonicalize(path).map_err(|e| unreadable(Some(e)))?;
    let content = fs::read(&absolute).map_err(|e| unreadable(Some(e)))?;
    if content.is_empty() {
        return Err(unreadable(None));
    }

    tracing::debug!(path = %absolute.display(), bytes = content.len(), "attachment read");
    Ok(Cow::Owned(content))
}

/// Renders one attachment part: its headers, a blank line and the wrapped
/// base64 content.
#[must_use]
pub fn encode_part(attachment: &Attachment, content: &[u8]) -> String {
    let mut part = String::new();
    let filename = attachment.filename.as_deref();

    if !attachment.content_type.is_empty() {
        let content_type = match filename {
            Some(name) => with_parameter(&attachment.content_type, "name", name),
            None => attachment.content_type.clone(),
        };
        let _ = writeln!(part, "Content-Type: {content_type}");
    }

    if let Some(disposition) = attachment.disposition.as_deref().filter(|d| !d.is_empty()) {
        let disposition = match filename {
            Some(name) => with_parameter(disposition, "filename", name),
            None => disposition.to_string(),
        };
        let _ = writeln!(part, "Content-Disposition: {disposition}");
    }

    if let Some(id) = attachment.content_id.as_deref().filter(|id| !id.is_empty()) {
        let _ = writeln!(part, "Content-ID: <{id}>");
    }

    part.push_str("Content-Transfer-Encoding: base64\n\n");
    part.push_str(&encode_base64_wrapped(content));
    part.push('\n');
    part
}

/// Wraps the composed body and the attachments into a `multipart/mixed`
/// section.
///
/// With no attachments the body is returned unchanged. Every attachment is
/// resolved before any output is built, so a single unreadable attachment
/// fails the whole message.
///
/// # Errors
///
/// Returns [`Error::AttachmentUnreadable`] if any attachment cannot be read.
pub fn attach_all(body: ComposedBody, attachments: &[Attachment]) -> Result<ComposedBody> {
    if attachments.is_empty() {
        return Ok(body);
    }

    let parts = attachments
        .iter()
        .map(|attachment| -> Result<String> {
            Ok(encode_part(attachment, &resolve_content(attachment)?))
        })
        .collect::<Result<Vec<String>>>()?;

    let nested = if body.multipart {
        body.body
    } else {
        format!("Content-Type: {}\n\n{}", body.content_type, body.body)
    };

    let mut contents = vec![nested.as_str()];
    contents.extend(parts.iter().map(String::as_str));
    let boundary = Boundary::generate_avoiding(&contents);
    let content_type = MultipartKind::Mixed.content_type(&boundary);

    let mut wrapped = format!("Content-Type: {content_type}\n\n");
    let _ = writeln!(wrapped, "{}", boundary.delimiter());
    let _ = writeln!(wrapped, "{nested}");
    for part in &parts {
        let _ = write!(wrapped, "\n{}\n{part}", boundary.delimiter());
    }
    let _ = write!(wrapped, "\n{}", boundary.close_delimiter());

    tracing::debug!(attachments = parts.len(), %boundary, "composed multipart/mixed body");

    Ok(ComposedBody {
        content_type,
        body: wrapped,
        multipart: true,
    })
}
