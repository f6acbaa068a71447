//! Outgoing message model.

use crate::address::Address;
use chrono::{DateTime, FixedOffset, Local};
use mailpost_mime::{DEFAULT_ATTACHMENT_TYPE, Headers};
use std::path::{Path, PathBuf};

/// Character set used when none is given.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Address fields of a message that map to headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// `Return-Path`.
    ReturnPath,
    /// `Sender`.
    Sender,
    /// `From`.
    From,
    /// `Reply-To`.
    ReplyTo,
    /// `To`.
    To,
    /// `Cc`.
    Cc,
    /// `Bcc`.
    Bcc,
}

/// Where an attachment's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Read from the filesystem at composition time.
    Path(PathBuf),
    /// Already in memory.
    Data(Vec<u8>),
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Content source.
    pub source: AttachmentSource,
    /// File name announced in `name=`/`filename=` parameters.
    pub filename: Option<String>,
    /// Content type; an empty string suppresses the header.
    pub content_type: String,
    /// Content disposition, e.g. `attachment` or `inline`.
    pub disposition: Option<String>,
    /// Content ID without angle brackets.
    pub content_id: Option<String>,
}

impl Attachment {
    fn new(source: AttachmentSource) -> Self {
        Self {
            source,
            filename: None,
            content_type: DEFAULT_ATTACHMENT_TYPE.to_string(),
            disposition: None,
            content_id: None,
        }
    }

    /// Creates an attachment read from `path` when the message is composed.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(AttachmentSource::Path(path.as_ref().to_path_buf()))
    }

    /// Creates an attachment from in-memory bytes.
    #[must_use]
    pub fn from_data(data: impl Into<Vec<u8>>) -> Self {
        Self::new(AttachmentSource::Data(data.into()))
    }

    /// Sets the file name.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the content disposition.
    #[must_use]
    pub fn disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Sets the content ID.
    #[must_use]
    pub fn content_id(mut self, id: impl Into<String>) -> Self {
        self.content_id = Some(id.into());
        self
    }
}

/// An email message to compose and deliver.
#[derive(Debug, Clone)]
pub struct Message {
    /// `Return-Path` addresses.
    pub return_path: Vec<Address>,
    /// `Sender` addresses.
    pub sender: Vec<Address>,
    /// `From` addresses.
    pub from: Vec<Address>,
    /// `Reply-To` addresses.
    pub reply_to: Vec<Address>,
    /// Recipient addresses.
    pub to: Vec<Address>,
    /// CC addresses.
    pub cc: Vec<Address>,
    /// BCC addresses.
    pub bcc: Vec<Address>,
    /// Subject line.
    pub subject: String,
    /// Message date.
    pub date: DateTime<FixedOffset>,
    /// Character set of the text bodies.
    pub charset: String,
    /// Extra headers supplied by the caller.
    pub headers: Headers,
    /// Attachments in order.
    pub attachments: Vec<Attachment>,
    bodies: Vec<(String, String)>,
}

impl Message {
    /// Creates a new message dated now, with the default charset.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            return_path: Vec::new(),
            sender: Vec::new(),
            from: Vec::new(),
            reply_to: Vec::new(),
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: subject.into(),
            date: Local::now().into(),
            charset: DEFAULT_CHARSET.to_string(),
            headers: Headers::new(),
            attachments: Vec::new(),
            bodies: Vec::new(),
        }
    }

    /// Adds a `Return-Path` address.
    #[must_use]
    pub fn return_path(mut self, address: impl Into<Address>) -> Self {
        self.return_path.push(address.into());
        self
    }

    /// Adds a `Sender` address.
    #[must_use]
    pub fn sender(mut self, address: impl Into<Address>) -> Self {
        self.sender.push(address.into());
        self
    }

    /// Adds a `From` address.
    #[must_use]
    pub fn from(mut self, address: impl Into<Address>) -> Self {
        self.from.push(address.into());
        self
    }

    /// Adds a `Reply-To` address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<Address>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, address: impl Into<Address>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, address: impl Into<Address>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, address: impl Into<Address>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = date;
        self
    }

    /// Sets the character set.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets an extra header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the body for a content type such as `text/plain` or `text/html`.
    ///
    /// Content types keep the order in which they were first added; setting
    /// one again replaces its text in place.
    #[must_use]
    pub fn body(mut self, content_type: impl Into<String>, text: impl Into<String>) -> Self {
        let content_type = content_type.into();
        let text = text.into();
        match self.bodies.iter_mut().find(|(existing, _)| *existing == content_type) {
            Some(entry) => entry.1 = text,
            None => self.bodies.push((content_type, text)),
        }
        self
    }

    /// Adds an attachment.
    #[must_use]
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Returns the body content types with their text, in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[(String, String)] {
        &self.bodies
    }

    /// Returns the addresses of one address field.
    #[must_use]
    pub fn addresses(&self, field: AddressField) -> &[Address] {
        match field {
            AddressField::ReturnPath => &self.return_path,
            AddressField::Sender => &self.sender,
            AddressField::From => &self.from,
            AddressField::ReplyTo => &self.reply_to,
            AddressField::To => &self.to,
            AddressField::Cc => &self.cc,
            AddressField::Bcc => &self.bcc,
        }
    }
}
