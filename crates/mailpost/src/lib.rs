//! # mailpost
//!
//! Composes MIME messages and hands them to a single send primitive.
//!
//! ## Features
//!
//! - **Headers**: Address fields, `Date` and `MIME-Version` from a static table
//! - **Bodies**: Single part or `multipart/alternative` in insertion order
//! - **Attachments**: Base64 parts from files or memory, wrapped in `multipart/mixed`
//! - **Pluggable sending**: Any [`MailFunction`], local `sendmail` by default
//!
//! ## Quick Start
//!
//! ```
//! use mailpost::{Attachment, DeliveryOptions, Message, SimpleTransport, Transport};
//! use std::cell::RefCell;
//!
//! let sent = RefCell::new(Vec::new());
//! let transport = SimpleTransport::with_mail_function(
//!     |to: &str, subject: &str, body: &str, headers: &str| {
//!         sent.borrow_mut().push((to.to_string(), subject.to_string(), body.len(), headers.len()));
//!         true
//!     },
//! );
//!
//! let message = Message::new("Quarterly report")
//!     .from("reports@example.com")
//!     .to("team@example.com")
//!     .body("text/plain", "Numbers attached.")
//!     .body("text/html", "<p>Numbers attached.</p>")
//!     .attach(Attachment::from_data(b"q,revenue\n1,100\n".to_vec()).filename("q1.csv"));
//!
//! assert!(transport.deliver(&message, &DeliveryOptions::new())?);
//! assert_eq!(sent.borrow().len(), 1);
//! # Ok::<(), mailpost::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`compose`]: The composition pipeline
//! - [`transport`]: Send primitive seam and the `sendmail` adapter

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod message;

pub mod compose;
pub mod transport;

pub use address::{Address, format_addresses};
pub use compose::{Composed, compose};
pub use error::{Error, Result};
pub use message::{AddressField, Attachment, AttachmentSource, DEFAULT_CHARSET, Message};
pub use transport::{
    DeliveryOptions, MailFunction, Sendmail, SendmailConfig, SendmailError, SimpleTransport,
    Transport,
};
