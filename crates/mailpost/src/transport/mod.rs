//! Delivery through an injected send primitive.

mod sendmail;

pub use sendmail::{Sendmail, SendmailConfig, SendmailConfigBuilder, SendmailError};

use crate::address::format_addresses;
use crate::compose::compose;
use crate::error::Result;
use crate::message::Message;
use std::collections::BTreeMap;

/// Options passed by a delivery registry. [`SimpleTransport`] accepts and
/// ignores them.
pub type DeliveryOptions = BTreeMap<String, String>;

/// The primitive that hands a composed message to the platform.
///
/// Receives the rendered recipient list, the subject, the body and the
/// CRLF-joined header block. The output is returned to the caller untouched.
///
/// Any `Fn(&str, &str, &str, &str) -> R` closure implements this trait.
pub trait MailFunction {
    /// Platform-defined result of a send.
    type Output;

    /// Submits one message.
    fn send(&self, to: &str, subject: &str, body: &str, headers: &str) -> Self::Output;
}

impl<F, R> MailFunction for F
where
    F: Fn(&str, &str, &str, &str) -> R,
{
    type Output = R;

    fn send(&self, to: &str, subject: &str, body: &str, headers: &str) -> R {
        self(to, subject, body, headers)
    }
}

/// A message transport.
pub trait Transport {
    /// Result of a successful composition, as reported by the backend.
    type Output;

    /// Composes and delivers `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be composed; the backend is not
    /// called in that case.
    fn deliver(&self, message: &Message, options: &DeliveryOptions) -> Result<Self::Output>;
}

/// Transport that composes a MIME message and calls a [`MailFunction`] once.
///
/// ```no_run
/// use mailpost::{DeliveryOptions, Message, SimpleTransport, Transport};
///
/// let transport = SimpleTransport::new();
/// let message = Message::new("Hello")
///     .from("me@example.com")
///     .to("you@example.com")
///     .body("text/plain", "Hi there");
///
/// if let Err(err) = transport.deliver(&message, &DeliveryOptions::new())? {
///     eprintln!("sendmail failed: {err}");
/// }
/// # Ok::<(), mailpost::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleTransport<M = Sendmail> {
    mail: M,
}

impl SimpleTransport<Sendmail> {
    /// Creates a transport using the local `sendmail` binary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MailFunction> SimpleTransport<M> {
    /// Creates a transport using the given send primitive.
    #[must_use]
    pub const fn with_mail_function(mail: M) -> Self {
        Self { mail }
    }

    /// Returns the send primitive.
    #[must_use]
    pub const fn mail_function(&self) -> &M {
        &self.mail
    }
}

impl<M: MailFunction> Transport for SimpleTransport<M> {
    type Output = M::Output;

    fn deliver(&self, message: &Message, _options: &DeliveryOptions) -> Result<M::Output> {
        let composed = compose(message)?;
        let to = format_addresses(&message.to);
        let headers = composed.header_block();

        tracing::debug!(
            to = %to,
            subject = %message.subject,
            body_len = composed.body.len(),
            "invoking mail function"
        );

        Ok(self.mail.send(&to, &message.subject, &composed.body, &headers))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_is_mail_function() {
        let mail = |to: &str, subject: &str, _body: &str, _headers: &str| format!("{to}/{subject}");
        assert_eq!(mail.send("a@x.com", "Hi", "", ""), "a@x.com/Hi");
    }

    #[test]
    fn test_output_passed_through() {
        let transport = SimpleTransport::with_mail_function(
            |_: &str, _: &str, _: &str, _: &str| -> std::result::Result<u8, String> {
                Err("queue full".to_string())
            },
        );
        let message = Message::new("Hi").to("a@x.com").body("text/plain", "x");

        let output = transport.deliver(&message, &DeliveryOptions::new()).unwrap();
        assert_eq!(output, Err("queue full".to_string()));
    }

    #[test]
    fn test_options_are_ignored() {
        let calls = Cell::new(0);
        let transport = SimpleTransport::with_mail_function(|_: &str, _: &str, _: &str, _: &str| {
            calls.set(calls.get() + 1);
        });
        let mut options = DeliveryOptions::new();
        options.insert("adapter".to_string(), "simple".to_string());

        transport
            .deliver(&Message::new("Hi").body("text/plain", "x"), &options)
            .unwrap();
        assert_eq!(calls.get(), 1);
    }
}
