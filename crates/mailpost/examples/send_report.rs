#![allow(clippy::doc_markdown, clippy::uninlined_format_args)]
//! Example: compose a report with an attachment and hand it to sendmail
//!
//! Set `MAILPOST_DRY_RUN=1` to print the composed message instead of calling
//! the local MTA.
//!
//! ## Running
//!
//! ```bash
//! export MAILPOST_TO="you@example.com"
//! export MAILPOST_ATTACH="./report.pdf"
//! RUST_LOG=mailpost=debug cargo run --package mailpost --example send_report
//! ```

use mailpost::{Attachment, DeliveryOptions, Message, SimpleTransport, Transport};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = env::var("MAILPOST_TO").unwrap_or_else(|_| "root@localhost".to_string());

    let mut message = Message::new("Nightly report")
        .from("reports@localhost")
        .to(to.as_str())
        .header("X-Mailer", "mailpost")
        .body("text/plain", "The nightly report is attached.")
        .body("text/html", "<p>The nightly report is <b>attached</b>.</p>");

    if let Ok(path) = env::var("MAILPOST_ATTACH") {
        message = message.attach(
            Attachment::from_path(&path)
                .content_type("application/octet-stream")
                .disposition("attachment")
                .filename(path.rsplit('/').next().unwrap_or(&path)),
        );
    }

    let options = DeliveryOptions::new();

    if env::var_os("MAILPOST_DRY_RUN").is_some() {
        let transport = SimpleTransport::with_mail_function(
            |to: &str, subject: &str, body: &str, headers: &str| {
                println!("To: {}\nSubject: {}\n{}\n\n{}", to, subject, headers, body);
            },
        );
        transport.deliver(&message, &options)?;
        return Ok(());
    }

    SimpleTransport::new().deliver(&message, &options)??;
    println!("Message handed to sendmail for {}", to);
    Ok(())
}
