//! Local `sendmail` binary as the default send primitive.

use super::MailFunction;
use mailpost_mime::CRLF;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Default location of the MTA submission binary.
pub const DEFAULT_PROGRAM: &str = "/usr/sbin/sendmail";

/// Errors that can occur while handing a message to `sendmail`.
#[derive(Debug, thiserror::Error)]
pub enum SendmailError {
    /// The process could not be started.
    #[error("could not spawn sendmail process: {0}")]
    Spawn(#[source] io::Error),

    /// Writing the message to the process failed.
    #[error("couldn't write to sendmail stdin: {0}")]
    Write(#[source] io::Error),

    /// Waiting for the process failed.
    #[error("couldn't wait for sendmail: {0}")]
    Wait(#[source] io::Error),

    /// The process exited unsuccessfully.
    #[error("sendmail did not exit successfully: {0}")]
    Exit(ExitStatus),
}

/// `sendmail` invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SendmailConfig {
    /// Path to the binary.
    pub program: PathBuf,
    /// Arguments; the defaults read recipients from the headers (`-t`) and
    /// keep lone dots in the body (`-i`).
    pub args: Vec<String>,
}

impl Default for SendmailConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            args: vec!["-t".to_string(), "-i".to_string()],
        }
    }
}

impl SendmailConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> SendmailConfigBuilder {
        SendmailConfigBuilder::default()
    }
}

/// Builder for [`SendmailConfig`].
#[derive(Debug, Clone, Default)]
pub struct SendmailConfigBuilder {
    program: Option<PathBuf>,
    args: Option<Vec<String>>,
}

impl SendmailConfigBuilder {
    /// Sets the binary path.
    #[must_use]
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Replaces the argument list.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the configuration, filling unset values with defaults.
    #[must_use]
    pub fn build(self) -> SendmailConfig {
        let defaults = SendmailConfig::default();
        SendmailConfig {
            program: self.program.unwrap_or(defaults.program),
            args: self.args.unwrap_or(defaults.args),
        }
    }
}

/// Pipes messages into a local `sendmail` compatible binary.
#[derive(Debug, Clone, Default)]
pub struct Sendmail {
    config: SendmailConfig,
}

impl Sendmail {
    /// Creates an adapter with the given configuration.
    #[must_use]
    pub const fn new(config: SendmailConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SendmailConfig {
        &self.config
    }

    fn submit(&self, message: &str) -> Result<(), SendmailError> {
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(SendmailError::Spawn)?;

        tracing::info!(program = %self.config.program.display(), "sendmail spawned");

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(message.as_bytes()),
            None => Err(io::Error::other("stdin not captured")),
        };
        if let Err(err) = &written {
            tracing::warn!(error = %err, "writing to sendmail failed");
        }

        // The child is always reaped; its exit status outranks a broken pipe.
        let status = child.wait().map_err(SendmailError::Wait)?;
        tracing::info!(%status, "sendmail exited");

        if !status.success() {
            return Err(SendmailError::Exit(status));
        }
        written.map_err(SendmailError::Write)
    }
}

impl MailFunction for Sendmail {
    type Output = Result<(), SendmailError>;

    fn send(&self, to: &str, subject: &str, body: &str, headers: &str) -> Self::Output {
        self.submit(&render_message(to, subject, body, headers))
    }
}

/// Renders the text piped to `sendmail`.
///
/// `To` and `Subject` come first, then the header block without any `To`
/// line of its own, a blank line and the body.
fn render_message(to: &str, subject: &str, body: &str, headers: &str) -> String {
    let mut message = String::new();

    if !to.is_empty() {
        let _ = write!(message, "To: {to}{CRLF}");
    }
    let _ = write!(message, "Subject: {subject}{CRLF}");

    for line in headers.split(CRLF).filter(|line| !line.is_empty()) {
        let is_to = line
            .split_once(':')
            .is_some_and(|(name, _)| name.trim().eq_ignore_ascii_case("to"));
        if !is_to {
            message.push_str(line);
            message.push_str(CRLF);
        }
    }

    message.push_str(CRLF);
    message.push_str(body);
    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SendmailConfig::default();
        assert_eq!(config.program, PathBuf::from("/usr/sbin/sendmail"));
        assert_eq!(config.args, vec!["-t", "-i"]);
    }

    #[test]
    fn test_config_builder() {
        let config = SendmailConfig::builder()
            .program("/usr/local/bin/msmtp")
            .args(["-t"])
            .build();
        assert_eq!(config.program, PathBuf::from("/usr/local/bin/msmtp"));
        assert_eq!(config.args, vec!["-t"]);

        let defaults = SendmailConfig::builder().build();
        assert_eq!(defaults, SendmailConfig::default());
    }

    #[test]
    fn test_render_message() {
        let rendered = render_message(
            "a@x.com",
            "Hi",
            "hello",
            "From: me@x.com\r\nTo: a@x.com\r\nMIME-Version: 1.0",
        );
        assert_eq!(
            rendered,
            "To: a@x.com\r\nSubject: Hi\r\nFrom: me@x.com\r\nMIME-Version: 1.0\r\n\r\nhello"
        );
    }

    #[test]
    fn test_render_message_without_recipient() {
        let rendered = render_message("", "Hi", "x", "");
        assert_eq!(rendered, "Subject: Hi\r\n\r\nx");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_deserialize_partial() {
        let config: SendmailConfig =
            serde_json::from_str(r#"{"program": "/opt/mta/sendmail"}"#).unwrap();
        assert_eq!(config.program, PathBuf::from("/opt/mta/sendmail"));
        assert_eq!(config.args, vec!["-t", "-i"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_send_through_program() {
        let config = SendmailConfig::builder()
            .program("cat")
            .args(Vec::<String>::new())
            .build();
        let sendmail = Sendmail::new(config);
        assert!(sendmail.send("a@x.com", "Hi", "body", "").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_send_reports_exit_status() {
        let config = SendmailConfig::builder()
            .program("sh")
            .args(["-c", "cat >/dev/null; exit 3"])
            .build();
        let err = Sendmail::new(config).send("a@x.com", "Hi", "body", "").unwrap_err();
        match err {
            SendmailError::Exit(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_status_over_broken_pipe() {
        let config = SendmailConfig::builder()
            .program("sh")
            .args(["-c", "exit 3"])
            .build();
        let body = "x".repeat(4 * 1024 * 1024);
        let err = Sendmail::new(config).send("a@x.com", "Hi", &body, "").unwrap_err();
        match err {
            SendmailError::Exit(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_error_surfaces_when_exit_is_clean() {
        let config = SendmailConfig::builder()
            .program("sh")
            .args(["-c", "exit 0"])
            .build();
        let body = "x".repeat(4 * 1024 * 1024);
        let err = Sendmail::new(config).send("a@x.com", "Hi", &body, "").unwrap_err();
        assert!(matches!(err, SendmailError::Write(_)));
    }

    #[test]
    fn test_send_missing_program() {
        let config = SendmailConfig::builder()
            .program("/nonexistent/mailpost-sendmail")
            .build();
        let err = Sendmail::new(config).send("a@x.com", "Hi", "body", "").unwrap_err();
        assert!(matches!(err, SendmailError::Spawn(_)));
    }
}
