//! Error types for message composition.

use std::io;
use std::path::PathBuf;

/// Result type alias for composition and delivery.
pub type Result<T> = std::result::Result<T, Error>;

/// Composition error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path-based attachment could not be read, or was empty.
    #[error("Can not attach path `{}`", .path.display())]
    AttachmentUnreadable {
        /// Path as given on the attachment.
        path: PathBuf,
        /// Underlying I/O error; `None` when the file yielded no data.
        #[source]
        source: Option<io::Error>,
    },
}

impl Error {
    /// Creates an unreadable-attachment error for `path`.
    #[must_use]
    pub fn attachment_unreadable(path: impl Into<PathBuf>, source: Option<io::Error>) -> Self {
        Self::AttachmentUnreadable {
            path: path.into(),
            source,
        }
    }
}
