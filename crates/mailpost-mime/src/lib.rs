//! # mailpost-mime
//!
//! MIME encoding primitives for composing outgoing email.
//!
//! ## Features
//!
//! - **Headers**: Ordered, case-insensitive header map rendered with CRLF
//! - **Boundaries**: Random multipart boundaries that avoid the enclosed content
//! - **Encoding**: Base64 with hard line wrapping
//! - **Wrapping**: Soft word wrap for text bodies
//! - **Content types**: Charset, multipart and `name=`/`filename=` parameters
//!
//! ## Quick Start
//!
//! ```
//! use mailpost_mime::{Boundary, Headers, MultipartKind};
//! use mailpost_mime::encoding::encode_base64_wrapped;
//!
//! let boundary = Boundary::generate();
//!
//! let mut headers = Headers::new();
//! headers.set("MIME-Version", "1.0");
//! headers.set("Content-Type", MultipartKind::Mixed.content_type(&boundary));
//! headers.set("Cc", "");
//!
//! assert!(headers.to_string().starts_with("MIME-Version: 1.0\r\nContent-Type: multipart/mixed"));
//! assert!(!headers.to_string().contains("Cc"));
//!
//! let encoded = encode_base64_wrapped(b"attachment bytes");
//! assert_eq!(encoded, "YXR0YWNobWVudCBieXRlcw==");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod boundary;
mod content_type;
mod error;
mod header;

pub mod encoding;
pub mod wrap;

pub use boundary::{BOUNDARY_PREFIX, Boundary};
pub use content_type::{
    DEFAULT_ATTACHMENT_TYPE, MultipartKind, has_parameter, text_content_type, with_parameter,
};
pub use error::{Error, Result};
pub use header::{CRLF, Headers};
