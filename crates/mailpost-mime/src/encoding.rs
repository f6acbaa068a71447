//! Base64 transfer encoding for attachment bodies.

use crate::error::Result;
use crate::wrap::{LINE_LENGTH, hard_wrap};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes data as Base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encodes data as Base64 and breaks the output every [`LINE_LENGTH`] characters.
///
/// Lines are separated by `\n`; the final line carries no terminator.
#[must_use]
pub fn encode_base64_wrapped(data: &[u8]) -> String {
    hard_wrap(&encode_base64(data), LINE_LENGTH)
}

/// Decodes Base64 data.
///
/// The composer never decodes; this is the inverse of
/// [`encode_base64_wrapped`] for reading composed attachment parts back.
/// Whitespace (including the line breaks inserted by
/// [`encode_base64_wrapped`]) is ignored.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(cleaned).map_err(Into::into)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base64_encode_decode() {
        let data = b"Hello, World!";
        let encoded = encode_base64(data);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");

        let decoded = decode_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_base64_wrapped_short_input_single_line() {
        let encoded = encode_base64_wrapped(b"hi");
        assert_eq!(encoded, "aGk=");
        assert!(!encoded.contains('\n'));
    }

    #[test]
    fn test_base64_wrapped_line_lengths() {
        let data = vec![0xABu8; 200];
        let encoded = encode_base64_wrapped(&data);
        let lines: Vec<&str> = encoded.split('\n').collect();

        // 200 bytes -> 268 base64 characters -> 70 + 70 + 70 + 58
        assert_eq!(lines.len(), 4);
        assert!(lines[..3].iter().all(|line| line.len() == 70));
        assert_eq!(lines[3].len(), 58);
    }

    #[test]
    fn test_base64_wrapped_exact_multiple_has_no_trailing_break() {
        // 105 bytes -> 140 characters, exactly two lines
        let encoded = encode_base64_wrapped(&[7u8; 105]);
        assert_eq!(encoded.len(), 141);
        assert!(!encoded.ends_with('\n'));
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_base64("not base64!").is_err());
    }

    proptest! {
        #[test]
        fn prop_wrapped_base64_decodes_to_input(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let encoded = encode_base64_wrapped(&data);
            prop_assert!(encoded.lines().all(|line| line.len() <= LINE_LENGTH));
            prop_assert_eq!(decode_base64(&encoded).unwrap(), data);
        }
    }
}
