//! Top-level header assembly.

use crate::address::format_addresses;
use crate::message::{AddressField, Message};
use mailpost_mime::Headers;

/// Address fields and the header each one renders to, in output order.
pub const ADDRESS_HEADERS: [(AddressField, &str); 7] = [
    (AddressField::ReturnPath, "Return-Path"),
    (AddressField::Sender, "Sender"),
    (AddressField::From, "From"),
    (AddressField::ReplyTo, "Reply-To"),
    (AddressField::To, "To"),
    (AddressField::Cc, "Cc"),
    (AddressField::Bcc, "Bcc"),
];

/// Builds the header map from the caller's headers plus address fields,
/// `Date` and `MIME-Version`.
///
/// Computed values replace caller headers of the same name. An address
/// field with no addresses sets an empty value, which the serializer drops,
/// so a caller header of that name never reaches the wire.
#[must_use]
pub fn assemble_headers(message: &Message) -> Headers {
    let mut headers = message.headers.clone();

    for (field, name) in ADDRESS_HEADERS {
        headers.set(name, format_addresses(message.addresses(field)));
    }

    headers.set("Date", message.date.to_rfc2822());
    headers.set("MIME-Version", "1.0");
    headers
}
