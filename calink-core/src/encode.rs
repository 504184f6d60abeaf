//! Query component encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by a browser's `encodeURIComponent`: everything except
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a text field for use as a query parameter value.
/// A missing field encodes as the empty string.
pub fn encode_component(value: Option<&str>) -> String {
    value
        .map(|v| utf8_percent_encode(v, COMPONENT).to_string())
        .unwrap_or_default()
}
