//! Aliyun RPC request signing.
//!
//! Canonicalization and HMAC-SHA1 signature per the ECS API's RPC signature
//! convention (SignatureVersion 1.0): percent-encode every key and value,
//! sort by key, join with `&`, wrap into `GET&%2F&<encoded query>`, and sign
//! with the access key secret suffixed by `&`.

#![allow(clippy::expect_used)] // HMAC-SHA1 accepts keys of any length

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

/// RFC 3986 unreserved characters stay literal; everything else is encoded.
/// Notably space becomes `%20` (never `+`) and `*` becomes `%2A`.
const ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single key or value.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, ENCODE).to_string()
}

/// Sorted `key=value` pairs, both percent-encoded, joined with `&`.
///
/// The `BTreeMap` supplies the byte-order key sort the signature requires.
#[must_use]
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The string the signature is computed over:
/// `METHOD&%2F&<encoded canonical query>`.
#[must_use]
pub fn string_to_sign(method: &str, params: &BTreeMap<String, String>) -> String {
    format!(
        "{method}&{}&{}",
        percent_encode("/"),
        percent_encode(&canonical_query(params))
    )
}

/// Base64 HMAC-SHA1 over the string-to-sign, keyed by `<secret>&`.
#[must_use]
pub fn signature(secret: &str, string_to_sign: &str) -> String {
    let mut mac = Hmac::<Sha1>::new_from_slice(format!("{secret}&").as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(string_to_sign.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
