//! Cloudinary request signing.
//!
//! Parameters are sorted by name, joined as `name=value` pairs with `&`, the
//! account secret is appended, and the result is hashed with SHA-1 and
//! hex-encoded. Empty values are left out of the string to sign.

use std::collections::BTreeMap;

use sha1::{Digest, Sha1};

/// Signs upload parameters with the account secret.
#[must_use]
pub fn api_sign_request(params: &BTreeMap<&str, String>, secret: &str) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Signature for a request whose only signed parameter is the timestamp.
#[must_use]
pub fn sign_timestamp(timestamp: i64, secret: &str) -> String {
    let params = BTreeMap::from([("timestamp", timestamp.to_string())]);
    api_sign_request(&params, secret)
}
