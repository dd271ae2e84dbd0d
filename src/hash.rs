use base64::{prelude::BASE64_STANDARD, Engine};
use log::debug;
use sha1::{Digest, Sha1};

use crate::error::DigestError;

/// Computes the SHA-1 of `text`, base64 encodes the 20-byte digest, then hex
/// encodes the bytes of that base64 string.
///
/// The result is always 56 lowercase hex characters.
pub fn text_hash(text: &str) -> String {
    debug!("Computing SHA-1 text hash for input of {} bytes", text.len());
    let digest = Sha1::digest(text.as_bytes());
    let encoded = BASE64_STANDARD.encode(digest);
    let hash = hex::encode(encoded);

    debug!("SHA-1 text hash is {}", hash);
    hash
}

/// Same as [`text_hash`], for bytes that have not yet been checked as UTF-8.
pub fn text_hash_utf8(bytes: &[u8]) -> Result<String, DigestError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text_hash(text))
}
