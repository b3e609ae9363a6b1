use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::collections::HashMap;

type HmacSha512 = Hmac<Sha512>;

/// Result type for signing operations: (headers, final query string).
///
/// The returned query string is transmitted byte-for-byte as signed; the
/// transport must not re-encode or re-order it, since HMAC is sensitive to
/// parameter order.
pub type SignatureResult = Result<(HashMap<String, String>, String), ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations receive the fully assembled request URL (base URL plus
/// endpoint path) and the caller's encoded query string, and return the
/// headers to attach plus the final query string to send. Venue-specific
/// material such as the API key parameter or a nonce is merged in here.
pub trait Signer: Send + Sync {
    fn sign_request(&self, url: &str, query_string: &str) -> SignatureResult;
}

/// Compute a hex-encoded HMAC-SHA512 digest of `message` keyed by `secret`.
///
/// Empty inputs are a precondition violation: signing with an empty secret or
/// message would produce a syntactically valid but meaningless signature, so
/// both fail fast with an `AuthError`.
pub fn hmac_sha512(secret: &[u8], message: &[u8]) -> Result<String, ExchangeError> {
    if secret.is_empty() {
        return Err(ExchangeError::AuthError(
            "Refusing to sign with an empty secret".to_string(),
        ));
    }
    if message.is_empty() {
        return Err(ExchangeError::AuthError(
            "Refusing to sign an empty message".to_string(),
        ));
    }

    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;

    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
