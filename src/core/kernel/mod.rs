//! Unified transport layer shared by all venue clients.
//!
//! The kernel contains no venue-specific logic. It provides:
//!
//! - `RestClient`: HTTP GET transport with query parameters, two-part
//!   timeouts and optional https-only proxying
//! - `Signer`: pluggable request authentication
//! - `NonceGenerator`: monotonic replay-protection counter
//!
//! Venue modules plug their own `Signer` implementation into the kernel and
//! layer typed endpoint wrappers on top of `RestClient`.

pub mod nonce;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use nonce::NonceGenerator;
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{hmac_sha512, SignatureResult, Signer};
