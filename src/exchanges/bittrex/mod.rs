pub mod builder;
pub mod connector;
pub mod conversions;
pub mod pair;
pub mod rest;
pub mod signer;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_connector, BITTREX_API_URL};
pub use connector::BittrexConnector;
pub use pair::{format_pair, format_pair_normalized};
pub use rest::{BittrexRestClient, MAX_HISTORY_DEPTH, MAX_ORDER_BOOK_DEPTH};
pub use signer::BittrexSigner;
