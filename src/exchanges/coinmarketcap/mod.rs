pub mod builder;
pub mod rest;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_client, COINMARKETCAP_API_URL};
pub use rest::CoinMarketCap;
pub use types::{CmcGlobal, CmcTicker};
