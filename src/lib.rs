pub mod core;
pub mod exchanges;

pub use core::{config::ExchangeConfig, errors::ExchangeError, traits::VenueConnector, types::*};
pub use exchanges::bittrex::BittrexConnector;
pub use exchanges::coinmarketcap::CoinMarketCap;
