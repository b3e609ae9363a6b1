pub mod bittrex;
pub mod coinmarketcap;
