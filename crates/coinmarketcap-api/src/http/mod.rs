/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses unwrapped from the status envelope
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing client behavior
*/

pub mod client;
pub mod cryptocurrency;
pub mod error;

pub use error::{CoinMarketCapError, Result};

pub use client::{
    API_KEY_HEADER, ClientConfig, CoinMarketCapClient, PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
pub use cryptocurrency::Cryptocurrency;
