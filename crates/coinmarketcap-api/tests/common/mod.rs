/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinmarketcap-api tests

use coinmarketcap_api::{ClientConfig, CoinMarketCapClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(server: &MockServer) -> CoinMarketCapClient {
    CoinMarketCapClient::with_config_and_base_url(
        TEST_API_KEY,
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// Response body with a status envelope
pub fn envelope(error_code: i64, error_message: &str, credit_count: u64) -> Value {
    json!({
        "status": {
            "error_code": error_code,
            "error_message": error_message,
            "credit_count": credit_count,
        }
    })
}
