/*
[INPUT]:  `status` object carried by every API response
[OUTPUT]: Typed status envelope
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the envelope gains fields
*/

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status envelope present on every CoinMarketCap response, success or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub error_code: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub error_message: Option<String>,
    pub credit_count: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "lenient")]
    pub elapsed: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub notice: Option<String>,
}

/// Informational fields must not fail the envelope; an unexpected shape reads as `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }
}
