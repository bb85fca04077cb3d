/*
[INPUT]:  Error sources (argument validation, HTTP, API envelope, URL, config)
[OUTPUT]: Structured error type for the whole crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the CoinMarketCap client
#[derive(Error, Debug)]
pub enum CoinMarketCapError {
    /// Required argument combination missing; raised before any request is sent
    #[error("Invalid arguments: {0}")]
    Argument(String),

    /// Envelope reported a non-zero `error_code`
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Body was not JSON or carried no usable status envelope
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoinMarketCapError {
    /// Provider error code, for `Api` errors only
    pub fn api_code(&self) -> Option<i64> {
        match self {
            CoinMarketCapError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, CoinMarketCapError::Api { .. })
    }

    pub fn is_argument_error(&self) -> bool {
        matches!(self, CoinMarketCapError::Argument(_))
    }
}

/// Result type alias for CoinMarketCap operations
pub type Result<T> = std::result::Result<T, CoinMarketCapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let err = CoinMarketCapError::Api {
            code: 400,
            message: "bad key".to_string(),
        };
        assert!(err.is_api_error());
        assert!(!err.is_argument_error());
        assert_eq!(err.api_code(), Some(400));
        assert_eq!(err.to_string(), "API error (code 400): bad key");
    }

    #[test]
    fn test_argument_error_has_no_code() {
        let err = CoinMarketCapError::Argument("missing ids".to_string());
        assert!(err.is_argument_error());
        assert_eq!(err.api_code(), None);
    }

    #[test]
    fn test_url_parse_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: CoinMarketCapError = parse_err.into();
        assert!(matches!(err, CoinMarketCapError::UrlParse(_)));
    }
}
