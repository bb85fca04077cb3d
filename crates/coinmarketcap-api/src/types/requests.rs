/*
[INPUT]:  Endpoint arguments supplied by callers
[OUTPUT]: Typed request structs serialized into query strings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When an endpoint gains or renames a query parameter
*/

use std::fmt::Display;

use serde::{Serialize, Serializer};

use super::enums::{CryptocurrencyType, ListingStatus, SortDir, SortField};
use crate::http::{CoinMarketCapError, Result};

/// A single value or a list of values for a comma-separated query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListArg<T> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T: Display> ListArg<T> {
    /// Render as the wire value: scalars as-is, sequences joined with `,`
    pub fn normalize(&self) -> String {
        match self {
            ListArg::Scalar(value) => value.to_string(),
            ListArg::Sequence(values) => values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl<T: Display> Serialize for ListArg<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.normalize())
    }
}

impl<T> From<Vec<T>> for ListArg<T> {
    fn from(values: Vec<T>) -> Self {
        ListArg::Sequence(values)
    }
}

impl<T: Clone> From<&[T]> for ListArg<T> {
    fn from(values: &[T]) -> Self {
        ListArg::Sequence(values.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for ListArg<T> {
    fn from(values: [T; N]) -> Self {
        ListArg::Sequence(values.into())
    }
}

impl From<u64> for ListArg<u64> {
    fn from(value: u64) -> Self {
        ListArg::Scalar(value)
    }
}

impl From<String> for ListArg<String> {
    fn from(value: String) -> Self {
        ListArg::Scalar(value)
    }
}

impl From<&str> for ListArg<String> {
    fn from(value: &str) -> Self {
        ListArg::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for ListArg<String> {
    fn from(values: Vec<&str>) -> Self {
        ListArg::Sequence(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ListArg<String> {
    fn from(values: &[&str]) -> Self {
        ListArg::Sequence(values.iter().map(|value| value.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ListArg<String> {
    fn from(values: [&str; N]) -> Self {
        ListArg::Sequence(values.iter().map(|value| value.to_string()).collect())
    }
}

/// GET /v1/cryptocurrency/map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdMapRequest {
    pub listing_status: ListingStatus,
    /// 1-based offset of the first result
    pub start: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ListArg<String>>,
}

impl Default for IdMapRequest {
    fn default() -> Self {
        Self {
            listing_status: ListingStatus::Active,
            start: 1,
            limit: None,
            symbol: None,
        }
    }
}

/// GET /v1/cryptocurrency/info
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InfoRequest {
    #[serde(rename = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<ListArg<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<ListArg<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ListArg<String>>,
}

impl InfoRequest {
    pub fn validate(&self) -> Result<()> {
        if self.ids.is_none() && self.slug.is_none() && self.symbol.is_none() {
            return Err(CoinMarketCapError::Argument(
                "one of ids, slug or symbol must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

/// GET /v1/cryptocurrency/listings/latest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingsRequest {
    pub start: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Currency symbols to quote prices in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<ListArg<String>>,
    /// CoinMarketCap ids of the currencies to quote prices in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_id: Option<ListArg<u64>>,
    #[serde(rename = "sort")]
    pub sort_by: SortField,
    pub sort_dir: SortDir,
    pub cryptocurrency_type: CryptocurrencyType,
}

impl Default for ListingsRequest {
    fn default() -> Self {
        Self {
            start: 1,
            limit: None,
            convert: None,
            convert_id: None,
            sort_by: SortField::MarketCap,
            sort_dir: SortDir::Asc,
            cryptocurrency_type: CryptocurrencyType::All,
        }
    }
}

/// GET /v1/cryptocurrency/quotes/latest
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuotesRequest {
    #[serde(rename = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<ListArg<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<ListArg<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<ListArg<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<ListArg<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_id: Option<ListArg<u64>>,
}

impl QuotesRequest {
    pub fn validate(&self) -> Result<()> {
        if self.ids.is_none() && self.slug.is_none() && self.symbol.is_none() {
            return Err(CoinMarketCapError::Argument(
                "one of ids, slug or symbol must be provided".to_string(),
            ));
        }
        if self.convert.is_none() && self.convert_id.is_none() {
            return Err(CoinMarketCapError::Argument(
                "one of convert or convert_id must be provided".to_string(),
            ));
        }
        Ok(())
    }
}
