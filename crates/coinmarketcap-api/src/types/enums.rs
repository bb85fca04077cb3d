/*
[INPUT]:  CoinMarketCap enumerated query values
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the API adds new enumerated values
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptocurrencyType {
    #[default]
    All,
    Tokens,
    Coins,
}

/// Field used to order `/v1/cryptocurrency/listings/latest`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "date_added")]
    DateAdded,
    #[default]
    #[serde(rename = "market_cap")]
    MarketCap,
    #[serde(rename = "market_cap_strict")]
    MarketCapStrict,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "circulating_supply")]
    CirculatingSupply,
    #[serde(rename = "total_supply")]
    TotalSupply,
    #[serde(rename = "max_supply")]
    MaxSupply,
    #[serde(rename = "num_market_pairs")]
    NumMarketPairs,
    #[serde(rename = "volume_24h")]
    Volume24h,
    #[serde(rename = "percent_change_1h")]
    PercentChange1h,
    #[serde(rename = "percent_change_24h")]
    PercentChange24h,
    #[serde(rename = "percent_change_7d")]
    PercentChange7d,
}
