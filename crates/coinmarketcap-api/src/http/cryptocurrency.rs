/*
[INPUT]:  Typed cryptocurrency requests (ids, slugs, symbols, conversions)
[OUTPUT]: Raw JSON bodies (status envelope + data)
[POS]:    HTTP layer - /v1/cryptocurrency endpoints
[UPDATE]: When adding new cryptocurrency endpoints or parameters
*/

use serde_json::Value;

use crate::http::{CoinMarketCapClient, Result};
use crate::types::{IdMapRequest, InfoRequest, ListingsRequest, QuotesRequest};

const MAP_ENDPOINT: &str = "/v1/cryptocurrency/map";
const INFO_ENDPOINT: &str = "/v1/cryptocurrency/info";
const LISTINGS_LATEST_ENDPOINT: &str = "/v1/cryptocurrency/listings/latest";
const QUOTES_LATEST_ENDPOINT: &str = "/v1/cryptocurrency/quotes/latest";

/// Cryptocurrency endpoint group, obtained from [`CoinMarketCapClient::cryptocurrency`]
#[derive(Debug, Clone, Copy)]
pub struct Cryptocurrency<'a> {
    client: &'a CoinMarketCapClient,
}

impl<'a> Cryptocurrency<'a> {
    pub(crate) fn new(client: &'a CoinMarketCapClient) -> Self {
        Self { client }
    }

    /// Map of CoinMarketCap ids to currencies
    ///
    /// GET /v1/cryptocurrency/map?listing_status={status}&start={start}&limit={limit}&symbol={symbols}
    pub async fn idmap(&self, req: &IdMapRequest) -> Result<Value> {
        self.client.get(MAP_ENDPOINT, req).await
    }

    /// Static metadata (logo, description, links) for one or more currencies
    ///
    /// GET /v1/cryptocurrency/info?id={ids}&slug={slugs}&symbol={symbols}
    pub async fn info(&self, req: &InfoRequest) -> Result<Value> {
        req.validate()?;
        self.client.get(INFO_ENDPOINT, req).await
    }

    /// Paginated list of active currencies with latest market data
    ///
    /// GET /v1/cryptocurrency/listings/latest
    pub async fn list(&self, req: &ListingsRequest) -> Result<Value> {
        self.client.get(LISTINGS_LATEST_ENDPOINT, req).await
    }

    /// Latest market quotes for one or more currencies
    ///
    /// GET /v1/cryptocurrency/quotes/latest
    pub async fn quotes(&self, req: &QuotesRequest) -> Result<Value> {
        req.validate()?;
        self.client.get(QUOTES_LATEST_ENDPOINT, req).await
    }
}
