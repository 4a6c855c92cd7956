//! USDA FoodData Central client
//!
//! Blocking HTTP search against the FDC `foods/search` endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::normalize::normalize_search_response;
use super::{LookupError, LookupFood, LookupResult, NutrientLookup, MIN_QUERY_LEN};

pub const SEARCH_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";
pub const PAGE_SIZE: u32 = 10;
pub const DATA_TYPES: &str = "Foundation,SR Legacy";
const TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct UsdaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl UsdaClient {
    pub fn new(api_key: impl Into<String>) -> LookupResult<Self> {
        Self::with_base_url(api_key, SEARCH_URL)
    }

    /// Point the client at a different search endpoint (proxies, test servers)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> LookupResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }
        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }
}

impl NutrientLookup for UsdaClient {
    fn search(&self, query: &str) -> LookupResult<Vec<LookupFood>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let page_size = PAGE_SIZE.to_string();
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", page_size.as_str()),
                ("dataType", DATA_TYPES),
            ])
            .send()?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            return Err(LookupError::Status { status, body });
        }

        let body: Value = resp.json().map_err(|e| LookupError::Decode(e.to_string()))?;
        let foods = normalize_search_response(&body);
        tracing::debug!(query, results = foods.len(), "USDA search complete");
        Ok(foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_rejected() {
        assert!(matches!(UsdaClient::new("  "), Err(LookupError::MissingApiKey)));
    }

    #[test]
    fn test_short_query_skips_request() {
        // Unroutable base URL: any request would fail
        let client = UsdaClient::with_base_url("key", "http://127.0.0.1:9/none").unwrap();
        assert!(client.search(" a ").unwrap().is_empty());
    }
}
