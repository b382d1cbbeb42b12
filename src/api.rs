// API client module: a small blocking HTTP client for the beer-tracking
// service. Wire types stay private to this file; everything leaving it has
// been normalized into the domain types below.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// One entry of a user's distinct-beer history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionRecord {
    pub beer_id: String,
    pub beer_name: String,
    /// Absent when the upstream entry carries no brewery.
    pub brewery_id: Option<String>,
}

/// One page of the distinct-beer listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistinctPage {
    pub results: Vec<ConsumptionRecord>,
    pub has_next_page: bool,
}

/// Country and social handle of a brewery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreweryMetadata {
    /// Empty when the upstream record has no country.
    pub country: String,
    pub social_handle: Option<String>,
}

/// The two upstream calls the report needs. The aggregator is written
/// against this trait so it can run without a network.
pub trait BeerApi {
    /// Fetch the page of `username`'s distinct beers starting at `offset`.
    fn user_distinct(&self, username: &str, offset: u32) -> Result<DistinctPage>;

    /// Fetch country and social handle for a brewery.
    fn brewery_info(&self, brewery_id: &str) -> Result<BreweryMetadata>;
}

/// HTTP implementation of [`BeerApi`]. Holds a reqwest blocking client,
/// the API base URL, the application key and optional session credentials.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    key: String,
    credentials: Option<(String, String)>,
}

impl ApiClient {
    /// Build a client from the `[api]` section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("xbeers/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            credentials: None,
        })
    }

    /// Attach user credentials; subsequent requests are authenticated.
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some((username.to_string(), password.to_string()));
        self
    }

    /// Returns whether requests are sent with credentials.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Basic authorization header when credentials are set.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some((user, password)) = &self.credentials {
            let token = STANDARD.encode(format!("{}:{}", user, password));
            let mut value = HeaderValue::from_str(&format!("Basic {}", token))
                .map_err(|e| Error::Config(format!("invalid credentials: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn get(&self, method: &str) -> Result<RequestBuilder> {
        let url = format!("{}/{}", self.base_url, method);
        Ok(self
            .client
            .get(url)
            .query(&[("key", self.key.as_str())])
            .headers(self.auth_headers()?))
    }

    /// Send the request and decode a JSON body, turning non-2xx statuses
    /// into `Error::Api` with the server's response text.
    fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let res = req.send()?;
        let status = res.status();
        let body = res.text()?;
        if !status.is_success() {
            return Err(Error::Api { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl BeerApi for ApiClient {
    fn user_distinct(&self, username: &str, offset: u32) -> Result<DistinctPage> {
        tracing::debug!(username, offset, "fetching distinct beers");
        let req = self
            .get("user_distinct")?
            .query(&[("user", username)])
            .query(&[("offset", offset)]);
        let raw: RawDistinctResponse = self.fetch(req)?;
        Ok(raw.into())
    }

    fn brewery_info(&self, brewery_id: &str) -> Result<BreweryMetadata> {
        tracing::debug!(brewery_id, "fetching brewery info");
        let req = self.get("brewery_info")?.query(&[("brewery_id", brewery_id)]);
        let raw: RawBreweryResponse = self.fetch(req)?;
        Ok(raw.results.into())
    }
}

// Wire format

#[derive(Deserialize, Debug)]
struct RawDistinctResponse {
    #[serde(default)]
    next_page: serde_json::Value,
    #[serde(default)]
    results: Vec<RawBeer>,
}

#[derive(Deserialize, Debug)]
struct RawBeer {
    #[serde(default, deserialize_with = "id_string")]
    beer_id: Option<String>,
    #[serde(default)]
    beer_name: Option<String>,
    #[serde(default, deserialize_with = "id_string")]
    brewery_id: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawBreweryResponse {
    results: RawBrewery,
}

#[derive(Deserialize, Debug)]
struct RawBrewery {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    twitter_handle: Option<String>,
}

impl From<RawDistinctResponse> for DistinctPage {
    fn from(raw: RawDistinctResponse) -> Self {
        DistinctPage {
            has_next_page: is_truthy(&raw.next_page),
            results: raw.results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RawBeer> for ConsumptionRecord {
    fn from(raw: RawBeer) -> Self {
        ConsumptionRecord {
            beer_id: raw.beer_id.unwrap_or_default(),
            beer_name: normalize_text(raw.beer_name.as_deref().unwrap_or_default()),
            brewery_id: raw.brewery_id.filter(|id| !id.is_empty()),
        }
    }
}

impl From<RawBrewery> for BreweryMetadata {
    fn from(raw: RawBrewery) -> Self {
        let social_handle = raw
            .twitter_handle
            .map(|h| normalize_text(h.trim_start_matches('@')))
            .filter(|h| !h.is_empty());
        BreweryMetadata {
            country: normalize_text(raw.country.as_deref().unwrap_or_default()),
            social_handle,
        }
    }
}

/// Identifiers arrive as either JSON numbers or strings.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s.trim().to_string()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Loose truthiness for the `next_page` marker, which upstream sends as a
/// URL, a boolean or nothing at all.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    }
}

/// Canonical form for names coming from upstream: trimmed, with internal
/// whitespace runs collapsed to a single space.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
