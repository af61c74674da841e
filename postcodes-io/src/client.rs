//! postcodes.io HTTP client.
//!
//! Provides async methods for the postcode lookup, bulk lookup and reverse
//! geocoding endpoints. The client holds read-only configuration, so one
//! instance can be shared freely across tasks.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::PostcodesError;
use crate::types::{
    BulkPostcodeLookupRequest, BulkPostcodeLookupResponse, PostcodeLookupResponse,
    ReverseGeocodingRequest, ReverseGeocodingResponse,
};

/// Production base URL for the postcodes.io API.
const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the postcodes.io client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing against a stub server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-supplied `reqwest::Client` as the transport.
    ///
    /// The supplied client is used verbatim, including its own timeout and
    /// connection settings; the `with_timeout` value is ignored in that case.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http_client = Some(http);
        self
    }
}

/// Client for the postcodes.io API.
///
/// All methods are single-shot: no caching, no retries, no rate limiting.
/// The HTTP status code of the response is never inspected — the API embeds
/// the authoritative status in the response envelope, and error bodies (e.g.
/// a 404 for an unknown postcode) decode like any other envelope. To cancel
/// an in-flight call, drop its future (e.g. via `tokio::time::timeout`).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, PostcodesError> {
        let http = match config.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()?,
        };

        Ok(Self {
            http,
            base_url: config.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        })
    }

    /// Look up a single postcode (case and space insensitive).
    ///
    /// `GET {base}/postcodes/:postcode`. An unknown postcode yields an
    /// envelope with `status: 404` and no result, not an `Err`.
    pub async fn postcode_lookup(
        &self,
        postcode: &str,
    ) -> Result<PostcodeLookupResponse, PostcodesError> {
        let url = format!("{}/postcodes/{}", self.base_url, postcode);

        let body = self.get(&url, &[]).await?;
        decode(&body)
    }

    /// Look up up to 100 postcodes in one call.
    ///
    /// `POST {base}/postcodes` with body `{"postcodes":[...]}`. When the
    /// request carries filters they are appended to the URL as
    /// `?filter=f1,f2,...` in the order given, and the server returns only
    /// those fields of each match.
    pub async fn bulk_postcode_lookup(
        &self,
        request: &BulkPostcodeLookupRequest,
    ) -> Result<BulkPostcodeLookupResponse, PostcodesError> {
        let url = bulk_lookup_url(&self.base_url, &request.filters);

        let body = self.post(&url, request).await?;
        decode(&body)
    }

    /// Find the postcodes nearest to a coordinate pair.
    ///
    /// `GET {base}/postcodes?lon=...&lat=...`. Optional parameters are sent
    /// only when set: `limit` and `radius` when positive, `widesearch` when
    /// true. Absent parameters fall back to the API's own defaults.
    pub async fn reverse_geocoding(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<ReverseGeocodingResponse, PostcodesError> {
        let url = format!("{}/postcodes", self.base_url);
        let query = reverse_geocoding_query(request);

        let body = self.get(&url, &query).await?;
        decode(&body)
    }

    /// Execute a GET request and return the raw response body.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, PostcodesError> {
        debug!(url, "GET");

        let response = self.http.get(url).query(query).send().await?;
        Ok(response.text().await?)
    }

    /// Execute a POST request with a JSON body and return the raw response
    /// body.
    async fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<String, PostcodesError> {
        debug!(url, "POST");

        let response = self.http.post(url).json(body).send().await?;
        Ok(response.text().await?)
    }
}

/// Decode a response body into the expected envelope.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, PostcodesError> {
    serde_json::from_str(body).map_err(|e| PostcodesError::Decode {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

/// Build the bulk lookup URL, appending the filter list as a query parameter
/// when non-empty. Filters keep their caller-supplied order and are joined
/// with literal commas.
fn bulk_lookup_url(base_url: &str, filters: &[String]) -> String {
    let url = format!("{base_url}/postcodes");

    if filters.is_empty() {
        url
    } else {
        format!("{url}?filter={}", filters.join(","))
    }
}

/// Build the reverse geocoding query pairs.
///
/// `lon` and `lat` always come first, formatted with `f64`'s `Display`
/// (shortest representation that round-trips). Zero and false values for the
/// optional parameters are omitted entirely rather than sent as `0`/`false`.
fn reverse_geocoding_query(request: &ReverseGeocodingRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("lon", request.longitude.to_string()),
        ("lat", request.latitude.to_string()),
    ];

    if request.limit > 0 {
        query.push(("limit", request.limit.to_string()));
    }
    if request.radius > 0.0 {
        query.push(("radius", request.radius.to_string()));
    }
    if request.wide_search {
        query.push(("widesearch", "true".to_string()));
    }

    query
}
