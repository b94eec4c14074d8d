//! HTTP client for the World Bank v2 API.

use reqwest::{header, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{encode_component, CountryQuery, IndicatorQuery, ListQuery, Query, SeriesQuery},
    ApiResponse, Error,
};

/// HTTP client for the World Bank v2 API.
///
/// Holds configuration only. Each request builds a fresh `reqwest::Client`,
/// so calls share no connection state and can run concurrently from a single
/// `&Client`.
#[derive(Clone, Debug, Default)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Creates a new client pointing at the production World Bank API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            config: ClientConfig::default().with_base_url(base_url),
        }
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the full request URL for `path` (already encoded) and `query`.
    pub fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.config.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            e
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout)
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Client(e)
            })
    }

    /// Performs a GET and returns the parsed JSON body.
    ///
    /// Anything but 200 OK is an [`Error::HttpStatus`]. This is the `?`-friendly
    /// primitive under the endpoint methods, which fold errors into an
    /// [`ApiResponse`] instead.
    pub async fn get_json<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, Error>
    where
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);

        let client = self.http_client()?;
        let mut request = client
            .get(url)
            .header(header::ACCEPT, "application/json");
        if let Some(host) = &self.config.host {
            request = request.header(header::HOST, host.as_str());
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            // The status alone decides the outcome; the body is only logged.
            let body = resp.text().await.unwrap_or_default();
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let parsed = serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            e
        })?;

        Ok(parsed)
    }

    async fn call<Q>(&self, path: &str, query: &Q) -> ApiResponse
    where
        Q: Query,
    {
        self.get_json(path, Some(query)).await.into()
    }

    /// Lists data sources (`/sources`).
    pub async fn get_sources(&self, query: &ListQuery) -> ApiResponse {
        self.call("/sources", query).await
    }

    /// Lists countries and aggregates (`/country`).
    pub async fn get_countries(&self, query: &CountryQuery) -> ApiResponse {
        self.call("/country", query).await
    }

    /// Lists indicator definitions (`/indicator`).
    pub async fn get_indicators(&self, query: &IndicatorQuery) -> ApiResponse {
        self.call("/indicator", query).await
    }

    /// Fetches one indicator's time series for one country
    /// (`/country/{country_code}/indicator/{indicator_code}`).
    ///
    /// Both codes are percent-encoded into the path. The World Bank accepts
    /// `;`-separated lists (`USA;CHN`) and `all` in either position.
    pub async fn get_country_indicator(
        &self,
        country_code: &str,
        indicator_code: &str,
        query: &SeriesQuery,
    ) -> ApiResponse {
        let path = format!(
            "/country/{}/indicator/{}",
            encode_component(country_code),
            encode_component(indicator_code)
        );
        self.call(&path, query).await
    }

    /// Fetches an indicator across all countries (`/indicator/{indicator_code}`).
    pub async fn get_indicator_values(
        &self,
        indicator_code: &str,
        query: &SeriesQuery,
    ) -> ApiResponse {
        let path = format!("/indicator/{}", encode_component(indicator_code));
        self.call(&path, query).await
    }

    /// Lists topics (`/topic`).
    pub async fn get_topic_list(&self, query: &ListQuery) -> ApiResponse {
        self.call("/topic", query).await
    }

    /// Lists regions (`/region`).
    pub async fn get_region_list(&self, query: &ListQuery) -> ApiResponse {
        self.call("/region", query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
