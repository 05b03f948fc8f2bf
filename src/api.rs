//! News service gateway.
//!
//! This module owns the HTTP client and issues the three supported queries:
//! top headlines by source, sources listing by category, and full-text
//! search. Each operation is a single outbound GET with no retries; failures
//! are classified into [`NewsError`] at this boundary.
//!
//! URL construction is kept separate from dispatch so the query-parameter
//! rules (page-size capping, category forwarding, term encoding) stay
//! synchronous and unit-testable.

use crate::cli::Category;
use crate::config::AppConfig;
use crate::error::{NewsError, Result};
use crate::models::{Article, ArticlesResponse, Source, SourcesResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Hard upper bound the service accepts for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The service rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("newswire/", env!("CARGO_PKG_VERSION"));

/// Gateway to the news service. One instance per invocation.
pub struct NewsApi {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl NewsApi {
    /// Build a gateway from the process configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NewsError::Network)?;

        Ok(NewsApi {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// Most recent headlines from one source, in upstream order.
    #[instrument(level = "debug", skip(self))]
    pub async fn top_headlines(&self, source: &str, limit: Option<u32>) -> Result<Vec<Article>> {
        let url = self.top_headlines_url(source, limit);
        let body: ArticlesResponse = self.get_json(url).await?;
        Ok(body.articles)
    }

    /// Sources the service can fetch from, optionally filtered by category.
    #[instrument(level = "debug", skip(self))]
    pub async fn sources(&self, category: Option<Category>) -> Result<Vec<Source>> {
        let url = self.sources_url(category);
        let body: SourcesResponse = self.get_json(url).await?;
        Ok(body.sources)
    }

    /// Full-text search across all sources' articles.
    #[instrument(level = "debug", skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Article>> {
        let url = self.search_url(term);
        let body: ArticlesResponse = self.get_json(url).await?;
        Ok(body.articles)
    }

    fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path(path);
        url
    }

    fn top_headlines_url(&self, source: &str, limit: Option<u32>) -> Url {
        let mut url = self.endpoint_url("/v2/top-headlines");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("sources", source);
            if let Some(limit) = limit {
                let page_size = limit.min(MAX_PAGE_SIZE);
                query.append_pair("pageSize", &page_size.to_string());
            }
            query.append_pair("apiKey", &self.api_key);
        }
        url
    }

    fn sources_url(&self, category: Option<Category>) -> Url {
        let mut url = self.endpoint_url("/v2/sources");
        {
            let mut query = url.query_pairs_mut();
            if let Some(category) = category {
                query.append_pair("category", category.as_str());
            }
            query.append_pair("apiKey", &self.api_key);
        }
        url
    }

    fn search_url(&self, term: &str) -> Url {
        let mut url = self.endpoint_url("/v2/everything");
        // `query_pairs_mut` form-encodes spaces as `+`; the service wants
        // `%20`, so the term is percent-encoded up front.
        let query = format!(
            "q={}&apiKey={}",
            urlencoding::encode(term),
            urlencoding::encode(&self.api_key)
        );
        url.set_query(Some(&query));
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %redact_key(&url), "issuing request");
        let response = self.http.get(url).send().await.map_err(NewsError::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "news service refused the request");
            return Err(NewsError::from_status(status));
        }

        response.json::<T>().await.map_err(NewsError::Decode)
    }
}

/// Render a request URL for logging with the API key masked.
fn redact_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut redacted = url.clone();
    {
        let mut query = redacted.query_pairs_mut();
        query.clear();
        for (key, value) in &pairs {
            if key == "apiKey" {
                query.append_pair(key, "REDACTED");
            } else {
                query.append_pair(key, value);
            }
        }
    }
    redacted.to_string()
}
