//! Core YouTube API client functionality.

use crate::error::Error;
use crate::youtube_api::search::{SearchListResponse, SearchResult};
use crate::youtube_api::types::SearchOrder;
use eyre::Context;
use http::{HeaderValue, Method};
use std::fmt;
use std::future::Future;
use tracing::instrument;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// The parts of a search request that vary between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search term.
    pub query: String,
    /// How the API should order the results.
    pub order: SearchOrder,
    /// Upper bound on the number of results returned (0-50).
    pub max_results: u32,
}

impl SearchRequest {
    /// The query parameters for a `search.list` call, minus the credential.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("part", "id,snippet".to_string()),
            ("q", self.query.clone()),
            ("order", self.order.to_string()),
            ("maxResults", self.max_results.to_string()),
        ]
    }
}

/// Something that can answer a search query with a single page of results.
///
/// [`YouTubeClient`] is the real implementation; anything else is a stand-in.
pub trait SearchAdapter {
    /// Runs `request` and returns the matching results in the order the service ranked them.
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = eyre::Result<Vec<SearchResult>>>;
}

/// Client for the public parts of the YouTube Data API v3.
///
/// Requests are authorized with a developer key sent in the `X-Goog-Api-Key` header, so no
/// OAuth flow or token refresh is involved.
#[derive(Clone)]
pub struct YouTubeClient {
    /// The developer key sent along with every request.
    api_key: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a new YouTube API client that authorizes requests with `api_key`.
    ///
    /// Fails with [`Error::ServiceInit`] if the underlying HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(Error::ServiceInit)?;

        Ok(Self {
            api_key: api_key.into(),
            client,
        })
    }

    /// Makes a key-authorized HTTP request to the YouTube API with common error handling.
    ///
    /// The developer key travels in the `X-Goog-Api-Key` header rather than the query string, so
    /// it never shows up in the request span or in the URL that reqwest errors print. Any
    /// non-success status is turned into an error carrying the status code and whatever body
    /// the API sent back, which for quota and key problems holds the reason.
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for method-specific JSON parsing.
    #[instrument(skip(self), ret, level = tracing::Level::TRACE)]
    pub(crate) async fn make_request(
        &self,
        method: Method,
        url: &str,
        query_params: &[(&str, String)],
    ) -> eyre::Result<reqwest::Response> {
        let mut api_key =
            HeaderValue::from_str(&self.api_key).context("use developer key as a header value")?;
        api_key.set_sensitive(true);

        let response = self
            .client
            .request(method.clone(), url)
            .header("X-Goog-Api-Key", api_key)
            .query(query_params)
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} request failed with status {}: {}",
                method,
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Searches for videos, channels and playlists matching `request`.
    ///
    /// Only the first page is fetched; `nextPageToken` is returned but never followed.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    pub async fn search_list(&self, request: &SearchRequest) -> eyre::Result<SearchListResponse> {
        self.search_list_at(SEARCH_URL, request).await
    }

    /// [`Self::search_list`] against an arbitrary `search` endpoint.
    #[instrument(skip(self))]
    async fn search_list_at(
        &self,
        url: &str,
        request: &SearchRequest,
    ) -> eyre::Result<SearchListResponse> {
        let response = self
            .make_request(Method::GET, url, &request.query_params())
            .await?;

        let results: SearchListResponse = response
            .json()
            .await
            .context("parse YouTube search API response as JSON")?;

        tracing::debug!(
            returned_items = results.items.len(),
            total_results = results.page_info.total_results,
            "fetched search results"
        );

        Ok(results)
    }
}

impl SearchAdapter for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> eyre::Result<Vec<SearchResult>> {
        Ok(self.search_list(request).await?.items)
    }
}
