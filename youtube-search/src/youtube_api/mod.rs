//! YouTube Data API v3 search client.
//!
//! This module covers the one endpoint the search tool needs, `search.list`, authorized with a
//! plain developer key.
//!
//! # Search results
//!
//! A search can match three kinds of resources:
//!
//! - **Videos** (`youtube#video`), identified by a video ID
//! - **Channels** (`youtube#channel`), identified by a channel ID
//! - **Playlists** (`youtube#playlist`), identified by a playlist ID
//!
//! Each [`SearchResult`] carries a [`ResourceKind`] and the identifier field for that kind,
//! plus a snippet with the display title.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_search::youtube_api::{SearchAdapter, SearchOrder, SearchRequest, YouTubeClient};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new("developer-key")?;
//! let request = SearchRequest {
//!     query: "Google".to_string(),
//!     order: SearchOrder::ViewCount,
//!     max_results: 25,
//! };
//! for result in client.search(&request).await? {
//!     println!("{} {}", result.id.kind, result.title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use client::{SearchAdapter, SearchRequest, YouTubeClient};
pub use search::{ResourceId, ResourceKind, SearchListResponse, SearchResult, SearchResultSnippet};
pub use types::{PageInfo, SearchOrder};
