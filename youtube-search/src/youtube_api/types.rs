//! Shared types for the YouTube API client.

use std::fmt;

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    ///
    /// For searches this is an approximation and may be far larger than what can be paged through.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// The order in which the `search.list` endpoint returns resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list#order>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchOrder {
    /// Reverse chronological order based on the date they were created.
    Date,
    /// Highest to lowest rating.
    Rating,
    /// Relevance to the search query.
    Relevance,
    /// Alphabetically by title.
    Title,
    /// Channels in descending order of their number of uploaded videos.
    VideoCount,
    /// Highest to lowest number of views.
    #[default]
    ViewCount,
}

impl SearchOrder {
    /// The value the API expects in the `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
            Self::Title => "title",
            Self::VideoCount => "videoCount",
            Self::ViewCount => "viewCount",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_order_query_values() {
        assert_eq!(SearchOrder::default(), SearchOrder::ViewCount);
        assert_eq!(SearchOrder::ViewCount.to_string(), "viewCount");
        assert_eq!(SearchOrder::VideoCount.as_str(), "videoCount");
        assert_eq!(SearchOrder::Relevance.as_str(), "relevance");
    }

    #[test]
    fn page_info_uses_camel_case() {
        let info: PageInfo =
            serde_json::from_str(r#"{"totalResults": 1000000, "resultsPerPage": 25}"#).unwrap();
        assert_eq!(
            info,
            PageInfo {
                total_results: 1_000_000,
                results_per_page: 25,
            }
        );
    }
}
