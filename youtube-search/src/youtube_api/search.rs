//! YouTube Search API types.
//!
//! A search result is a thin reference to some other resource. Its `id` says which kind of
//! resource matched (video, channel or playlist) and carries the identifier in a field specific
//! to that kind, while the `snippet` repeats a few display details such as the title.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response structure for the `search.list` API call.
///
/// Contains a list of [`SearchResult`] resources that match the query parameters,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    #[serde(default)]
    pub kind: String,
    /// The Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    /// The region code that was used for the search query.
    #[serde(rename = "regionCode", skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Zeroed when the response leaves it out; only `items` is needed to report results.
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// A list of results that match the search criteria.
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// A `searchResult` resource describes one item that matched a search query.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifies the resource that matched the search request.
    pub id: ResourceId,
    /// Basic details about the matching resource.
    pub snippet: SearchResultSnippet,
}

impl SearchResult {
    /// Creates a result of the given kind whose kind-specific identifier is `id`.
    ///
    /// For [`ResourceKind::Other`] no identifier field exists, so `id` is dropped.
    pub fn new(kind: ResourceKind, id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let mut resource = ResourceId {
            kind,
            video_id: None,
            channel_id: None,
            playlist_id: None,
        };
        match resource.kind {
            ResourceKind::Video => resource.video_id = Some(id),
            ResourceKind::Channel => resource.channel_id = Some(id),
            ResourceKind::Playlist => resource.playlist_id = Some(id),
            ResourceKind::Other(_) => {}
        }
        Self {
            id: resource,
            snippet: SearchResultSnippet {
                title: title.into(),
                description: None,
                channel_id: None,
                channel_title: None,
                published_at: None,
            },
        }
    }

    /// The display title of the matching resource.
    pub fn title(&self) -> &str {
        &self.snippet.title
    }
}

/// Identifies the resource that matched a search request.
///
/// Exactly one of the identifier fields is set, chosen by `kind`.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#id>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceId {
    /// The type of the API resource.
    pub kind: ResourceKind,
    /// Set if `kind` is `youtube#video`.
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Set if `kind` is `youtube#channel`.
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Set if `kind` is `youtube#playlist`.
    #[serde(rename = "playlistId", skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

impl ResourceId {
    /// The identifier that belongs to this resource's kind.
    ///
    /// Returns `None` for unrecognized kinds and when the API omitted the field.
    pub fn identifier(&self) -> Option<&str> {
        match self.kind {
            ResourceKind::Video => self.video_id.as_deref(),
            ResourceKind::Channel => self.channel_id.as_deref(),
            ResourceKind::Playlist => self.playlist_id.as_deref(),
            ResourceKind::Other(_) => None,
        }
    }
}

/// The kind of resource a search result points at.
///
/// Tags the API may add in the future end up in [`ResourceKind::Other`] rather than failing
/// deserialization of the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
    /// `youtube#video`
    Video,
    /// `youtube#channel`
    Channel,
    /// `youtube#playlist`
    Playlist,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl From<String> for ResourceKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "youtube#video" => Self::Video,
            "youtube#channel" => Self::Channel,
            "youtube#playlist" => Self::Playlist,
            _ => Self::Other(kind),
        }
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Other(kind) => kind,
            known => known.to_string(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "youtube#video"),
            Self::Channel => write!(f, "youtube#channel"),
            Self::Playlist => write!(f, "youtube#playlist"),
            Self::Other(kind) => write!(f, "{kind}"),
        }
    }
}

/// The snippet object contains basic details about a search result.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    /// The title of the search result.
    pub title: String,
    /// A description of the search result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The ID of the channel that published the resource.
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// The title of the channel that published the resource.
    #[serde(rename = "channelTitle", skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// The creation date and time of the resource.
    ///
    /// The value is specified in ISO 8601 format.
    #[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RESPONSE: &str = r#"{
      "kind": "youtube#searchListResponse",
      "etag": "q4ibjmYp1KA3RqMF4jFLl6PBwOg",
      "nextPageToken": "CAIQAA",
      "regionCode": "NL",
      "pageInfo": { "totalResults": 1000000, "resultsPerPage": 2 },
      "items": [
        {
          "kind": "youtube#searchResult",
          "etag": "QCsHBifbaernVCbLv8Cu6rAeaDQ",
          "id": { "kind": "youtube#video", "videoId": "TmGD9p8T_QM" },
          "snippet": {
            "publishedAt": "2019-04-29T18:05:01Z",
            "channelId": "UCK8sQmJBp8GCxrOtXWBpyEA",
            "title": "Google Nest Hub Max",
            "description": "Introducing Google Nest Hub Max.",
            "channelTitle": "Google",
            "liveBroadcastContent": "none"
          }
        },
        {
          "kind": "youtube#searchResult",
          "etag": "Zf6bT9YxlMfqf6cOytqNBl0vEYI",
          "id": { "kind": "youtube#channel", "channelId": "UCK8sQmJBp8GCxrOtXWBpyEA" },
          "snippet": {
            "publishedAt": "2005-09-18T22:37:10Z",
            "channelId": "UCK8sQmJBp8GCxrOtXWBpyEA",
            "title": "Google",
            "description": "Experience the world of Google on our official YouTube channel.",
            "channelTitle": "Google"
          }
        }
      ]
    }"#;

    #[test]
    fn deserialize_search_list_response() {
        let response: SearchListResponse = serde_json::from_str(RESPONSE).unwrap();
        assert_eq!(response.kind, "youtube#searchListResponse");
        assert_eq!(response.next_page_token.as_deref(), Some("CAIQAA"));
        assert_eq!(response.region_code.as_deref(), Some("NL"));
        assert_eq!(response.page_info.results_per_page, 2);
        assert_eq!(response.items.len(), 2);

        let video = &response.items[0];
        assert_eq!(video.id.kind, ResourceKind::Video);
        assert_eq!(video.id.identifier(), Some("TmGD9p8T_QM"));
        assert_eq!(video.title(), "Google Nest Hub Max");
        assert_eq!(video.snippet.channel_title.as_deref(), Some("Google"));
        assert_eq!(
            video.snippet.published_at,
            Some("2019-04-29T18:05:01Z".parse().unwrap())
        );

        let channel = &response.items[1];
        assert_eq!(channel.id.kind, ResourceKind::Channel);
        assert_eq!(channel.id.identifier(), Some("UCK8sQmJBp8GCxrOtXWBpyEA"));
    }

    #[test]
    fn missing_items_is_an_empty_page() {
        let response: SearchListResponse = serde_json::from_str(
            r#"{"kind": "youtube#searchListResponse",
                "pageInfo": {"totalResults": 0, "resultsPerPage": 0}}"#,
        )
        .unwrap();
        assert!(response.items.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn bare_items_still_decode() {
        let response: SearchListResponse = serde_json::from_str(
            r#"{"items": [{"id": {"kind": "youtube#video", "videoId": "v1"},
                           "snippet": {"title": "A"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.kind, "");
        assert_eq!(response.page_info, PageInfo::default());
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id.identifier(), Some("v1"));
    }

    #[test]
    fn resource_kind_tags() {
        let kinds: Vec<ResourceKind> = serde_json::from_str(
            r#"["youtube#video", "youtube#channel", "youtube#playlist", "youtube#movie"]"#,
        )
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Video,
                ResourceKind::Channel,
                ResourceKind::Playlist,
                ResourceKind::Other("youtube#movie".to_string()),
            ]
        );

        assert_eq!(
            serde_json::to_value(&kinds).unwrap(),
            serde_json::json!([
                "youtube#video",
                "youtube#channel",
                "youtube#playlist",
                "youtube#movie"
            ])
        );
    }

    #[test]
    fn identifier_follows_kind() {
        // the API never does this, but the kind decides which field counts
        let id = ResourceId {
            kind: ResourceKind::Playlist,
            video_id: Some("v".into()),
            channel_id: Some("c".into()),
            playlist_id: Some("p".into()),
        };
        assert_eq!(id.identifier(), Some("p"));

        let other = SearchResult::new(ResourceKind::Other("youtube#movie".into()), "m1", "M");
        assert_eq!(other.id.identifier(), None);

        let playlist = SearchResult::new(ResourceKind::Playlist, "PL1", "Mix");
        assert_eq!(playlist.id.playlist_id.as_deref(), Some("PL1"));
        assert_eq!(playlist.id.video_id, None);
    }
}
