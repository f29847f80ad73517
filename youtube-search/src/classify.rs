//! Grouping of search results by the kind of resource they point at.

use crate::youtube_api::{ResourceKind, SearchResult};
use indexmap::IndexMap;

/// Search results split by kind, each group mapping identifier to title.
///
/// Groups iterate in the order identifiers were first seen, which for a `viewCount` search
/// is most viewed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    pub videos: IndexMap<String, String>,
    pub channels: IndexMap<String, String>,
    pub playlists: IndexMap<String, String>,
}

impl GroupedResults {
    /// Sorts each result into the group for its kind.
    ///
    /// Results of unrecognized kinds are dropped. When two results share a kind and identifier,
    /// the later title wins but the entry keeps its original position.
    #[tracing::instrument(skip_all)]
    pub fn classify(results: impl IntoIterator<Item = SearchResult>) -> Self {
        let mut grouped = Self::default();
        for result in results {
            let group = match &result.id.kind {
                ResourceKind::Video => &mut grouped.videos,
                ResourceKind::Channel => &mut grouped.channels,
                ResourceKind::Playlist => &mut grouped.playlists,
                ResourceKind::Other(kind) => {
                    tracing::trace!(
                        kind = kind.as_str(),
                        title = result.title(),
                        "skipping result"
                    );
                    continue;
                }
            };

            let id = match result.id.identifier() {
                Some(id) => id.to_string(),
                None => {
                    tracing::warn!(
                        kind = %result.id.kind,
                        title = result.title(),
                        "search result has no identifier"
                    );
                    String::new()
                }
            };
            group.insert(id, result.snippet.title);
        }

        tracing::debug!(
            videos = grouped.videos.len(),
            channels = grouped.channels.len(),
            playlists = grouped.playlists.len(),
            "classified search results"
        );
        grouped
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.videos.len() + self.channels.len() + self.playlists.len()
    }

    /// Whether no result made it into any group.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
