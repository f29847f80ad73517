//! Command-line arguments and the configuration derived from them.

use crate::error::Error;
use crate::youtube_api::{SearchOrder, SearchRequest};
use clap::Parser;

/// Search YouTube and list matching videos, channels and playlists
#[derive(Parser, Debug, Clone)]
#[command(name = "youtube-search")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Search term
    #[arg(long, default_value = "Google")]
    pub query: String,

    /// developer-key
    #[arg(long)]
    pub key: String,

    /// Max YouTube results
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=50))]
    pub max_results: u32,
}

/// Validated settings for one search run.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub query: String,
    pub api_key: String,
    pub max_results: u32,
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("query", &self.query)
            .field("api_key", &"<redacted>")
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl SearchConfig {
    /// Checks the parsed arguments and turns them into a configuration.
    ///
    /// A key that is empty once surrounding whitespace is removed is rejected with
    /// [`Error::MissingApiKey`].
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let api_key = args.key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        Ok(Self {
            api_key: api_key.to_string(),
            query: args.query,
            max_results: args.max_results,
        })
    }

    /// The request to send; results are always ordered most viewed first.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            order: SearchOrder::ViewCount,
            max_results: self.max_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("youtube-search").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&["--key", "abc"]).unwrap();
        assert_eq!(args.query, "Google");
        assert_eq!(args.max_results, 25);

        let config = SearchConfig::from_args(args).unwrap();
        assert_eq!(
            config.request(),
            SearchRequest {
                query: "Google".to_string(),
                order: SearchOrder::ViewCount,
                max_results: 25,
            }
        );
    }

    #[test]
    fn explicit_flags() {
        let args = parse(&["--query", "rust", "--key", "abc", "--max-results", "50"]).unwrap();
        let config = SearchConfig::from_args(args).unwrap();
        assert_eq!(config.query, "rust");
        assert_eq!(config.max_results, 50);
    }

    #[test]
    fn key_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn max_results_out_of_range() {
        assert!(parse(&["--key", "abc", "--max-results", "51"]).is_err());
        assert!(parse(&["--key", "abc", "--max-results", "-1"]).is_err());
    }

    #[test]
    fn blank_key_is_rejected() {
        for key in ["", " ", "\t\n  "] {
            let args = parse(&["--key", key]).unwrap();
            let err = SearchConfig::from_args(args).unwrap_err();
            assert!(matches!(err, Error::MissingApiKey), "{err:?}");
        }

        let args = parse(&["--key", "   "]).unwrap();
        assert_snapshot!(
            SearchConfig::from_args(args).unwrap_err(),
            @"'key' flag is empty, it is a required field"
        );
    }

    #[test]
    fn key_is_trimmed() {
        let args = parse(&["--key", "  abc \n"]).unwrap();
        let config = SearchConfig::from_args(args).unwrap();
        assert_eq!(config.api_key, "abc");
        assert!(!format!("{config:?}").contains("abc"));
    }
}
