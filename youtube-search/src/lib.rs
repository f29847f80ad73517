use crate::classify::GroupedResults;
use crate::config::{Args, SearchConfig};
use crate::youtube_api::{SearchAdapter, YouTubeClient};
use eyre::Context;
use std::io::Write;

pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod youtube_api;

pub use error::Error;

/// Runs one search end to end: validate the arguments, open the YouTube service, search,
/// and write the grouped report to `out`.
///
/// The developer key is checked before the service is opened, so a blank key never leads to
/// a network request.
pub async fn run(args: Args, out: &mut impl Write) -> Result<GroupedResults, Error> {
    let config = SearchConfig::from_args(args)?;
    tracing::debug!(?config, "starting search");

    let yt = YouTubeClient::new(config.api_key.clone())?;
    search_and_report(&yt, &config, out).await
}

/// Issues a single search through `adapter`, groups the results by kind and reports them.
pub async fn search_and_report<A>(
    adapter: &A,
    config: &SearchConfig,
    out: &mut impl Write,
) -> Result<GroupedResults, Error>
where
    A: SearchAdapter,
{
    let results = adapter
        .search(&config.request())
        .await
        .with_context(|| format!("search YouTube for '{}'", config.query))
        .map_err(Error::Request)?;
    tracing::info!(results = results.len(), query = %config.query, "search complete");

    let grouped = GroupedResults::classify(results);
    grouped.write_report(out).map_err(Error::Output)?;
    Ok(grouped)
}
