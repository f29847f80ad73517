/// Everything that can stop a search from being reported.
///
/// Each variant is terminal for the run that produced it; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The developer key was missing or blank.
    #[error("'key' flag is empty, it is a required field")]
    MissingApiKey,

    /// The HTTP client backing the YouTube service could not be set up.
    #[error("open YouTube service")]
    ServiceInit(#[source] reqwest::Error),

    /// The search call itself failed (network, quota, malformed response).
    #[error("{0:#}")]
    Request(eyre::Report),

    /// The report could not be written out.
    #[error("write search report")]
    Output(#[source] std::io::Error),
}
