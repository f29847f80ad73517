use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_search::config::Args;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    // the report goes to stdout, so keep diagnostics on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let mut stdout = std::io::stdout().lock();
    youtube_search::run(args, &mut stdout)
        .await
        .context("youtube-search failed")?;

    Ok(())
}
