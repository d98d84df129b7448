use clap::Parser;
use gallery_downloader::{run, Cli, RunConfig, UReqFetcher};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_cli(Cli::parse())?;

    println!("Output: {}", config.output);

    let summary = run(&config, UReqFetcher::new())?;

    println!("Files successfully saved to: {}", summary.output);

    Ok(())
}
