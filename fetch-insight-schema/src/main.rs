#![deny(unsafe_code)]

use clap::Parser;
use insight_schema_common::{
    fetcher::SchemaFetcher, prelude::*, tracing_support::initialize_tracing,
    DEFAULT_ENDPOINT, DEFAULT_OUTPUT,
};
use std::{io, process};

/// Command-line options, parsed using `clap`.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "Fetch the insight JSON Schema from a running cognitod and save it."
)]
struct Opt {
    /// Base URL of the cognitod HTTP API.
    #[arg(long = "endpoint", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Where to write the pretty-printed schema.
    #[arg(long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    initialize_tracing();
    let opt = Opt::parse();
    debug!("Args: {:?}", opt);

    let fetcher = SchemaFetcher::new(&opt.endpoint, &opt.output)?;
    let mut stderr = io::stderr();
    if let Err(err) = fetcher.fetch(&mut stderr).await {
        debug!("fetch failed: {:?}", err);
        err.report(&mut stderr)
            .context("could not write error report")?;
        process::exit(err.exit_code());
    }
    Ok(())
}
