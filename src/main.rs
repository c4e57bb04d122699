//! noip-sync - one-shot No-IP dynamic DNS updater.

use clap::Parser;
use noip_sync::progress::StdoutSink;
use noip_sync::resolver::PublicIpResolver;
use noip_sync::run::{run_update, RunOptions};
use noip_sync::updater::{Credentials, UpdateClient};

#[derive(Parser)]
#[command(name = "noip-sync")]
#[command(about = "Update a No-IP hostname to the caller's current public IP")]
#[command(version)]
struct Cli {
    /// No-IP account username ($VAR reads from the environment)
    username: String,

    /// No-IP account password ($VAR reads from the environment)
    password: String,

    /// Hostname whose record should be updated
    hostname: String,

    /// Narrate each phase of the update
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let credentials = Credentials::from_args(&cli.username, &cli.password);
    let resolver = PublicIpResolver::new();
    let updater = UpdateClient::new();
    let options = RunOptions {
        verbose: cli.verbose,
    };
    let mut sink = StdoutSink;

    run_update(
        &resolver,
        &updater,
        &credentials,
        &cli.hostname,
        &options,
        &mut sink,
    )
    .await?;

    Ok(())
}
