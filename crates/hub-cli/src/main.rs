use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod components;
mod context;
mod notify;
mod output;
mod progress;
mod ui;
mod views;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("techhub error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config =
        hub_config::HubConfig::load_with_dotenv().context("failed to load techhub configuration")?;
    let ctx = context::AppContext::init(config, &flags)
        .context("failed to initialize techhub application context")?;

    commands::dispatch(&cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TECHHUB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
