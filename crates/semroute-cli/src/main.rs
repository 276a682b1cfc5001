use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("semroute error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let project_root = context::resolve_project_root(flags.project.as_deref())?;
    let ctx = context::AppContext::init(project_root)
        .context("failed to initialize semroute application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Install the stderr subscriber. `SEMROUTE_LOG` wins over the CLI flags.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let default_directive = match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("SEMROUTE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("cannot install tracing subscriber: {error}"))
}
