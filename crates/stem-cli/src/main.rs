use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        tracing::error!("{error:#}");
        eprintln!("stemgen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    match &cli.command {
        cli::Commands::Generate(args) => commands::generate::handle(args, &flags),
        cli::Commands::Suppliers(args) => commands::suppliers::handle(args, &flags),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STEMGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
