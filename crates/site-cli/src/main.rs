use clap::Parser;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("sln error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = site_config::SitelineConfig::load_with_dotenv()?;

    match &cli.command {
        cli::Commands::Periods(args) => commands::periods::handle(args, &config, cli.format),
        cli::Commands::Layout(args) => commands::layout::handle(args, &config, cli.format),
        cli::Commands::Matrix(args) => commands::matrix::handle(args, &config, cli.format),
        cli::Commands::Schema(args) => commands::schema::handle(args, cli.format),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SITELINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
