//! Entry point: load the token, resolve the command and render one report.

use anyhow::Context;
use clap::Parser;
use footy::{
    cli::{menu::prompt_menu, resolve::resolve_command, Cli},
    commands::run_report,
    core::config::Config,
    football::http::FootballClient,
    CommandSelection,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose_requested() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let selection = resolve_command(cli.tokens.as_slice())?;

    let config = Config::load().context("Could not load the football-data.org API token")?;
    let client = FootballClient::new(&config).context("Could not build the HTTP client")?;

    let mut stdout = std::io::stdout();
    let selection = match selection {
        Some(selection) => selection,
        None => {
            let stdin = std::io::stdin();
            match prompt_menu(&mut stdin.lock(), &mut stdout)? {
                Some(report) => CommandSelection::with_defaults(report),
                None => return Ok(()),
            }
        }
    };

    run_report(&client, &selection, &mut stdout).await?;

    Ok(())
}
