//! Report implementations for the football data CLI

pub mod fixtures;
pub mod scorers;
pub mod standings;
pub mod upcoming;

use std::io::Write;

use colored::Colorize;
use tracing::{debug, info};

use crate::{
    cli::types::{CommandSelection, ReportKind},
    football::http::{ApiFailure, FootballClient},
    Result,
};


/// Fetch and print the report named by `selection`.
pub async fn run_report<W: Write>(
    client: &FootballClient,
    selection: &CommandSelection,
    out: &mut W,
) -> Result<()> {
    info!("Rendering {} for {}", selection.report, selection.competition);
    if let Some(team) = &selection.team {
        debug!("Team filter {:?} is accepted but not applied", team.as_str());
    }

    match selection.report {
        ReportKind::Upcoming => upcoming::handle_upcoming(client, out).await,
        ReportKind::Standings => {
            standings::handle_standings(client, selection.competition, out).await
        }
        ReportKind::Scorers => scorers::handle_scorers(client, selection.competition, out).await,
        ReportKind::Fixtures => fixtures::handle_fixtures(client, selection.competition, out).await,
    }
}

/// Print a gateway failure in place of a report.
pub fn report_failure<W: Write>(out: &mut W, failure: &ApiFailure) -> Result<()> {
    writeln!(out, "{}", failure.message().bright_red())?;
    Ok(())
}

/// Section or report title.
pub(crate) fn title(text: &str) -> String {
    text.bright_blue().to_string()
}
