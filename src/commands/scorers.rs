//! Top goalscorers report

use std::io::Write;

use colored::Colorize;

use crate::{
    cli::types::Competition,
    core::format::{pad_left, pad_right},
    football::{
        http::{Fetched, FootballClient},
        types::ScorerRow,
    },
    Result,
};

use super::{report_failure, title};

const NAME_WIDTH: usize = 22;
const TEAM_WIDTH: usize = 16;
const COUNT_WIDTH: usize = 2;

pub fn header_line() -> String {
    format!("{} {}", pad_left("G", 42), pad_left("A", COUNT_WIDTH))
}

pub fn scorer_line(row: &ScorerRow) -> String {
    format!(
        "{} {} {} {}",
        pad_right(&row.player.name, NAME_WIDTH),
        pad_right(row.team.display_name(), TEAM_WIDTH).bright_black(),
        pad_left(row.goals, COUNT_WIDTH).bright_green(),
        pad_left(row.assists.unwrap_or(0), COUNT_WIDTH).bright_blue(),
    )
}

/// Title, header and one line per scorer in provider order.
pub fn render_scorers(rows: &[ScorerRow]) -> Vec<String> {
    let mut lines = vec![title("TOP GOALSCORERS:"), header_line()];
    lines.extend(rows.iter().map(scorer_line));
    lines
}

/// Handle the scorers command
pub async fn handle_scorers<W: Write>(
    client: &FootballClient,
    competition: Competition,
    out: &mut W,
) -> Result<()> {
    let response = match client.scorers(competition.id()).await {
        Fetched::Data(response) => response,
        Fetched::Failed(failure) => return report_failure(out, &failure),
    };

    for line in render_scorers(&response.scorers) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
