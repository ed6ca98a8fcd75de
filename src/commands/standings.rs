//! League table report

use std::fmt;
use std::io::Write;

use colored::Colorize;

use crate::{
    cli::types::Competition,
    core::format::{
        emphasize_games_played, emphasize_goal_difference, emphasize_rank, mean, pad_left,
        pad_right, Styled,
    },
    football::{
        http::{Fetched, FootballClient},
        types::StandingsRow,
    },
    Result,
};

use super::{report_failure, title};

/// Column labels and the right edge each is aligned to.
pub const HEADER_COLUMNS: [(&str, usize); 8] = [
    ("Pl", 24),
    ("W", 4),
    ("D", 2),
    ("L", 2),
    ("GF", 4),
    ("GA", 2),
    ("GD", 3),
    ("P", 4),
];

const POSITION_WIDTH: usize = 2;
const TEAM_WIDTH: usize = 18;

/// Mean games played over the whole table.
pub fn mean_games_played(rows: &[StandingsRow]) -> f64 {
    mean(rows.iter().map(|r| r.played_games))
}

/// One formatted table row.
#[derive(Debug, Clone)]
pub struct StandingsLine {
    pub position: String,
    pub team: Styled,
    pub played: Styled,
    pub won: String,
    pub draw: String,
    pub lost: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_difference: Styled,
    pub points: String,
}

impl StandingsLine {
    pub fn new(row: &StandingsRow, mean_played: f64) -> Self {
        Self {
            position: pad_right(row.position, POSITION_WIDTH),
            team: emphasize_rank(row.team.display_name(), row.position, TEAM_WIDTH),
            played: emphasize_games_played(row.played_games, mean_played, 2),
            won: pad_left(row.won, 4),
            draw: pad_left(row.draw, 2),
            lost: pad_left(row.lost, 2),
            goals_for: pad_left(row.goals_for, 4),
            goals_against: pad_left(row.goals_against, 2),
            goal_difference: emphasize_goal_difference(row.goal_difference, 3),
            points: pad_left(row.points, 4),
        }
    }
}

impl fmt::Display for StandingsLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {}",
            self.position.bright_black(),
            self.team,
            self.played,
            self.won,
            self.draw,
            self.lost,
            self.goals_for,
            self.goals_against,
            self.goal_difference,
            self.points.bright_yellow(),
        )
    }
}

pub fn header_line() -> String {
    HEADER_COLUMNS
        .iter()
        .map(|(label, width)| pad_left(label, *width))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rows in provider order; never re-sorted.
pub fn standings_lines(rows: &[StandingsRow]) -> Vec<StandingsLine> {
    let mean_played = mean_games_played(rows);
    rows.iter()
        .map(|row| StandingsLine::new(row, mean_played))
        .collect()
}

/// Title, header and one line per row.
pub fn render_standings(competition: Competition, rows: &[StandingsRow]) -> Vec<String> {
    let mut lines = vec![
        title(&format!("{} STANDINGS:", competition.name().to_uppercase())),
        header_line(),
    ];
    lines.extend(standings_lines(rows).iter().map(ToString::to_string));
    lines
}

/// Handle the standings command
pub async fn handle_standings<W: Write>(
    client: &FootballClient,
    competition: Competition,
    out: &mut W,
) -> Result<()> {
    let response = match client.standings(competition.id()).await {
        Fetched::Data(response) => response,
        Fetched::Failed(failure) => return report_failure(out, &failure),
    };

    let Some(rows) = response.total_table() else {
        writeln!(out, "No standings available for {competition}.")?;
        return Ok(());
    };

    for line in render_standings(competition, rows) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
