//! Today's matches: in play first, then scheduled

use std::fmt::Display;
use std::io::Write;

use chrono::{Local, TimeZone};
use colored::Colorize;

use crate::{
    core::time::kickoff_time,
    football::{
        http::{Fetched, FootballClient},
        types::Match,
    },
    Result,
};

use super::{report_failure, title};

/// Width of the "home - away" column.
pub const MATCHUP_WIDTH: usize = 40;

/// Stand-in score for live matches; the live score is not read from the payload.
pub const LIVE_SEPARATOR: &str = " 0 - 0 ";
pub const SCHEDULED_SEPARATOR: &str = " vs ";

/// Matches split by status. Anything neither in play nor scheduled is dropped.
#[derive(Debug, Default)]
pub struct UpcomingPartition<'a> {
    pub in_play: Vec<&'a Match>,
    pub scheduled: Vec<&'a Match>,
}

impl UpcomingPartition<'_> {
    pub fn is_empty(&self) -> bool {
        self.in_play.is_empty() && self.scheduled.is_empty()
    }
}

/// Split `matches` into in-play (`IN_PLAY`, `PAUSED`) and scheduled
/// (`SCHEDULED`, `TIMED`), keeping provider order within each group.
pub fn partition_matches(matches: &[Match]) -> UpcomingPartition<'_> {
    let mut partition = UpcomingPartition::default();
    for m in matches {
        if m.status.is_in_play() {
            partition.in_play.push(m);
        } else if m.status.is_scheduled() {
            partition.scheduled.push(m);
        }
    }
    partition
}

/// `home<sep>away` padded to `width` on its visible length.
fn matchup(
    home: &str,
    separator: &str,
    styled_separator: impl Display,
    away: &str,
    width: usize,
) -> String {
    let visible = home.chars().count() + separator.chars().count() + away.chars().count();
    let padding = " ".repeat(width.saturating_sub(visible));
    format!("{home}{styled_separator}{away}{padding}")
}

fn match_line<Tz>(m: &Match, tz: &Tz, live: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let teams = if live {
        matchup(
            m.home(),
            LIVE_SEPARATOR,
            LIVE_SEPARATOR.bright_yellow(),
            m.away(),
            MATCHUP_WIDTH,
        )
    } else {
        matchup(
            m.home(),
            SCHEDULED_SEPARATOR,
            SCHEDULED_SEPARATOR.bright_black(),
            m.away(),
            MATCHUP_WIDTH,
        )
    };
    format!(
        "{} {} {}",
        kickoff_time(m.utc_date, tz).bright_black(),
        teams,
        m.competition_name().bright_black()
    )
}

/// Both sections; each only when non-empty, a blank line only between two.
pub fn render_upcoming<Tz>(matches: &[Match], tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let partition = partition_matches(matches);
    let mut lines = Vec::new();

    if partition.is_empty() {
        lines.push("No matches today.".to_string());
        return lines;
    }

    if !partition.in_play.is_empty() {
        lines.push(title("IN-PLAY:"));
        lines.extend(partition.in_play.iter().map(|m| match_line(m, tz, true)));
    }

    if !partition.scheduled.is_empty() {
        if !partition.in_play.is_empty() {
            lines.push(String::new());
        }
        lines.push(title("SCHEDULED:"));
        lines.extend(partition.scheduled.iter().map(|m| match_line(m, tz, false)));
    }

    lines
}

/// Handle the upcoming command
pub async fn handle_upcoming<W: Write>(client: &FootballClient, out: &mut W) -> Result<()> {
    let response = match client.matches().await {
        Fetched::Data(response) => response,
        Fetched::Failed(failure) => return report_failure(out, &failure),
    };

    for line in render_upcoming(&response.matches, &Local) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
