//! Future fixtures of one competition

use std::fmt::Display;
use std::io::Write;

use chrono::{DateTime, Local, TimeZone, Utc};
use colored::Colorize;

use crate::{
    cli::types::Competition,
    core::time::fixture_date,
    football::{
        http::{Fetched, FootballClient},
        types::Match,
    },
    Result,
};

use super::{report_failure, title};

/// Matches kicking off strictly after `now`, in provider order.
pub fn future_matches(matches: &[Match], now: DateTime<Utc>) -> Vec<&Match> {
    matches.iter().filter(|m| m.utc_date > now).collect()
}

fn fixture_line<Tz>(m: &Match, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}  {} {} {}",
        fixture_date(m.utc_date, tz).bright_black(),
        m.home(),
        "vs".bright_black(),
        m.away()
    )
}

/// Title followed by one line per future match.
pub fn render_fixtures<Tz>(
    competition: Competition,
    matches: &[Match],
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = vec![title(&format!(
        "{} FIXTURES:",
        competition.name().to_uppercase()
    ))];
    lines.extend(
        future_matches(matches, now)
            .into_iter()
            .map(|m| fixture_line(m, tz)),
    );
    lines
}

/// Handle the fixtures command
pub async fn handle_fixtures<W: Write>(
    client: &FootballClient,
    competition: Competition,
    out: &mut W,
) -> Result<()> {
    let response = match client.competition_matches(competition.id()).await {
        Fetched::Data(response) => response,
        Fetched::Failed(failure) => return report_failure(out, &failure),
    };

    for line in render_fixtures(competition, &response.matches, Utc::now(), &Local) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
