//! Report kinds and the resolved command selection.

use super::competition::Competition;
use std::fmt;

/// The four reports the client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Today's in-play and scheduled matches across all competitions
    Upcoming,
    /// League table for one competition
    Standings,
    /// Top goalscorers for one competition
    Scorers,
    /// Future matches for one competition
    Fixtures,
}

impl ReportKind {
    /// Parse a report keyword as typed on the command line.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "upcoming" => Some(ReportKind::Upcoming),
            "standings" => Some(ReportKind::Standings),
            "scorers" => Some(ReportKind::Scorers),
            "fixtures" => Some(ReportKind::Fixtures),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ReportKind::Upcoming => "upcoming",
            ReportKind::Standings => "standings",
            ReportKind::Scorers => "scorers",
            ReportKind::Fixtures => "fixtures",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Team passed with `--team`/`-T`.
///
/// Parsed and carried through to the renderers, which do not filter on it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFilter(pub String);

impl TeamFilter {
    pub fn new(team: impl Into<String>) -> Self {
        Self(team.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a single run renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSelection {
    pub report: ReportKind,
    pub competition: Competition,
    pub team: Option<TeamFilter>,
}

impl CommandSelection {
    pub fn new(report: ReportKind, competition: Competition) -> Self {
        Self {
            report,
            competition,
            team: None,
        }
    }

    /// Selection for a report chosen from the menu: default competition, no team.
    pub fn with_defaults(report: ReportKind) -> Self {
        Self::new(report, Competition::default())
    }
}
