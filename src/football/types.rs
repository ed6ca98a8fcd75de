use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Shown when the provider has not decided a team yet (knock-out draws).
pub const UNKNOWN_TEAM: &str = "TBD";

/// Team reference embedded in matches, table rows and scorer rows
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
}

impl Team {
    /// Short name, falling back to the full name.
    pub fn display_name(&self) -> &str {
        [self.short_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(UNKNOWN_TEAM)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompetitionRef {
    #[serde(default)]
    pub name: String,
}

/// Match status as reported by football-data.org
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Scheduled,
    /// Scheduled with a confirmed kick-off time
    Timed,
    InPlay,
    Paused,
    Finished,
    Other(String),
}

impl MatchStatus {
    /// `IN_PLAY` or `PAUSED`.
    pub fn is_in_play(&self) -> bool {
        matches!(self, MatchStatus::InPlay | MatchStatus::Paused)
    }

    /// `SCHEDULED` or `TIMED`.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Timed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Timed => "TIMED",
            MatchStatus::InPlay => "IN_PLAY",
            MatchStatus::Paused => "PAUSED",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Other(s) => s,
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "SCHEDULED" => MatchStatus::Scheduled,
            "TIMED" => MatchStatus::Timed,
            "IN_PLAY" => MatchStatus::InPlay,
            "PAUSED" => MatchStatus::Paused,
            "FINISHED" => MatchStatus::Finished,
            _ => MatchStatus::Other(s),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single fixture from `/matches` or `/competitions/{id}/matches`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Match {
    #[serde(rename = "utcDate")]
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(rename = "homeTeam", default)]
    pub home_team: Team,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Team,
    #[serde(default)]
    pub competition: CompetitionRef,
}

impl Match {
    pub fn home(&self) -> &str {
        self.home_team.display_name()
    }

    pub fn away(&self) -> &str {
        self.away_team.display_name()
    }

    pub fn competition_name(&self) -> &str {
        &self.competition.name
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// One team's line in a league table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsRow {
    pub position: u32,
    pub team: Team,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
}

/// One table within a standings payload (TOTAL, HOME, AWAY or a group)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsTable {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub table: Vec<StandingsRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<StandingsTable>,
}

impl StandingsResponse {
    /// The overall table: first `TOTAL` table, else the first table.
    pub fn total_table(&self) -> Option<&[StandingsRow]> {
        self.standings
            .iter()
            .find(|t| t.kind.as_deref() == Some("TOTAL"))
            .or_else(|| self.standings.first())
            .map(|t| t.table.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
}

/// A player's goals and assists within a competition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScorerRow {
    pub player: Player,
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScorersResponse {
    #[serde(default)]
    pub scorers: Vec<ScorerRow>,
}
