//! Competitions supported by the client and the shorthand that selects them.

use super::ids::CompetitionId;
use crate::error::{FootyError, Result};
use std::fmt;
use std::str::FromStr;

/// The competitions the free football-data.org tier exposes.
///
/// # Examples
///
/// ```rust
/// use footy::Competition;
///
/// let bl: Competition = "BL".parse().unwrap();
/// assert_eq!(bl, Competition::Bundesliga);
/// assert_eq!(bl.to_string(), "Bundesliga");
/// assert_eq!(bl.id().as_u32(), 2002);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Competition {
    #[default]
    PremierLeague,
    Championship,
    ChampionsLeague,
    Ligue1,
    Bundesliga,
    SerieA,
    PrimeraDivision,
}

/// Shorthand tokens accepted after `--competition`, `--comp` and `-C`.
///
/// Keys are lowercase; lookups lowercase the input first.
pub const COMPETITION_ALIASES: &[(&str, Competition)] = &[
    ("premier-league", Competition::PremierLeague),
    ("premier_league", Competition::PremierLeague),
    ("premier", Competition::PremierLeague),
    ("pl", Competition::PremierLeague),
    ("epl", Competition::PremierLeague),
    ("championship", Competition::Championship),
    ("cs", Competition::Championship),
    ("efl", Competition::Championship),
    ("champions-league", Competition::ChampionsLeague),
    ("champions_league", Competition::ChampionsLeague),
    ("cl", Competition::ChampionsLeague),
    ("ucl", Competition::ChampionsLeague),
    ("ligue-1", Competition::Ligue1),
    ("ligue_1", Competition::Ligue1),
    ("ligue-un", Competition::Ligue1),
    ("ligue_un", Competition::Ligue1),
    ("l1", Competition::Ligue1),
    ("lu", Competition::Ligue1),
    ("bundesliga", Competition::Bundesliga),
    ("bl", Competition::Bundesliga),
    ("serie-a", Competition::SerieA),
    ("serie_a", Competition::SerieA),
    ("sa", Competition::SerieA),
    ("la-liga", Competition::PrimeraDivision),
    ("la_liga", Competition::PrimeraDivision),
    ("laliga", Competition::PrimeraDivision),
    ("ll", Competition::PrimeraDivision),
    ("primera-division", Competition::PrimeraDivision),
    ("primera_division", Competition::PrimeraDivision),
    ("pd", Competition::PrimeraDivision),
];

impl Competition {
    pub const ALL: [Competition; 7] = [
        Competition::PremierLeague,
        Competition::Championship,
        Competition::ChampionsLeague,
        Competition::Ligue1,
        Competition::Bundesliga,
        Competition::SerieA,
        Competition::PrimeraDivision,
    ];

    /// Canonical, human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "Premier League",
            Competition::Championship => "Championship",
            Competition::ChampionsLeague => "Champions League",
            Competition::Ligue1 => "Ligue 1",
            Competition::Bundesliga => "Bundesliga",
            Competition::SerieA => "Serie A",
            Competition::PrimeraDivision => "Primera Division",
        }
    }

    /// Look up a competition by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Provider identifier used in `competitions/{id}/...` endpoints.
    pub fn id(&self) -> CompetitionId {
        let id = match self {
            Competition::PremierLeague => 2021,
            Competition::Championship => 2016,
            Competition::ChampionsLeague => 2001,
            Competition::Ligue1 => 2015,
            Competition::Bundesliga => 2002,
            Competition::SerieA => 2019,
            Competition::PrimeraDivision => 2014,
        };
        CompetitionId(id)
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Competition {
    type Err = FootyError;

    fn from_str(s: &str) -> Result<Self> {
        resolve_alias(s).ok_or_else(|| FootyError::UnknownCompetition {
            name: s.to_string(),
        })
    }
}

/// Resolve user shorthand (case-insensitive) to a competition.
///
/// Canonical names such as `"Serie A"` are accepted as well as the entries of
/// [`COMPETITION_ALIASES`]. Returns `None` for anything else.
pub fn resolve_alias(token: &str) -> Option<Competition> {
    let key = token.trim().to_lowercase();
    COMPETITION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, competition)| *competition)
        .or_else(|| {
            Competition::ALL
                .into_iter()
                .find(|c| c.name().to_lowercase() == key)
        })
}

/// Map a canonical competition name to its provider identifier.
pub fn competition_identifier(canonical_name: &str) -> Result<CompetitionId> {
    Competition::from_name(canonical_name)
        .map(|competition| competition.id())
        .ok_or_else(|| FootyError::UnknownCompetition {
            name: canonical_name.to_string(),
        })
}
