//! Turn the raw command-line tokens into a [`CommandSelection`].

use super::types::{CommandSelection, Competition, ReportKind, TeamFilter};
use crate::error::Result;
use tracing::debug;

/// Spellings of the flag that selects a competition.
pub const COMPETITION_FLAGS: &[&str] = &["--competition", "--comp", "-C"];

/// Spellings of the flag that selects a team.
pub const TEAM_FLAGS: &[&str] = &["--team", "-T"];

/// Scan `tokens` once and build the selection they describe.
///
/// - The last report keyword wins.
/// - A competition or team flag consumes the token after it; a flag in last
///   position is ignored.
/// - Unrecognised tokens are ignored.
///
/// Returns `Ok(None)` when no report keyword is present, and
/// [`FootyError::UnknownCompetition`] when a competition alias does not resolve.
///
/// # Examples
///
/// ```rust
/// use footy::{cli::resolve::resolve_command, Competition, ReportKind};
///
/// let selection = resolve_command(&["standings", "--comp", "bl"]).unwrap().unwrap();
/// assert_eq!(selection.report, ReportKind::Standings);
/// assert_eq!(selection.competition, Competition::Bundesliga);
///
/// assert!(resolve_command(&["--comp", "pl"]).unwrap().is_none());
/// ```
pub fn resolve_command<S: AsRef<str>>(tokens: &[S]) -> Result<Option<CommandSelection>> {
    let mut report = None;
    let mut competition = None;
    let mut team = None;

    let mut iter = tokens.iter().map(AsRef::<str>::as_ref);
    while let Some(token) = iter.next() {
        if let Some(kind) = ReportKind::from_keyword(token) {
            report = Some(kind);
        } else if COMPETITION_FLAGS.contains(&token) {
            if let Some(alias) = iter.next() {
                competition = Some(alias.parse::<Competition>()?);
            }
        } else if TEAM_FLAGS.contains(&token) {
            if let Some(name) = iter.next() {
                team = Some(TeamFilter::new(name));
            }
        } else {
            debug!("Ignoring unrecognised argument {token:?}");
        }
    }

    Ok(report.map(|report| CommandSelection {
        report,
        competition: competition.unwrap_or_default(),
        team,
    }))
}
