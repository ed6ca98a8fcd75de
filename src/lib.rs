//! Football Data Terminal Client Library
//!
//! A Rust library for querying the football-data.org v4 API and rendering
//! matches, league tables and top scorers as aligned, colorized terminal output.
//!
//! ## Features
//!
//! - **Upcoming Matches**: Today's in-play and scheduled matches across competitions
//! - **Standings**: League tables with rank, goal difference and games-played emphasis
//! - **Top Scorers**: Goals and assists per player
//! - **Fixtures**: Future matches for a single competition
//! - **Flexible Aliases**: `pl`, `bl`, `la-liga`, ... resolve to canonical competitions
//! - **Interactive Menu**: Fallback when no report is named on the command line
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use footy::{commands::run_report, core::config::Config, football::http::FootballClient};
//! use footy::{CommandSelection, Competition, ReportKind};
//!
//! # async fn example() -> footy::Result<()> {
//! let config = Config::new(footy::ApiToken::new("my-token"));
//! let client = FootballClient::new(&config)?;
//! let selection = CommandSelection::new(ReportKind::Standings, Competition::Bundesliga);
//!
//! run_report(&client, &selection, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your football-data.org token to skip the interactive prompt:
//! ```bash
//! export X_AUTH_TOKEN=0123456789abcdef
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod football;

// Re-export commonly used types
pub use cli::types::{
    ApiToken, CommandSelection, Competition, CompetitionId, ReportKind, TeamFilter,
};
pub use error::{FootyError, Result};
pub use football::types::{Match, MatchStatus, ScorerRow, StandingsRow};

/// Environment variable holding the football-data.org API token.
pub const TOKEN_ENV_VAR: &str = "X_AUTH_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "FOOTBALL_DATA_BASE_URL";

/// Base path for the football-data.org v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4/";

/// File the token is persisted to when it had to be collected interactively.
pub const ENV_FILE: &str = ".env";
