//! ID and credential types for football-data.org.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for football-data.org competition IDs.
///
/// Keeps provider identifiers apart from the other integers flowing through
/// a report (positions, goals, points).
///
/// # Examples
///
/// ```rust
/// use footy::CompetitionId;
///
/// let id = CompetitionId::new(2021);
/// assert_eq!(id.as_u32(), 2021);
/// assert_eq!(id.to_string(), "2021");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionId(pub u32);

impl CompetitionId {
    /// Create a new CompetitionId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The secret `X-Auth-Token` value.
///
/// `Debug` and `Display` never reveal the token, so it can sit inside
/// structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    /// The raw token, for the request header and the `.env` file only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
