//! HTTP gateway to the football-data.org v4 API.
//!
//! Every request resolves to a [`Fetched`] value: either the decoded payload
//! or an [`ApiFailure`] describing why there is none. Renderers match on it
//! and print the failure instead of a report.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::CompetitionId,
    core::config::Config,
    football::types::{MatchesResponse, ScorersResponse, StandingsResponse},
    Result,
};


/// Header carrying the API token.
pub const AUTH_HEADER: &str = "x-auth-token";

const USER_AGENT: &str = concat!("footy/", env!("CARGO_PKG_VERSION"));

/// The four endpoints the reports read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Today's matches across the subscribed competitions
    Matches,
    Standings(CompetitionId),
    Scorers(CompetitionId),
    CompetitionMatches(CompetitionId),
}

impl Endpoint {
    /// Path relative to the API root.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Matches => "matches".to_string(),
            Endpoint::Standings(id) => format!("competitions/{id}/standings"),
            Endpoint::Scorers(id) => format!("competitions/{id}/scorers"),
            Endpoint::CompetitionMatches(id) => format!("competitions/{id}/matches"),
        }
    }
}

/// Why a request produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// HTTP 400: the provider rejected the token
    InvalidToken { status: u16 },
    /// Any other non-200 status
    Status { status: u16 },
    /// The request never got a response
    Transport { reason: String },
    /// 200, but the body did not match the expected payload
    Malformed { reason: String },
}

impl ApiFailure {
    /// Classify a non-200 status.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::BAD_REQUEST {
            ApiFailure::InvalidToken {
                status: status.as_u16(),
            }
        } else {
            ApiFailure::Status {
                status: status.as_u16(),
            }
        }
    }

    /// Message shown to the user in place of the report.
    pub fn message(&self) -> String {
        match self {
            ApiFailure::InvalidToken { status } => {
                format!("Error: API key invalid.\nStatus code: {status}")
            }
            ApiFailure::Status { status } => {
                format!("Error: Data fetch from API failed.\nStatus code: {status}")
            }
            ApiFailure::Transport { reason } => {
                format!("Error: Data fetch from API failed.\n{reason}")
            }
            ApiFailure::Malformed { reason } => {
                format!("Error: Unexpected response from API.\n{reason}")
            }
        }
    }
}

/// Outcome of one gateway call.
#[derive(Debug)]
#[must_use]
pub enum Fetched<T> {
    Data(T),
    Failed(ApiFailure),
}

/// Authenticated client for one run.
#[derive(Debug, Clone)]
pub struct FootballClient {
    http: Client,
    base_url: String,
}

impl FootballClient {
    /// Build a client that sends the configured token with every request.
    pub fn new(config: &Config) -> Result<Self> {
        let mut token = HeaderValue::from_str(config.token.expose())?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(AUTH_HEADER), token);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Absolute URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GET `endpoint` and decode the body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Fetched<T> {
        let url = self.url(endpoint);
        debug!("GET {url}");

        let res = match self.http.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                debug!("Request to {url} failed: {e}");
                return Fetched::Failed(ApiFailure::Transport {
                    reason: e.to_string(),
                });
            }
        };

        let status = res.status();
        debug!("{url} => {status}");
        if status != StatusCode::OK {
            return Fetched::Failed(ApiFailure::from_status(status));
        }

        let body = match res.text().await {
            Ok(body) => body,
            Err(e) => {
                return Fetched::Failed(ApiFailure::Transport {
                    reason: e.to_string(),
                })
            }
        };

        match serde_json::from_str(&body) {
            Ok(data) => Fetched::Data(data),
            Err(e) => {
                debug!("Could not decode {url}: {e}");
                Fetched::Failed(ApiFailure::Malformed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Today's matches across all competitions.
    pub async fn matches(&self) -> Fetched<MatchesResponse> {
        self.fetch(Endpoint::Matches).await
    }

    pub async fn standings(&self, id: CompetitionId) -> Fetched<StandingsResponse> {
        self.fetch(Endpoint::Standings(id)).await
    }

    pub async fn scorers(&self, id: CompetitionId) -> Fetched<ScorersResponse> {
        self.fetch(Endpoint::Scorers(id)).await
    }

    /// All matches of one competition's current season.
    pub async fn competition_matches(&self, id: CompetitionId) -> Fetched<MatchesResponse> {
        self.fetch(Endpoint::CompetitionMatches(id)).await
    }
}
