//! Error types for the football data CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FootyError>;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum FootyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API token not provided and {env_var} environment variable not set")]
    MissingToken { env_var: String },

    #[error("Unknown competition: {name}")]
    UnknownCompetition { name: String },
}
