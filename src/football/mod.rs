//! football-data.org API access: payload types and the HTTP gateway.

pub mod http;
pub mod types;
