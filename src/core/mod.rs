//! Core utilities for the football data CLI
//!
//! This module consolidates the pieces shared by every report:
//! - `config`: Run configuration threaded into the HTTP client
//! - `credentials`: API token loading, prompting and persistence
//! - `format`: Fixed-width padding and conditional emphasis
//! - `terminal`: Clearing answered prompts
//! - `time`: Kick-off time formatting

pub mod config;
pub mod credentials;
pub mod format;
pub mod terminal;
pub mod time;

// Re-export commonly used items for convenience
pub use config::Config;
pub use format::{pad_left, pad_right, Emphasis, Styled};
