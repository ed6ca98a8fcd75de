//! API token bootstrap: environment, `.env`, or an interactive prompt.

use super::terminal::erase_answered_prompt;
use crate::{cli::types::ApiToken, error::FootyError, Result, ENV_FILE, TOKEN_ENV_VAR};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the token for this run.
///
/// Reads `./.env` (if any) into the environment, then `X_AUTH_TOKEN`. When
/// the variable is missing or blank the user is prompted on stdin. A token
/// collected because the variable was missing is appended to `./.env`.
pub fn load_token() -> Result<ApiToken> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {e}"),
    }

    let stdin = io::stdin();
    token_from_env(
        std::env::var(TOKEN_ENV_VAR).ok(),
        &mut stdin.lock(),
        &mut io::stdout(),
        Path::new(ENV_FILE),
    )
}

/// Use the `X_AUTH_TOKEN` value if set, prompting otherwise.
///
/// The prompted token goes to `env_file` only when the variable was absent.
pub fn token_from_env<R: BufRead, W: Write>(
    env_value: Option<String>,
    input: &mut R,
    out: &mut W,
    env_file: &Path,
) -> Result<ApiToken> {
    let persist_to = env_value.is_none().then_some(env_file);
    bootstrap_token(env_value, input, out, persist_to)
}

/// Resolve a token from an existing value or by prompting.
///
/// `persist_to` is only written when the token had to be prompted for; a
/// failed write is logged and otherwise ignored.
pub fn bootstrap_token<R: BufRead, W: Write>(
    existing: Option<String>,
    input: &mut R,
    out: &mut W,
    persist_to: Option<&Path>,
) -> Result<ApiToken> {
    if let Some(token) = existing.map(ApiToken::new).filter(|t| !t.is_blank()) {
        return Ok(token);
    }

    let token = prompt_token(input, out)?;

    if let Some(path) = persist_to {
        match persist_token(path, &token) {
            Ok(()) => info!("Saved {TOKEN_ENV_VAR} to {}", path.display()),
            Err(e) => warn!("Could not save {TOKEN_ENV_VAR} to {}: {e}", path.display()),
        }
    }

    Ok(token)
}

/// Rows of one token prompt, including the echoed answer.
const PROMPT_ROWS: u16 = 3;

/// Ask until a non-blank token is entered.
pub fn prompt_token<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<ApiToken> {
    loop {
        write!(
            out,
            "{}{}\n{}\nEnter {TOKEN_ENV_VAR}: ",
            "Account required from ".bright_yellow(),
            "https://www.football-data.org/".bright_white(),
            "Create a free account and enter your unique API key.".bright_yellow(),
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Err(FootyError::MissingToken {
                env_var: TOKEN_ENV_VAR.to_string(),
            });
        }
        erase_answered_prompt(out, PROMPT_ROWS)?;

        let token = ApiToken::new(line);
        if !token.is_blank() {
            return Ok(token);
        }
    }
}

/// Append `X_AUTH_TOKEN=<token>` to the key=value file at `path`.
pub fn persist_token(path: &Path, token: &ApiToken) -> Result<()> {
    let mut contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(&format!("{TOKEN_ENV_VAR}={}\n", token.expose()));
    fs::write(path, contents)?;
    Ok(())
}
