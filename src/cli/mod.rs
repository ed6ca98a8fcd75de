//! CLI argument definitions and parsing.

pub mod menu;
pub mod resolve;
pub mod types;

use clap::Parser;

/// Terminal client for football-data.org.
///
/// Reports are chosen with free-form tokens rather than subcommands so that
/// `footy standings --comp bl` and `footy -C bl standings` mean the same thing:
///
/// - `upcoming | standings | scorers | fixtures` (last one wins)
/// - `--competition | --comp | -C <alias>` e.g. `pl`, `bl`, `sa`, `la-liga`
/// - `--team | -T <name>`
///
/// With no report keyword an interactive menu is shown.
#[derive(Debug, Parser)]
#[clap(name = "footy", about = "Football data in your terminal", version)]
pub struct Cli {
    /// Log progress to stderr (`RUST_LOG` takes precedence).
    #[clap(long, short)]
    pub verbose: bool,

    /// Report keyword and flags, e.g. `standings --comp bl`.
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Spellings of the verbose flag, also honoured among the trailing tokens.
pub const VERBOSE_FLAGS: &[&str] = &["--verbose", "-v"];

impl Cli {
    /// True when `--verbose` or `-v` appears anywhere on the command line.
    pub fn verbose_requested(&self) -> bool {
        self.verbose
            || self
                .tokens
                .iter()
                .any(|token| VERBOSE_FLAGS.contains(&token.as_str()))
    }
}
