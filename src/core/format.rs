//! Fixed-width padding and conditional emphasis for table cells.
//!
//! Everything here is pure: a cell is padded first and styled second, so the
//! visible width never depends on whether the terminal renders colors.
//! [`Styled`] values print plain text whenever `colored` decides color is
//! unavailable (`NO_COLOR`, `CLICOLOR=0`, output not a terminal).

use colored::{ColoredString, Colorize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Last position that gets the qualification style.
pub const QUALIFICATION_CUTOFF: u32 = 4;

/// First position that gets the relegation style.
pub const RELEGATION_START: u32 = 18;

/// Left-align `value` in a field of `width` characters.
///
/// Longer values are returned whole, never truncated.
pub fn pad_right(value: impl fmt::Display, width: usize) -> String {
    let text = value.to_string();
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    format!("{text}{}", " ".repeat(width - len))
}

/// Right-align `value` in a field of `width` characters.
///
/// Longer values are returned whole, never truncated.
pub fn pad_left(value: impl fmt::Display, width: usize) -> String {
    let text = value.to_string();
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    format!("{}{text}", " ".repeat(width - len))
}

/// Conditional styles a table cell can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// First place
    Leader,
    /// Positions 2..=4
    Qualification,
    /// Positions 18 and below
    Relegation,
    /// Goal difference above zero
    Positive,
    /// Goal difference below zero
    Negative,
    /// More games played than the table average
    Ahead,
    /// Fewer games played than the table average
    Behind,
}

impl Emphasis {
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Emphasis::Leader => text.bright_yellow().bold(),
            Emphasis::Qualification => text.bright_blue(),
            Emphasis::Relegation => text.bright_red(),
            Emphasis::Positive => text.bright_green(),
            Emphasis::Negative => text.bright_red(),
            Emphasis::Ahead => text.bright_cyan(),
            Emphasis::Behind => text.bright_black(),
        }
    }
}

/// A padded cell plus the emphasis to print it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    text: String,
    emphasis: Option<Emphasis>,
}

impl Styled {
    pub fn new(text: String, emphasis: Option<Emphasis>) -> Self {
        Self { text, emphasis }
    }

    /// The padded text without escape codes.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emphasis(&self) -> Option<Emphasis> {
        self.emphasis
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.emphasis {
            Some(emphasis) => write!(f, "{}", emphasis.paint(&self.text)),
            None => f.write_str(&self.text),
        }
    }
}

/// Emphasis for a table position. Boundaries are absolute, whatever the table size.
pub fn rank_emphasis(position: u32) -> Option<Emphasis> {
    match position {
        1 => Some(Emphasis::Leader),
        2..=QUALIFICATION_CUTOFF => Some(Emphasis::Qualification),
        p if p >= RELEGATION_START => Some(Emphasis::Relegation),
        _ => None,
    }
}

/// Team name left-aligned to `width`, styled by table position.
pub fn emphasize_rank(team: &str, position: u32, width: usize) -> Styled {
    Styled::new(pad_right(team, width), rank_emphasis(position))
}

/// Goal difference right-aligned to `width`, styled by sign.
pub fn emphasize_goal_difference(value: i32, width: usize) -> Styled {
    let emphasis = match value.signum() {
        1 => Some(Emphasis::Positive),
        -1 => Some(Emphasis::Negative),
        _ => None,
    };
    Styled::new(pad_left(value, width), emphasis)
}

/// Emphasis for games played against the table mean.
///
/// Only counts strictly above `ceil(mean)` or strictly below `floor(mean)`
/// are emphasized, so a whole-number mean leaves its own value unstyled.
pub fn games_played_emphasis(played: u32, mean: f64) -> Option<Emphasis> {
    let played = f64::from(played);
    if played > mean.ceil() {
        Some(Emphasis::Ahead)
    } else if played < mean.floor() {
        Some(Emphasis::Behind)
    } else {
        None
    }
}

/// Games played right-aligned to `width`, styled against the table mean.
pub fn emphasize_games_played(played: u32, mean: f64, width: usize) -> Styled {
    Styled::new(pad_left(played, width), games_played_emphasis(played, mean))
}

/// Arithmetic mean in a single pass; `0.0` for no values.
pub fn mean(values: impl IntoIterator<Item = u32>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
