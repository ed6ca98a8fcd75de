//! Interactive fallback menu shown when no report keyword was given.

use super::types::ReportKind;
use crate::{core::terminal::erase_answered_prompt, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Invalid answers tolerated before the menu gives up.
pub const MAX_MENU_ATTEMPTS: usize = 5;

/// Menu entries in display order.
pub const MENU_OPTIONS: [(&str, ReportKind); 4] = [
    ("1", ReportKind::Standings),
    ("2", ReportKind::Fixtures),
    ("3", ReportKind::Upcoming),
    ("4", ReportKind::Scorers),
];

/// Rows printed per round: the options, the quit line and the echoed answer.
const MENU_ROWS: u16 = MENU_OPTIONS.len() as u16 + 2;

/// A single parsed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report(ReportKind),
    Quit,
}

/// Interpret one line of menu input. `None` means "ask again".
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let input = input.trim();
    if matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Some(MenuChoice::Quit);
    }
    MENU_OPTIONS
        .iter()
        .find(|(key, _)| *key == input)
        .map(|(_, kind)| MenuChoice::Report(*kind))
}

fn label(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Standings => "Standings",
        ReportKind::Fixtures => "Fixtures",
        ReportKind::Upcoming => "Upcoming",
        ReportKind::Scorers => "Scorers",
    }
}

fn print_options<W: Write>(out: &mut W) -> Result<()> {
    for (key, kind) in MENU_OPTIONS {
        writeln!(out, "{} {}", key.bright_yellow(), label(kind))?;
    }
    writeln!(out, "{} Quit", "q".bright_yellow())?;
    out.flush()?;
    Ok(())
}

/// Show the menu and read answers until a report is picked.
///
/// Returns `Ok(None)` when the user quits, input ends, or
/// [`MAX_MENU_ATTEMPTS`] invalid answers have been given.
pub fn prompt_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<ReportKind>> {
    for attempt in 1..=MAX_MENU_ATTEMPTS {
        print_options(out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Menu input closed");
            return Ok(None);
        }
        erase_answered_prompt(out, MENU_ROWS)?;

        match parse_menu_choice(&line) {
            Some(MenuChoice::Report(kind)) => return Ok(Some(kind)),
            Some(MenuChoice::Quit) => return Ok(None),
            None => debug!("Invalid menu choice {:?} (attempt {attempt})", line.trim()),
        }
    }

    writeln!(out, "{}", "Too many invalid choices.".bright_red())?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Option<ReportKind>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let choice = prompt_menu(&mut reader, &mut out).unwrap();
        (choice, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::Report(ReportKind::Standings)));
        assert_eq!(parse_menu_choice("2\n"), Some(MenuChoice::Report(ReportKind::Fixtures)));
        assert_eq!(parse_menu_choice(" 3 "), Some(MenuChoice::Report(ReportKind::Upcoming)));
        assert_eq!(parse_menu_choice("4"), Some(MenuChoice::Report(ReportKind::Scorers)));
        assert_eq!(parse_menu_choice("Q"), Some(MenuChoice::Quit));
        assert_eq!(parse_menu_choice("exit"), Some(MenuChoice::Quit));
        assert_eq!(parse_menu_choice("5"), None);
        assert_eq!(parse_menu_choice(""), None);
        assert_eq!(parse_menu_choice("standings"), None);
    }

    #[test]
    fn test_first_valid_answer_is_used() {
        let (choice, out) = run("4\n1\n");
        assert_eq!(choice, Some(ReportKind::Scorers));
        assert_eq!(out.matches("Standings").count(), 1);
    }

    #[test]
    fn test_invalid_answers_reprompt() {
        let (choice, out) = run("x\n\n2\n");
        assert_eq!(choice, Some(ReportKind::Fixtures));
        assert_eq!(out.matches("Fixtures").count(), 3);
    }

    #[test]
    fn test_quit() {
        let (choice, _) = run("q\n1\n");
        assert_eq!(choice, None);
    }

    #[test]
    fn test_end_of_input() {
        let (choice, _) = run("");
        assert_eq!(choice, None);
    }

    #[test]
    fn test_attempts_are_bounded() {
        let input = "x\n".repeat(MAX_MENU_ATTEMPTS + 3) + "1\n";
        let (choice, out) = run(&input);
        assert_eq!(choice, None);
        assert_eq!(out.matches("Standings").count(), MAX_MENU_ATTEMPTS);
        assert!(out.contains("Too many invalid choices."));
    }

    #[test]
    fn test_options_listed_in_order() {
        let (_, out) = run("q\n");
        let standings = out.find("Standings").unwrap();
        let fixtures = out.find("Fixtures").unwrap();
        let upcoming = out.find("Upcoming").unwrap();
        let scorers = out.find("Scorers").unwrap();
        assert!(standings < fixtures && fixtures < upcoming && upcoming < scorers);
    }
}
