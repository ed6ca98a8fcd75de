//! Erasing prompt lines once they have been answered.

use crate::Result;
use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Move the cursor up `lines` rows and clear from there to the end of the screen.
pub fn clear_last_lines<W: Write>(out: &mut W, lines: u16) -> Result<()> {
    if lines == 0 {
        return Ok(());
    }
    queue!(out, MoveToPreviousLine(lines), Clear(ClearType::FromCursorDown))?;
    out.flush()?;
    Ok(())
}

/// [`clear_last_lines`], skipped when stdout is not an interactive terminal.
pub fn erase_answered_prompt<W: Write>(out: &mut W, lines: u16) -> Result<()> {
    if io::stdout().is_terminal() {
        clear_last_lines(out, lines)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_last_lines_moves_up_and_clears() {
        let mut out = Vec::new();
        clear_last_lines(&mut out, 3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[3F\x1b[J");
    }

    #[test]
    fn test_clear_zero_lines_writes_nothing() {
        let mut out = Vec::new();
        clear_last_lines(&mut out, 0).unwrap();
        assert!(out.is_empty());
    }
}
