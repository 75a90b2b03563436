//! Line-oriented prompts

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;

use crate::app::Shell;
use crate::constants::{BODY_TERMINATOR, MAX_BODY_LEN};
use crate::ui::Role;

/// Standard input reached end of file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Parse the leading integer of a line, the way `atol` reads it
pub fn parse_leading_number(input: &str) -> Option<u64> {
    let trimmed = input.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// `y`/`Y` as the first character means yes, `n`/`N` means no, anything else
/// takes the default
pub fn parse_yes_no(input: &str, default: bool) -> bool {
    match input.chars().next() {
        Some('y' | 'Y') => true,
        Some('n' | 'N') => false,
        _ => default,
    }
}

impl<R: BufRead, W: Write, T> Shell<R, W, T> {
    /// Write text and flush so prompts show before blocking on input
    pub(super) fn emit(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one painted line
    pub(super) fn say(&mut self, role: Role, text: &str) -> Result<()> {
        let mut line = self.palette.paint(text, role);
        line.push('\n');
        self.emit(&line)
    }

    /// Read one line without its line ending
    pub(super) fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub(super) fn ask(&mut self, label: &str) -> Result<String> {
        self.emit(label)?;
        self.read_line()
    }

    pub(super) fn ask_yes_no(&mut self, label: &str, default: bool) -> Result<bool> {
        let answer = self.ask(label)?;
        Ok(parse_yes_no(&answer, default))
    }

    pub(super) fn pause(&mut self) -> Result<()> {
        self.ask("\nPress Enter to continue...")?;
        Ok(())
    }

    /// Read body lines until a line that is exactly the terminator.
    ///
    /// Lines that would push the body past the size limit are dropped.
    pub(super) fn read_body(&mut self) -> Result<String> {
        self.emit(&format!(
            "\nEnter request body (multiline supported, end with {} on new line):\n",
            BODY_TERMINATOR
        ))?;

        let mut lines: Vec<String> = Vec::new();
        let mut total = 0usize;
        let mut dropped = false;

        loop {
            let line = self.read_line()?;
            if line == BODY_TERMINATOR {
                break;
            }
            let added = line.len() + usize::from(!lines.is_empty());
            if total + added > MAX_BODY_LEN {
                dropped = true;
                continue;
            }
            total += added;
            lines.push(line);
        }

        if dropped {
            self.say(
                Role::Warning,
                &format!("[!] Body limited to {} bytes, extra lines dropped", MAX_BODY_LEN),
            )?;
        }
        Ok(lines.join("\n"))
    }
}
