//! Line-by-line command loop

use anyhow::{Context, Result};
use league_core::{LeagueRepository, Logic};
use std::io::{BufRead, Write};

use crate::formatter;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` was entered.
    Exit,
    /// Input ran out first.
    EndOfInput,
}

/// Feeds every line of `input` to `logic`, printing each result to `out`.
///
/// Stops at `exit` or end of input. A failed save aborts the session with an
/// error instead of reading further commands.
pub fn run<R, I, W>(logic: &mut Logic<R>, input: I, out: &mut W) -> Result<SessionEnd>
where
    R: LeagueRepository,
    I: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let result = logic
            .execute(&line)
            .context("Failed to save the league; stopping to keep memory and disk in step")?;

        writeln!(out, "{}", formatter::render(&result)).context("Failed to write output")?;
        if result.is_exit() {
            return Ok(SessionEnd::Exit);
        }
    }
    Ok(SessionEnd::EndOfInput)
}
