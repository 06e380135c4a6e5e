use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::MoveSource;
use crate::error::{GridError, MatchError};
use crate::game::{Player, Seat};

/// Reads column numbers line by line, re-prompting until one is in range.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console input bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_column(
        &mut self,
        _seat: Seat,
        _player: &Player,
        columns: usize,
    ) -> Result<usize, MatchError> {
        let last = columns.saturating_sub(1);
        loop {
            write!(
                self.writer,
                "Enter column between 0 and {} to add piece: ",
                last
            )?;
            self.writer.flush()?;

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(MatchError::InputClosed);
            }

            let input = self.line.trim();
            match input.parse::<usize>() {
                Ok(column) if column < columns => return Ok(column),
                Ok(column) => {
                    log::debug!("column {column} out of range 0..{columns}");
                    writeln!(self.writer, "Column {} is out of range, try again.", column)?;
                }
                Err(_) => {
                    log::debug!("unparseable column input {input:?}");
                    writeln!(self.writer, "'{}' is not a column number, try again.", input)?;
                }
            }
        }
    }

    fn reject(&mut self, _seat: Seat, error: &GridError) -> Result<(), MatchError> {
        writeln!(self.writer, "Cannot drop there: {}. Try again.", error)?;
        Ok(())
    }
}
