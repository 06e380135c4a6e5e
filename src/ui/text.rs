use std::io::{self, Write};

use crate::game::{Grid, MatchObserver, Player, ScoreTable, Seat};

/// Line-oriented renderer: the grid as rows of `0`/`Y`/`R` tokens plus the
/// round and match announcements.
pub struct TextOutput<W> {
    writer: W,
    names: [String; 2],
}

impl<W: Write> TextOutput<W> {
    /// `players` supplies the names used in the score line.
    pub fn new(writer: W, players: &[Player; 2]) -> Self {
        TextOutput {
            writer,
            names: [players[0].name().to_string(), players[1].name().to_string()],
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render `grid` one row per line, cells separated by a single space.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.cells() {
        let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

impl<W: Write> MatchObserver for TextOutput<W> {
    fn board(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.writer, "Board:\n")?;
        writeln!(self.writer, "{}", render_grid(grid))
    }

    fn turn(&mut self, player: &Player) -> io::Result<()> {
        writeln!(self.writer, "{}'s turn", player.name())
    }

    fn round_won(&mut self, winner: &Player, score: &ScoreTable) -> io::Result<()> {
        writeln!(self.writer, "{} won the round", winner.name())?;
        writeln!(
            self.writer,
            "Score: {} {} - {} {}",
            self.names[0],
            score.wins(Seat::First),
            score.wins(Seat::Second),
            self.names[1]
        )
    }

    fn round_drawn(&mut self) -> io::Result<()> {
        writeln!(self.writer, "The round is a draw")
    }

    fn match_won(&mut self, winner: &Player) -> io::Result<()> {
        writeln!(self.writer, "{} won the game", winner.name())?;
        self.writer.flush()
    }
}
