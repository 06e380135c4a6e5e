//! Where column choices come from: the console for interactive play, or a
//! fixed script for tests and replays.

mod console;
mod scripted;

pub use console::ConsoleInput;
pub use scripted::ScriptedInput;

use crate::error::{GridError, MatchError};
use crate::game::{Player, Seat};

/// Supplies one column choice per turn.
pub trait MoveSource {
    /// Return a column in `0..columns` for `player`, who sits at `seat`.
    fn next_column(
        &mut self,
        seat: Seat,
        player: &Player,
        columns: usize,
    ) -> Result<usize, MatchError>;

    /// Called when the grid refused the column chosen for `seat`; the
    /// controller asks again afterwards.
    fn reject(&mut self, _seat: Seat, _error: &GridError) -> Result<(), MatchError> {
        Ok(())
    }
}

/// One source per seat: the first answers for `Seat::First`, the second for
/// `Seat::Second`.
impl<A: MoveSource, B: MoveSource> MoveSource for (A, B) {
    fn next_column(
        &mut self,
        seat: Seat,
        player: &Player,
        columns: usize,
    ) -> Result<usize, MatchError> {
        match seat {
            Seat::First => self.0.next_column(seat, player, columns),
            Seat::Second => self.1.next_column(seat, player, columns),
        }
    }

    fn reject(&mut self, seat: Seat, error: &GridError) -> Result<(), MatchError> {
        match seat {
            Seat::First => self.0.reject(seat, error),
            Seat::Second => self.1.reject(seat, error),
        }
    }
}

impl<T: MoveSource + ?Sized> MoveSource for &mut T {
    fn next_column(
        &mut self,
        seat: Seat,
        player: &Player,
        columns: usize,
    ) -> Result<usize, MatchError> {
        (**self).next_column(seat, player, columns)
    }

    fn reject(&mut self, seat: Seat, error: &GridError) -> Result<(), MatchError> {
        (**self).reject(seat, error)
    }
}
