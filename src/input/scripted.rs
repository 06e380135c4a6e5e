use std::collections::VecDeque;

use super::MoveSource;
use crate::error::{GridError, MatchError};
use crate::game::{Player, Seat};

/// Plays back a fixed list of columns, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    columns: VecDeque<usize>,
    rejected: Vec<(Seat, GridError)>,
}

impl ScriptedInput {
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        ScriptedInput {
            columns: columns.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Columns not yet played.
    pub fn remaining(&self) -> usize {
        self.columns.len()
    }

    /// Every refusal reported so far, oldest first.
    pub fn rejected(&self) -> &[(Seat, GridError)] {
        &self.rejected
    }
}

impl MoveSource for ScriptedInput {
    fn next_column(
        &mut self,
        _seat: Seat,
        _player: &Player,
        _columns: usize,
    ) -> Result<usize, MatchError> {
        self.columns.pop_front().ok_or(MatchError::InputClosed)
    }

    fn reject(&mut self, seat: Seat, error: &GridError) -> Result<(), MatchError> {
        self.rejected.push((seat, error.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_plays_back_in_order() {
        let player = Player::new("Player 1", Cell::Yellow);
        let mut input = ScriptedInput::new([2, 0]);
        assert_eq!(input.next_column(Seat::First, &player, 7).unwrap(), 2);
        assert_eq!(input.next_column(Seat::First, &player, 7).unwrap(), 0);
        assert_eq!(input.remaining(), 0);
        assert!(matches!(
            input.next_column(Seat::First, &player, 7),
            Err(MatchError::InputClosed)
        ));
    }

    #[test]
    fn test_pair_dispatches_by_seat() {
        let yellow = Player::new("Player 1", Cell::Yellow);
        let red = Player::new("Player 2", Cell::Red);
        let mut pair = (ScriptedInput::new([1]), ScriptedInput::new([5]));

        assert_eq!(pair.next_column(Seat::Second, &red, 7).unwrap(), 5);
        assert_eq!(pair.next_column(Seat::First, &yellow, 7).unwrap(), 1);

        pair.reject(Seat::Second, &GridError::ColumnFull(5)).unwrap();
        assert!(pair.0.rejected().is_empty());
        assert_eq!(pair.1.rejected(), &[(Seat::Second, GridError::ColumnFull(5))]);
    }
}
