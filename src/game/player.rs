use super::board::Cell;

/// Which of the two players in a match. `First` always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Piece color assigned to this seat.
    pub fn piece(self) -> Cell {
        match self {
            Seat::First => Cell::Yellow,
            Seat::Second => Cell::Red,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A named participant and the piece color they drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    piece: Cell,
}

impl Player {
    pub fn new(name: impl Into<String>, piece: Cell) -> Self {
        Player {
            name: name.into(),
            piece,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Cell {
        self.piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_pieces() {
        assert_eq!(Seat::First.piece(), Cell::Yellow);
        assert_eq!(Seat::Second.piece(), Cell::Red);
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Player 1", Cell::Yellow);
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.piece(), Cell::Yellow);
    }
}
