use super::player::Seat;

/// Round wins per seat. Counts only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTable {
    wins: [u32; 2],
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    /// Credit one round win to `seat`, returning its new total.
    pub fn record_win(&mut self, seat: Seat) -> u32 {
        let wins = &mut self.wins[seat.index()];
        *wins += 1;
        *wins
    }

    /// The seat whose total has reached `target`, if any.
    pub fn leader_at(&self, target: u32) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| self.wins(seat) >= target)
    }
}
