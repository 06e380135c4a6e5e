use std::io;

use super::board::Grid;
use super::player::{Player, Seat};
use super::score::ScoreTable;
use crate::config::MatchConfig;
use crate::error::{ConfigError, MatchError, MoveError};
use crate::input::MoveSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    RoundInProgress,
    RoundWon(Seat),
    RoundDrawn,
    MatchComplete(Seat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Winner(Seat),
    Draw,
}

/// A piece that was placed, and what it did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub seat: Seat,
    pub row: usize,
    pub column: usize,
    pub phase: MatchPhase,
}

/// Receives match progress from [`MatchController::play`]. Every hook
/// defaults to doing nothing.
pub trait MatchObserver {
    fn board(&mut self, _grid: &Grid) -> io::Result<()> {
        Ok(())
    }

    fn turn(&mut self, _player: &Player) -> io::Result<()> {
        Ok(())
    }

    fn round_won(&mut self, _winner: &Player, _score: &ScoreTable) -> io::Result<()> {
        Ok(())
    }

    fn round_drawn(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn match_won(&mut self, _winner: &Player) -> io::Result<()> {
        Ok(())
    }
}

impl MatchObserver for () {}

/// Owns the grid, both players and the score table, and sequences turns,
/// rounds and the match.
#[derive(Debug, Clone)]
pub struct MatchController {
    grid: Grid,
    players: [Player; 2],
    score: ScoreTable,
    connect_n: usize,
    target_score: u32,
    current: Seat,
    phase: MatchPhase,
    rounds_played: u32,
}

impl MatchController {
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.columns)?;
        log::info!(
            "new match: {}x{} grid, connect {}, first to {} rounds",
            config.rows,
            config.columns,
            config.connect_n,
            config.target_score
        );
        Ok(MatchController {
            grid,
            players: [
                Player::new(config.players.first.clone(), Seat::First.piece()),
                Player::new(config.players.second.clone(), Seat::Second.piece()),
            ],
            score: ScoreTable::new(),
            connect_n: config.connect_n,
            target_score: config.target_score,
            current: Seat::First,
            phase: MatchPhase::RoundInProgress,
            rounds_played: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat to move next. Only meaningful while a round is in progress.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn score(&self) -> &ScoreTable {
        &self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn connect_n(&self) -> usize {
        self.connect_n
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Rounds finished so far, draws included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, MatchPhase::MatchComplete(_))
    }

    /// Drop the current player's piece into `column` and advance the match.
    ///
    /// A rejected column leaves the grid, score and turn untouched.
    pub fn play_move(&mut self, column: usize) -> Result<Move, MoveError> {
        match self.phase {
            MatchPhase::RoundInProgress => {}
            MatchPhase::RoundWon(_) | MatchPhase::RoundDrawn => {
                return Err(MoveError::RoundOver)
            }
            MatchPhase::MatchComplete(_) => return Err(MoveError::MatchOver),
        }

        let seat = self.current;
        let piece = self.player(seat).piece();
        let row = self.grid.drop_piece(column, piece)?;
        log::debug!(
            "{} dropped into column {column}, landed on row {row}",
            self.player(seat).name()
        );

        if self.grid.check_line(self.connect_n, row, column, piece) {
            self.rounds_played += 1;
            let wins = self.score.record_win(seat);
            self.phase = match self.score.leader_at(self.target_score) {
                Some(leader) => MatchPhase::MatchComplete(leader),
                None => MatchPhase::RoundWon(seat),
            };
            log::info!(
                "{} won round {} ({wins}/{})",
                self.player(seat).name(),
                self.rounds_played,
                self.target_score
            );
        } else if self.grid.is_full() {
            self.rounds_played += 1;
            self.phase = MatchPhase::RoundDrawn;
            log::info!("round {} drawn", self.rounds_played);
        } else {
            self.current = seat.other();
        }

        Ok(Move {
            seat,
            row,
            column,
            phase: self.phase,
        })
    }

    /// Clear the grid for a new round once the previous one has finished.
    /// Returns false if a round is still in progress or the match is over.
    pub fn start_next_round(&mut self) -> bool {
        match self.phase {
            MatchPhase::RoundWon(_) | MatchPhase::RoundDrawn => {
                self.grid.reset();
                self.current = Seat::First;
                self.phase = MatchPhase::RoundInProgress;
                true
            }
            MatchPhase::RoundInProgress | MatchPhase::MatchComplete(_) => false,
        }
    }

    /// Start over with an empty grid and zeroed scores.
    pub fn reset_match(&mut self) {
        self.grid.reset();
        self.score = ScoreTable::new();
        self.current = Seat::First;
        self.phase = MatchPhase::RoundInProgress;
        self.rounds_played = 0;
    }

    /// Ask `source` for a column until the grid accepts one.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<Move, MatchError> {
        loop {
            let seat = self.current;
            let column = source.next_column(seat, self.player(seat), self.grid.columns())?;
            match self.play_move(column) {
                Ok(mv) => return Ok(mv),
                Err(MoveError::Grid(err)) => {
                    log::debug!("rejected column {column}: {err}");
                    source.reject(seat, &err)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Play turns in seat order until the round is won or drawn. A finished
    /// previous round is cleared first.
    pub fn play_round(
        &mut self,
        source: &mut dyn MoveSource,
        observer: &mut dyn MatchObserver,
    ) -> Result<RoundOutcome, MatchError> {
        self.start_next_round();
        loop {
            observer.board(&self.grid)?;
            observer.turn(self.current_player())?;
            let mv = self.play_turn(source)?;
            match mv.phase {
                MatchPhase::RoundInProgress => {}
                MatchPhase::RoundWon(seat) | MatchPhase::MatchComplete(seat) => {
                    return Ok(RoundOutcome::Winner(seat))
                }
                MatchPhase::RoundDrawn => return Ok(RoundOutcome::Draw),
            }
        }
    }

    /// Play rounds until one player reaches the target score, and return
    /// that player's seat.
    pub fn play(
        &mut self,
        source: &mut dyn MoveSource,
        observer: &mut dyn MatchObserver,
    ) -> Result<Seat, MatchError> {
        loop {
            if let MatchPhase::MatchComplete(seat) = self.phase {
                return Ok(seat);
            }
            match self.play_round(source, observer)? {
                RoundOutcome::Winner(seat) => {
                    observer.board(&self.grid)?;
                    observer.round_won(self.player(seat), &self.score)?;
                }
                RoundOutcome::Draw => {
                    observer.board(&self.grid)?;
                    observer.round_drawn()?;
                }
            }
            if let MatchPhase::MatchComplete(seat) = self.phase {
                observer.match_won(self.player(seat))?;
                return Ok(seat);
            }
        }
    }
}
