//! Core Connect-N logic: the grid with gravity drops and line checks, the
//! players and their score table, and the match controller that sequences
//! turns, rounds and the match.

mod board;
mod controller;
mod player;
mod score;

pub use board::{Cell, Grid, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION};
pub use controller::{MatchController, MatchObserver, MatchPhase, Move, RoundOutcome};
pub use player::{Player, Seat};
pub use score::ScoreTable;
