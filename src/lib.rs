//! # Connect N
//!
//! Generalized Connect Four for two players on a configurable grid. A round
//! is won by lining up `connect_n` pieces in a row, column or diagonal; the
//! match goes to the first player to win `target_score` rounds. Play runs
//! either as a line-oriented console game or in a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Grid, players, score table, match controller
//! - [`input`] — Column sources: console prompt, scripted moves
//! - [`ui`] — Text transcript renderer and terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
