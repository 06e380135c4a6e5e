//! Presentation: a plain-text transcript for console play and a terminal UI
//! built on Ratatui.

mod app;
mod game_view;
mod text;

pub use app::App;
pub use text::{render_grid, TextOutput};
