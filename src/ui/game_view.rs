use crate::game::{Cell, Grid, MatchController, MatchPhase, Seat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &MatchController,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = game.grid().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game.grid(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::DarkGray,
        Cell::Yellow => Color::Yellow,
        Cell::Red => Color::Red,
    }
}

fn render_header(frame: &mut Frame, game: &MatchController, area: Rect) {
    let (status, seat) = match game.phase() {
        MatchPhase::RoundInProgress => (
            format!("Current Player: {}", game.current_player().name()),
            game.current_seat(),
        ),
        MatchPhase::RoundWon(seat) => ("Round Over".to_string(), seat),
        MatchPhase::RoundDrawn => ("Round Drawn".to_string(), game.current_seat()),
        MatchPhase::MatchComplete(seat) => ("Game Over".to_string(), seat),
    };
    let color = piece_color(game.player(seat).piece());

    let score = format!(
        "{} {} - {} {}  |  connect {}, first to {}",
        game.player(Seat::First).name(),
        game.score().wins(Seat::First),
        game.score().wins(Seat::Second),
        game.player(Seat::Second).name(),
        game.connect_n(),
        game.target_score()
    );

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(score),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Connect N"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, grid: &Grid, selected_column: usize, area: Rect) {
    let columns = grid.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..columns {
        let label = format!("{:^3}", col);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw(" "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("╔{}╗", "═".repeat(columns * 3))));

    for row in grid.cells() {
        let mut row_spans = vec![Span::raw("║")];
        for &cell in row {
            let symbol = match cell {
                Cell::Empty => " . ",
                Cell::Yellow | Cell::Red => " ● ",
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(piece_color(cell))));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("╚{}╝", "═".repeat(columns * 3))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw(" ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw(" "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  N: Next round  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
