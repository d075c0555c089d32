//! TUI rendering with ratatui
//!
//! Board, key hints and messages for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{EQUATION_LENGTH, Mark};
use crate::output::{key_hints, tiles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keys and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧮 NERDLE - Guess the Equation")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Option<Mark>) -> Style {
    let bg = match mark {
        Some(Mark::Exact) => Color::Green,
        Some(Mark::Partial) => Color::Yellow,
        Some(Mark::Absent) => Color::DarkGray,
        None => Color::Reset,
    };
    Style::new()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (guess, feedback) in app.game.history() {
        let spans: Vec<Span> = tiles(guess.as_str(), feedback)
            .into_iter()
            .flat_map(|tile| {
                [
                    Span::styled(format!(" {} ", tile.ch), mark_style(Some(tile.mark))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Row being typed
    if app.input_mode == InputMode::Guessing && !app.game.is_game_over() {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..EQUATION_LENGTH)
            .flat_map(|i| {
                let cell = typed.get(i).map_or(" _ ".to_string(), |c| format!(" {c} "));
                [
                    Span::styled(cell, Style::default().fg(Color::White)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let shown = app.game.attempts() + usize::from(!app.game.is_game_over());
    for _ in shown..app.game.max_attempts() {
        lines.push(Line::from(
            " · ".repeat(EQUATION_LENGTH).trim_end().to_string(),
        ));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board ({}/{}) ",
                app.game.attempts(),
                app.game.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Keys
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keys(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keys(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = key_hints(&app.game)
        .into_iter()
        .flat_map(|(key, mark)| {
            [
                Span::styled(format!(" {key} "), mark_style(mark)),
                Span::raw(" "),
            ]
        })
        .collect();

    let keys = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keys, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.attempts();
    let max = app.game.max_attempts();
    let percent = u16::try_from(used * 100 / max.max(1)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used | {} remaining", app.game.remaining()));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver if app.game.is_won() => (
            " 🎉 SOLVED! | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::GameOver => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ".to_string(),
            format!("The equation was {}", app.game.target()),
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter Guess (0-9 + - * / =) | Enter to submit ".to_string(),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | Backspace: Delete",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;
    use crate::game::GameState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_status() {
        let mut app = App::new(StdRng::seed_from_u64(4)).unwrap();
        app.game = GameState::new(Equation::parse("12+34=46").unwrap());
        app.game.submit_guess("13+24=37");
        app.input_buffer = "12+".to_string();

        let text = screen(&app);
        assert!(text.contains("NERDLE"));
        assert!(text.contains("Board (1/6)"));
        assert!(text.contains("5 remaining"));
        assert!(text.contains("Games: 0"));
    }

    #[test]
    fn game_over_reveals_target() {
        let mut app = App::new(StdRng::seed_from_u64(4)).unwrap();
        app.game = GameState::new(Equation::parse("12+34=46").unwrap());
        for guess in [
            "13+24=37", "10+10=20", "56-23=33", "3*34=102", "252/36=7", "99-50=49",
        ] {
            app.input_buffer = guess.to_string();
            app.submit();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(screen(&app).contains("The equation was 12+34=46"));
    }
}
