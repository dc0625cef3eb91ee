//! TUI rendering with ratatui
//!
//! Single-screen layout: root word, text field, used words, score.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (root word)
            Constraint::Length(3), // Input field
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, &alert.title, &alert.message);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    // Root word as spaced letter tiles
    let tiles = app
        .game
        .root_word()
        .text()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");

    let header = Paragraph::new(tiles)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 ROOT WORDS ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Typing => (" Enter your word | Enter: Submit ", Color::Yellow),
        InputMode::Alert => (" Press Enter to continue ", Color::DarkGray),
    };

    let content = if app.input_buffer.is_empty() && app.input_mode == InputMode::Typing {
        Line::from(Span::styled(
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input_buffer.as_str())
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

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.used_words();

    let items: Vec<ListItem> = if used.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        used.iter()
            .enumerate()
            .map(|(i, word)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(word.text(), Style::default().fg(Color::Green)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", used.len()))
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let score = app.game.score();
    let score_color = if score < 0 { Color::Red } else { Color::Cyan };
    let score_text = Paragraph::new(format!("Score: {score}"))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(score_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(score_text, chunks[0]);

    let best = app
        .stats
        .best_score
        .map_or_else(|| "-".to_string(), |b| b.to_string());
    let stats_text = format!("Games: {} | Best: {best}", app.stats.games_played);
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Ctrl+N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), 50, 7);

    let content = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "[ I got it ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `width` columns by `height` rows centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
