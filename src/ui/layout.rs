//! Page layout components (header, form card, footer, status bar)

use super::forms::SIGNUP_FORM_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form card
pub const CARD_MAX_WIDTH: u16 = 64;

/// Areas of the page, top to bottom
pub struct PageLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into header, main content, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Center the form card inside the main area, shrinking it if the terminal
/// is too small
pub fn card_area(main: Rect) -> Rect {
    let width = CARD_MAX_WIDTH.min(main.width);
    let height = SIGNUP_FORM_HEIGHT.min(main.height);
    Rect {
        x: main.x + (main.width - width) / 2,
        y: main.y + (main.height - height) / 2,
        width,
        height,
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "ratatui ⚡ Signup Form",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from("Built with ratatui, crossterm and tokio"),
        Line::from("Validation rules mirror the account schema"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let state = if app.session.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(state);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    if app.session.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::Black).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused row
fn get_hints(app: &App) -> String {
    if app.session.is_submit_focused() {
        format!("Tab:next  Enter:submit  {}:submit", crate::platform::SUBMIT_SHORTCUT)
    } else {
        format!(
            "Tab:next  S-Tab:prev  {}:submit  Esc:clear",
            crate::platform::SUBMIT_SHORTCUT
        )
    }
}
