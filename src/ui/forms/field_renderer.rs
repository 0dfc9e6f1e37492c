//! Field rendering: label, input, description and message slot

use crate::state::{FieldIds, FieldState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (input box + description + message)
pub const FIELD_HEIGHT: u16 = 5;

const MASK_CHAR: char = '•';

/// Everything needed to draw one field, passed explicitly
pub struct FieldView<'a> {
    pub field: &'a FieldState,
    pub ids: &'a FieldIds,
    pub is_active: bool,
    /// Render the value as bullets
    pub mask: bool,
    /// Static content for the message slot when there is no error
    pub fallback_message: Option<&'a str>,
}

/// What the message slot shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSlot<'a> {
    Error(&'a str),
    Static(&'a str),
    Empty,
}

/// The first error wins over static content; with neither the slot is empty
pub fn message_slot<'a>(field: &'a FieldState, fallback: Option<&'a str>) -> MessageSlot<'a> {
    match (field.first_error(), fallback) {
        (Some(error), _) => MessageSlot::Error(&error.message),
        (None, Some(text)) if !text.is_empty() => MessageSlot::Static(text),
        _ => MessageSlot::Empty,
    }
}

/// Text shown inside the input box
pub fn display_value(field: &FieldState, mask: bool) -> String {
    if mask {
        std::iter::repeat(MASK_CHAR)
            .take(field.value.chars().count())
            .collect()
    } else {
        field.value.clone()
    }
}

/// Draw a form field from its state and identifiers
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Description
            Constraint::Length(1), // Message
        ])
        .split(area);

    let name = view.field.name;
    let attrs = view.ids.control(view.field.has_error());

    let border_style = if attrs.invalid {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if view.is_active { "▌" } else { "" };
    let value = display_value(view.field, view.mask);
    let input_line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(name.placeholder(), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", name.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(input_line).block(block), chunks[0]);

    let description =
        Paragraph::new(name.description()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(description, chunks[1]);

    match message_slot(view.field, view.fallback_message) {
        MessageSlot::Error(message) => {
            let paragraph = Paragraph::new(message).style(Style::default().fg(Color::Red));
            frame.render_widget(paragraph, chunks[2]);
        }
        MessageSlot::Static(text) => {
            let paragraph = Paragraph::new(text).style(Style::default().fg(Color::Green));
            frame.render_widget(paragraph, chunks[2]);
        }
        MessageSlot::Empty => {}
    }
}
