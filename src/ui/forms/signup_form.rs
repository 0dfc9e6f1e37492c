//! Account creation form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::state::{FieldName, FieldStatus, Form, FormSession};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by the form card, borders and margin included
pub const SIGNUP_FORM_HEIGHT: u16 = 2 + 2 + 3 + 3 * FIELD_HEIGHT + BUTTON_HEIGHT;

/// Shown in the message slot of a field that passes its rules
pub const VALID_MESSAGE: &str = "Looks good";

/// Draw the account form inside a bordered card
pub fn draw_signup_form(frame: &mut Frame, area: Rect, session: &FormSession, mask_password: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Heading
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Create Account",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter your information to create your account",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    for (name, area) in FieldName::ALL.iter().zip(&chunks[1..4]) {
        let field = session.field(*name);
        let view = FieldView {
            field,
            ids: session.ids(*name),
            is_active: session.active_field() == name.index(),
            mask: mask_password && name.is_secret(),
            fallback_message: (field.status() == FieldStatus::Valid).then_some(VALID_MESSAGE),
        };
        draw_field(frame, *area, &view);
    }

    let submitting = session.is_submitting();
    let label = if submitting { "Submitting..." } else { "Submit" };
    render_button(
        frame,
        chunks[4],
        label,
        session.is_submit_focused(),
        !submitting,
    );
}
