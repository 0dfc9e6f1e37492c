//! Toast stack rendered in the bottom-right corner

use crate::notify::ToastKind;
use crate::state::ActiveToast;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Maximum toast width, borders included
const TOAST_MAX_WIDTH: u16 = 48;

/// Render the visible toasts, newest at the bottom, stacked upward
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[ActiveToast], now: Instant) {
    let width = TOAST_MAX_WIDTH.min(area.width);
    if width < 4 {
        return;
    }
    let inner_width = (width - 2) as usize;

    let mut bottom = area.bottom();
    for active in toasts.iter().rev() {
        let lines = toast_lines(active, inner_width);
        let height = lines.len() as u16 + 2;
        if bottom < area.y + height {
            break;
        }
        let y = bottom - height;
        bottom = y;

        // Slide in from the right edge
        let progress = active.slide_progress(now);
        let offset = ((1.0 - progress) * width as f32).round() as u16;
        let x = area.right() - width + offset.min(width);
        let toast_area = Rect {
            x,
            y,
            width: area.right() - x,
            height,
        }
        .intersection(area);
        if toast_area.width == 0 {
            continue;
        }

        let color = match active.toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, toast_area);
        frame.render_widget(Paragraph::new(lines).block(block), toast_area);
    }
}

fn toast_lines(active: &ActiveToast, max_width: usize) -> Vec<Line<'static>> {
    let color = match active.toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let mut lines: Vec<Line> = wrap_text(&active.toast.message, max_width)
        .into_iter()
        .map(|l| {
            Line::from(Span::styled(
                l,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    if let Some(description) = &active.toast.description {
        // Descriptions are preformatted; keep indentation, only cut long lines
        for line in description.lines() {
            let clipped: String = line.chars().take(max_width).collect();
            lines.push(Line::from(Span::styled(
                clipped,
                Style::default().fg(Color::White),
            )));
        }
    }
    lines
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.chars().count() + word.chars().count() + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
