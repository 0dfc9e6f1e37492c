//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let page = layout::create_layout(area);

    layout::draw_header(frame, page.header);

    let card = layout::card_area(page.main);
    forms::draw_signup_form(frame, card, &app.session, app.config.mask_password());

    layout::draw_footer(frame, page.footer);
    layout::draw_status_bar(frame, page.status, app);

    // Toasts overlay everything else
    components::render_toasts(frame, area, app.toasts.visible(), Instant::now());
}
