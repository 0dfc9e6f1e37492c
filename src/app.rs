//! Application state and core logic

use crate::config::AppConfig;
use crate::notify::ChannelNotifier;
use crate::state::{Form, FormSession, SubmitTicket, ToastStack};
use crate::submit::{AccountSubmitter, SimulatedSubmitter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// The account form
    pub session: FormSession,
    /// Toasts received from the session
    pub toasts: ToastStack,
    pub config: AppConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance using the simulated submitter
    pub fn new(config: AppConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        Self::with_submitter(config, submitter)
    }

    /// Create an App with a specific account submitter
    pub fn with_submitter(config: AppConfig, submitter: Arc<dyn AccountSubmitter>) -> Self {
        let (notifier, rx) = ChannelNotifier::new();
        let session = FormSession::new(submitter, Arc::new(notifier))
            .with_toast_durations(config.toast_durations());

        Self {
            session,
            toasts: ToastStack::new(rx),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Pull new toasts and drop expired ones
    pub fn tick(&mut self, now: Instant) {
        self.toasts.drain(now);
        self.toasts.prune(now);
    }

    /// Whether the UI should redraw at animation rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.session.is_submitting() || self.toasts.is_animating(now)
    }

    /// Handle a key press on the form
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_button = self.session.is_submit_focused();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.session.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.session.prev_field(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit();
            }
            KeyCode::Enter if on_button => self.submit(),
            // Enter in a field moves on, like tabbing through the form
            KeyCode::Enter => self.session.next_field(),
            KeyCode::Esc => {
                if self.toasts.is_empty() {
                    self.session.clear_focused();
                } else {
                    self.toasts.dismiss_all();
                }
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.session.input_char(c)
            }
            KeyCode::Backspace => self.session.backspace(),
            _ => {}
        }
    }

    /// Submit the form; the submission task reports back through toasts
    fn submit(&mut self) {
        match self.session.submit() {
            SubmitTicket::Ignored => {}
            SubmitTicket::Rejected(issues) => {
                tracing::debug!(issues = issues.len(), "form has validation errors");
            }
            SubmitTicket::Pending(_) => {
                tracing::debug!("submission started");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use crate::state::{FieldName, UNEXPECTED_ERROR_MESSAGE};
    use crate::submit::{MockAccountSubmitter, SubmitError};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_form(app: &mut App) {
        type_text(app, "alice");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "alice@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Secret123");
    }

    fn fast_app() -> App {
        let config = AppConfig {
            submit_delay_ms: Some(0),
            ..Default::default()
        };
        App::new(config)
    }

    #[test]
    fn test_should_quit_initially_false() {
        let mut app = fast_app();
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = fast_app();
        type_text(&mut app, "bob");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.session.field(FieldName::Username).value, "bo");
    }

    #[test]
    fn test_enter_in_field_advances_focus() {
        let mut app = fast_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.focused_field(), Some(FieldName::Email));
    }

    #[test]
    fn test_arrow_keys_move_focus() {
        let mut app = fast_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.session.focused_field(), Some(FieldName::Email));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = fast_app();
        app.handle_key(ctrl('x'));
        assert!(app.session.field(FieldName::Username).value.is_empty());
    }

    #[test]
    fn test_esc_clears_focused_field() {
        let mut app = fast_app();
        type_text(&mut app, "ab");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.session.field(FieldName::Username).value.is_empty());
    }

    #[tokio::test]
    async fn test_submit_empty_form_shows_errors() {
        let mut app = fast_app();
        app.handle_key(ctrl('s'));
        app.tick(Instant::now());
        assert!(!app.toasts.is_empty());
        assert!(app
            .toasts
            .visible()
            .iter()
            .all(|t| t.toast.kind == ToastKind::Error));
        assert!(!app.session.is_submitting());

        // Esc dismisses toasts before clearing fields
        type_text(&mut app, "ab");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.toasts.is_empty());
        assert_eq!(app.session.field(FieldName::Username).value, "ab");
    }

    #[tokio::test]
    async fn test_submit_from_button_creates_account() {
        let mut app = fast_app();
        fill_form(&mut app);
        app.handle_key(key(KeyCode::Tab));
        assert!(app.session.is_submit_focused());
        app.handle_key(key(KeyCode::Enter));
        assert!(app.session.is_submitting());

        while app.session.is_submitting() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        app.tick(Instant::now());
        let toasts = app.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].toast.kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn test_failing_submitter_shows_generic_error() {
        let mut submitter = MockAccountSubmitter::new();
        submitter
            .expect_create_account()
            .times(1)
            .returning(|_| Err(SubmitError::Rejected("username taken".to_string())));
        let mut app = App::with_submitter(AppConfig::default(), Arc::new(submitter));
        fill_form(&mut app);
        app.handle_key(ctrl('s'));

        while app.session.is_submitting() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        app.tick(Instant::now());
        let toasts = app.toasts.visible();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].toast.message, UNEXPECTED_ERROR_MESSAGE);
    }
}
