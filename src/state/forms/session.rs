//! Form session: owns the field states and runs the submit action

use super::field::FieldState;
use super::ids::FieldIds;
use super::record::{FieldName, FormRecord};
use crate::notify::{Notifier, Toast};
use crate::submit::AccountSubmitter;
use crate::validation::{validate_record, FieldIssue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const SUCCESS_MESSAGE: &str = "Account created successfully";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

pub const DEFAULT_SUCCESS_TOAST: Duration = Duration::from_millis(5000);
pub const DEFAULT_ERROR_TOAST: Duration = Duration::from_millis(3000);

/// Trait for focus movement across a form's rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Shared "submission in flight" flag
#[derive(Debug, Clone, Default)]
pub struct SubmitFlag(Arc<AtomicBool>);

/// Holds the [`SubmitFlag`] set until dropped
#[derive(Debug)]
pub struct SubmitGuard(Arc<AtomicBool>);

impl SubmitFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag, or `None` if it is already set
    pub fn try_acquire(&self) -> Option<SubmitGuard> {
        if self.0.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(SubmitGuard(Arc::clone(&self.0)))
        }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Result of a completed submission task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(FormRecord),
    Failed,
}

/// What `submit` did with the request
#[derive(Debug)]
pub enum SubmitTicket {
    /// Another submission is still in flight
    Ignored,
    /// The record failed validation; one error toast was sent per issue
    Rejected(Vec<FieldIssue>),
    /// The record validated and the submission task is running
    Pending(JoinHandle<SubmitOutcome>),
}

/// Toast durations used by the session
#[derive(Debug, Clone, Copy)]
pub struct ToastDurations {
    pub success: Duration,
    pub error: Duration,
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_TOAST,
            error: DEFAULT_ERROR_TOAST,
        }
    }
}

/// The account form: three fields, a submit button row and the submit action
pub struct FormSession {
    fields: [FieldState; 3],
    ids: [FieldIds; 3],
    active_field_index: usize,
    submitting: SubmitFlag,
    submitter: Arc<dyn AccountSubmitter>,
    notifier: Arc<dyn Notifier>,
    durations: ToastDurations,
}

impl FormSession {
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = 3;

    pub fn new(submitter: Arc<dyn AccountSubmitter>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            fields: FieldName::ALL.map(FieldState::new),
            ids: FieldName::ALL.map(|_| FieldIds::new()),
            active_field_index: 0,
            submitting: SubmitFlag::default(),
            submitter,
            notifier,
            durations: ToastDurations::default(),
        }
    }

    pub fn with_toast_durations(mut self, durations: ToastDurations) -> Self {
        self.durations = durations;
        self
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[name.index()]
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        &mut self.fields[name.index()]
    }

    pub fn ids(&self, name: FieldName) -> &FieldIds {
        &self.ids[name.index()]
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Handle to the in-flight flag, observable from other tasks
    pub fn submit_flag(&self) -> SubmitFlag {
        self.submitting.clone()
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.focused_field() {
            self.field_mut(name).push_char(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.focused_field() {
            self.field_mut(name).pop_char();
        }
    }

    /// Clear the focused field
    pub fn clear_focused(&mut self) {
        if let Some(name) = self.focused_field() {
            self.field_mut(name).clear();
        }
    }

    pub fn record(&self) -> FormRecord {
        FormRecord {
            username: self.field(FieldName::Username).value.clone(),
            email: self.field(FieldName::Email).value.clone(),
            password: self.field(FieldName::Password).value.clone(),
        }
    }

    /// Validate the whole record and, if it passes, start the submission.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitTicket {
        let Some(guard) = self.submitting.try_acquire() else {
            tracing::debug!("submit ignored, a submission is already in flight");
            return SubmitTicket::Ignored;
        };

        for field in &mut self.fields {
            field.touched = true;
        }

        let record = self.record();
        if let Err(issues) = validate_record(&record) {
            tracing::info!(issues = issues.len(), "submission rejected by validation");
            for issue in &issues {
                self.notifier
                    .notify(Toast::error(issue.to_string()).with_duration(self.durations.error));
            }
            drop(guard);
            return SubmitTicket::Rejected(issues);
        }

        let submitter = Arc::clone(&self.submitter);
        let notifier = Arc::clone(&self.notifier);
        let durations = self.durations;
        SubmitTicket::Pending(tokio::spawn(async move {
            let _guard = guard;
            run_submission(submitter, notifier, record, durations).await
        }))
    }
}

impl Form for FormSession {
    fn field_count(&self) -> usize {
        4 // username, email, password, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_ROW);
        if index == self.active_field_index {
            return;
        }
        if let Some(name) = self.focused_field() {
            self.field_mut(name).on_blur();
        }
        self.active_field_index = index;
    }
}

/// Run the completion callback and report how it went.
///
/// The callback runs in its own task so a panic surfaces as a `JoinError`
/// instead of unwinding through the caller.
async fn run_submission(
    submitter: Arc<dyn AccountSubmitter>,
    notifier: Arc<dyn Notifier>,
    record: FormRecord,
    durations: ToastDurations,
) -> SubmitOutcome {
    tracing::info!(?record, "form submitted");

    let attempt = {
        let record = record.clone();
        tokio::spawn(async move { submitter.create_account(record).await }).await
    };

    let failure = match attempt {
        Ok(Ok(())) => match record.to_pretty_json() {
            Ok(json) => {
                tracing::info!(username = %record.username, "account created");
                notifier.notify(
                    Toast::success(SUCCESS_MESSAGE)
                        .with_description(json)
                        .with_duration(durations.success),
                );
                return SubmitOutcome::Created(record);
            }
            Err(err) => err.to_string(),
        },
        Ok(Err(err)) => err.to_string(),
        Err(err) => err.to_string(),
    };

    tracing::error!(error = %failure, "account submission failed");
    notifier.notify(Toast::error(UNEXPECTED_ERROR_MESSAGE));
    SubmitOutcome::Failed
}
