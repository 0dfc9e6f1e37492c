//! Notification channel for transient user-facing messages
//!
//! Producers call [`Notifier::notify`] and move on; the UI drains the
//! receiving end of a [`ChannelNotifier`] and renders what arrives as toasts.

mod channel;
mod toast;

pub use channel::ChannelNotifier;
pub use toast::{Toast, ToastKind};

/// Fire-and-forget sink for toasts
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
