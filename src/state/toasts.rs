//! Visible toast stack and its slide-in animation state

use crate::notify::Toast;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A toast that has been received and is on screen
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub toast: Toast,
    pub shown_at: Instant,
}

impl ActiveToast {
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(200);

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.toast.duration
    }

    /// Eased slide-in progress from 0.0 (off screen) to 1.0 (in place)
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed >= Self::SLIDE_DURATION {
            return 1.0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide_progress(now) < 1.0
    }
}

/// Receives toasts from the notification channel and tracks which are visible
#[derive(Debug)]
pub struct ToastStack {
    rx: mpsc::UnboundedReceiver<Toast>,
    active: Vec<ActiveToast>,
    max_visible: usize,
}

impl ToastStack {
    pub const DEFAULT_MAX_VISIBLE: usize = 10;

    pub fn new(rx: mpsc::UnboundedReceiver<Toast>) -> Self {
        Self {
            rx,
            active: Vec::new(),
            max_visible: Self::DEFAULT_MAX_VISIBLE,
        }
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    /// Pull every pending toast off the channel, keeping only the newest
    /// `max_visible` on screen.
    pub fn drain(&mut self, now: Instant) {
        while let Ok(toast) = self.rx.try_recv() {
            self.active.push(ActiveToast {
                toast,
                shown_at: now,
            });
        }
        if self.active.len() > self.max_visible {
            let excess = self.active.len() - self.max_visible;
            self.active.drain(..excess);
        }
    }

    /// Drop toasts whose duration has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|t| !t.is_expired(now));
    }

    pub fn dismiss_all(&mut self) {
        self.active.clear();
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.iter().any(|t| t.is_animating(now))
    }
}
