//! Notifier backed by an unbounded tokio channel

use super::{Notifier, Toast};
use tokio::sync::mpsc;

/// Sends toasts to whoever holds the paired receiver
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, message = %toast.message, "toast");
        if self.tx.send(toast).is_err() {
            tracing::debug!("toast dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;

    #[test]
    fn test_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Toast::error("first"));
        notifier.notify(Toast::success("second"));

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.message, "first");
        assert_eq!(second.kind, ToastKind::Success);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_receiver_does_not_panic() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Toast::error("nobody listening"));
    }
}
