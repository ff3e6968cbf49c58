use crate::core::{Notice, NoticeKind, NoticeLevel, Notifier};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Writes every notice to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => {
                tracing::info!("✅ {} (product {})", notice.message, notice.product_id)
            }
            NoticeLevel::Error => tracing::error!(
                "❌ {} (product {}): {}",
                notice.message,
                notice.product_id,
                notice.detail.as_deref().unwrap_or("-")
            ),
        }
    }
}

/// Forwards notices to a UI task. Notices sent after the receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.sender.send(notice).is_err() {
            tracing::debug!("Notice receiver dropped");
        }
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices().into_iter().map(|n| n.kind).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}
