use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::notification_sender::{NotificationSender as NotificationSenderTrait, Result};

/// 記録された通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock implementation of NotificationSender
///
/// Does not send actual notifications. Records successful sends so
/// tests can assert on them, and can be told to fail for specific
/// recipients to exercise partial-failure behavior.
pub struct NotificationSender {
    sent: Mutex<Vec<SentNotification>>,
    failing_recipients: Mutex<HashSet<String>>,
}

impl NotificationSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_recipients: Mutex::new(HashSet::new()),
        }
    }

    /// Make every send to this recipient fail, for testing purposes
    pub fn fail_for(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(recipient.to_string());
    }

    /// Notifications delivered so far
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSenderTrait for NotificationSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        if self.failing_recipients.lock().unwrap().contains(to) {
            return Err(format!("simulated delivery failure for {}", to).into());
        }

        self.sent.lock().unwrap().push(SentNotification {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
