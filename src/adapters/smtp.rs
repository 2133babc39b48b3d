use std::str::FromStr;

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::Mailbox,
    transport::smtp::authentication::Credentials,
};

use crate::ports::notification_sender::{NotificationSender as NotificationSenderTrait, Result};

/// SMTP接続設定
///
/// 環境変数（.env経由）から組み立てる。認証情報が無い場合は無認証で送る。
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub use_starttls: bool,
}

/// NotificationSenderのSMTP実装
pub struct SmtpNotificationSender {
    config: SmtpConfig,
}

impl SmtpNotificationSender {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl NotificationSenderTrait for SmtpNotificationSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let from_mailbox = Mailbox::from_str(&self.config.from)
            .map_err(|e| format!("Invalid from address: {}", e))?;
        let to_mailbox = Mailbox::from_str(to).map_err(|e| format!("Invalid to address: {}", e))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| format!("Failed to build email: {}", e))?;

        let mailer_builder = if self.config.use_starttls {
            SmtpTransport::starttls_relay(&self.config.host)
                .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.host)
        }
        .port(self.config.port);

        let mailer_builder =
            if let (Some(username), Some(password)) = (&self.config.username, &self.config.password)
            {
                mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                mailer_builder
            };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| format!("Failed to send email: {}", e))?;

        tracing::debug!(to, subject, "notification sent");

        Ok(())
    }
}
