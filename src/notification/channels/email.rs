//! 邮件渠道（占位实现）
//!
//! 不做真实投递，只记录本应发送的邮件内容，永远不会失败。

use anyhow::Result;
use tracing::info;

use crate::notification::channel::{NotificationChannel, NotificationMessage, SendResult};
use crate::notification::payload::FALLBACK_TITLE;

/// 默认收件人域名
pub const DEFAULT_EMAIL_DOMAIN: &str = "company.com";

/// 邮件渠道配置
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// 收件人域名（收件人为 <actor>@<domain>）
    pub domain: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// 渲染后的邮件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// 邮件渠道
pub struct EmailChannel {
    config: EmailConfig,
}

impl EmailChannel {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub fn draft(&self, message: &NotificationMessage) -> EmailDraft {
        let mut body = message.content.message.clone();
        if let Some(summary) = message.context.commit_summary() {
            body.push_str("\n\nCommit: ");
            body.push_str(&summary);
        }

        EmailDraft {
            to: format!("{}@{}", message.context.actor_or_unknown(), self.config.domain),
            subject: format!("{} - {}", FALLBACK_TITLE, message.content.icon),
            body,
        }
    }
}

impl NotificationChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    fn send(&self, message: &NotificationMessage) -> Result<SendResult> {
        let draft = self.draft(message);
        info!(
            channel = "email",
            to = %draft.to,
            subject = %draft.subject,
            body = %draft.body,
            "Email notification (placeholder)"
        );
        Ok(SendResult::Logged("email placeholder".to_string()))
    }
}
