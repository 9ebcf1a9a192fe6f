//! 通知系统构建器 - 根据配置注册渠道

use super::channels::email::{EmailChannel, EmailConfig, DEFAULT_EMAIL_DOMAIN};
use super::channels::webhook::{WebhookChannel, WebhookConfig};
use super::dispatcher::NotificationDispatcher;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// 通知配置（由 CLI 参数显式构建，库内不读取环境变量）
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Webhook URL，None 表示只打印 payload
    pub webhook_url: Option<String>,
    /// dry-run：渲染但不发送
    pub dry_run: bool,
    /// 是否启用邮件占位渠道
    pub email_enabled: bool,
    /// 邮件收件人域名
    pub email_domain: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            dry_run: false,
            email_enabled: true,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// 通知系统构建器
pub struct NotificationBuilder {
    config: NotifierConfig,
}

impl NotificationBuilder {
    pub fn new() -> Self {
        Self {
            config: NotifierConfig::default(),
        }
    }

    pub fn from_config(config: NotifierConfig) -> Self {
        Self { config }
    }

    /// 设置 webhook URL
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.config.webhook_url = Some(url.into());
        self
    }

    /// 设置 dry-run 模式
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    /// 是否启用邮件渠道
    pub fn enable_email(mut self, enable: bool) -> Self {
        self.config.email_enabled = enable;
        self
    }

    /// 构建 NotificationDispatcher（webhook 在前，邮件在后）
    pub fn build(self) -> Result<NotificationDispatcher> {
        let mut dispatcher = NotificationDispatcher::new().with_dry_run(self.config.dry_run);

        let webhook = WebhookChannel::new(WebhookConfig {
            url: self.config.webhook_url,
        })?;
        if !webhook.is_configured() {
            info!(channel = "webhook", "No webhook URL, payload will only be logged");
        }
        dispatcher.register_channel(Arc::new(webhook));

        if self.config.email_enabled {
            dispatcher.register_channel(Arc::new(EmailChannel::new(EmailConfig {
                domain: self.config.email_domain,
            })));
        }

        Ok(dispatcher)
    }
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
