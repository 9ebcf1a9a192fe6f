//! 聊天 Webhook 渠道
//!
//! 向 incoming webhook 发送一次 JSON POST。未配置 URL 时只打印 payload。
//! 只尝试一次：非 200 响应或传输错误直接返回 Err。

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{error, info};

use crate::notification::channel::{NotificationChannel, NotificationMessage, SendResult};

/// Webhook 渠道配置
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    /// Webhook URL，None 表示只记录日志
    pub url: Option<String>,
}

/// Webhook 渠道
#[derive(Debug)]
pub struct WebhookChannel {
    config: WebhookConfig,
    client: Client,
}

impl WebhookChannel {
    /// 创建新的 Webhook 渠道
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(config, client))
    }

    /// 使用已有的 HTTP 客户端
    pub fn with_client(config: WebhookConfig, client: Client) -> Self {
        let config = WebhookConfig {
            url: config.url.filter(|url| !url.is_empty()),
        };
        Self { config, client }
    }

    pub fn is_configured(&self) -> bool {
        self.config.url.is_some()
    }

    fn post(&self, url: &str, message: &NotificationMessage) -> Result<()> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&message.payload)
            .send()
            .context("Failed to post to chat webhook")?;

        let status = response.status();
        info!(channel = "webhook", status = status.as_u16(), "Webhook responded");

        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            error!(channel = "webhook", status = status.as_u16(), body = %body, "Failed to send message");
            bail!("Webhook returned {status}: {body}");
        }

        Ok(())
    }
}

impl NotificationChannel for WebhookChannel {
    fn name(&self) -> &str {
        "webhook"
    }

    fn send(&self, message: &NotificationMessage) -> Result<SendResult> {
        let Some(url) = self.config.url.as_deref() else {
            info!(channel = "webhook", "No webhook URL configured, printing payload instead");
            println!("{}", message.payload.to_pretty_string()?);
            return Ok(SendResult::Logged("no webhook configured".to_string()));
        };

        self.post(url, message)?;
        info!(channel = "webhook", "Motivational message sent");
        Ok(SendResult::Sent)
    }
}
