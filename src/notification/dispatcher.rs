//! 通知分发器 - 按注册顺序把消息发送到各渠道

use super::channel::{NotificationChannel, NotificationMessage, SendResult};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

/// 通知分发器
///
/// 渠道按注册顺序依次发送，任一渠道返回 Err 即中止并向上传播。
pub struct NotificationDispatcher {
    /// 所有注册的渠道
    channels: Vec<Arc<dyn NotificationChannel>>,
    /// 是否为 dry-run 模式
    dry_run: bool,
}

impl NotificationDispatcher {
    /// 创建新的分发器
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 注册渠道
    pub fn register_channel(&mut self, channel: Arc<dyn NotificationChannel>) {
        info!(channel = channel.name(), "Registering notification channel");
        self.channels.push(channel);
    }

    /// 同步发送消息到所有渠道
    pub fn send_sync(&self, message: &NotificationMessage) -> Result<Vec<(String, SendResult)>> {
        let mut results = Vec::new();

        if self.dry_run {
            println!("{}", message.payload.to_pretty_string()?);
        }

        for channel in &self.channels {
            let name = channel.name().to_string();

            if self.dry_run {
                eprintln!("[DRY-RUN] Would send to channel: {}", name);
                results.push((name, SendResult::Skipped("dry-run".to_string())));
                continue;
            }

            let result = channel.send(message).map_err(|e| {
                error!(channel = %name, error = %e, "Channel send failed");
                e
            })?;

            results.push((name, result));
        }

        Ok(results)
    }

    /// 获取已注册的渠道数量
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// 获取已注册的渠道名称
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
