//! 通知渠道 trait 定义

use anyhow::Result;

use super::event::TriggerContext;
use super::payload::ChatPayload;
use crate::motivation::MotivationalContent;

/// 通知消息
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// 激励内容
    pub content: MotivationalContent,
    /// 触发上下文
    pub context: TriggerContext,
    /// 渲染好的聊天 payload
    pub payload: ChatPayload,
}

impl NotificationMessage {
    /// 由激励内容和上下文创建消息，同时渲染 payload
    pub fn new(content: MotivationalContent, context: TriggerContext) -> Self {
        let payload = ChatPayload::from_content(&content, &context);
        Self {
            content,
            context,
            payload,
        }
    }
}

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 只记录日志（未配置目标或占位渠道）
    Logged(String),
    /// 跳过（dry-run 等）
    Skipped(String),
}

/// 通知渠道 trait
///
/// `send` 返回 Err 表示本次运行的终止性失败，不做重试。
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 同步发送消息
    fn send(&self, message: &NotificationMessage) -> Result<SendResult>;
}
