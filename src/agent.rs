//! 激励 Agent - 分类事件、渲染消息并分发
//!
//! 触发上下文 → 分类器 → 激励内容 → payload → 分发器 → webhook / 邮件

use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::motivation::{classify, MotivationalContent};
use crate::notification::{NotificationDispatcher, NotificationMessage, SendResult, TriggerContext};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// 已生成消息并完成分发
    Notified {
        content: MotivationalContent,
        results: Vec<(String, SendResult)>,
    },
    /// 该事件不产生消息
    NoMessage,
}

impl RunOutcome {
    pub fn is_notified(&self) -> bool {
        matches!(self, RunOutcome::Notified { .. })
    }
}

/// 激励 Agent
pub struct MotivationAgent {
    dispatcher: NotificationDispatcher,
}

impl MotivationAgent {
    pub fn new(dispatcher: NotificationDispatcher) -> Self {
        Self { dispatcher }
    }

    /// 处理一次触发事件
    pub fn run<R: Rng + ?Sized>(&self, ctx: &TriggerContext, rng: &mut R) -> Result<RunOutcome> {
        info!("Starting motivational agent");

        let Some(content) = classify(ctx, rng) else {
            info!(event = %ctx.event_name, "No motivational message generated for this event type");
            return Ok(RunOutcome::NoMessage);
        };

        info!(text = %content.message, "Generated message");

        let message = NotificationMessage::new(content, ctx.clone());
        let results = self.dispatcher.send_sync(&message)?;

        info!(channels = results.len(), "Motivational agent completed successfully");
        Ok(RunOutcome::Notified {
            content: message.content,
            results,
        })
    }
}
