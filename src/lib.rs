//! Motivation Agent - 根据 CI 仓库事件发送法语激励消息到聊天 webhook

pub mod agent;
pub mod cli;
pub mod motivation;
pub mod notification;

pub use agent::{MotivationAgent, RunOutcome};
pub use motivation::{classify, MessagePool, MotivationalContent};
pub use notification::{
    ChatPayload, NotificationBuilder, NotificationDispatcher, NotificationMessage, NotifierConfig,
    SendResult, TriggerContext,
};
