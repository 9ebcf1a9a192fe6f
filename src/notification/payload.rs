//! Payload 构建模块 - 生成聊天 webhook 的结构化消息
//!
//! Payload 格式：
//! ```json
//! {
//!   "text": "🚀 Motivation GitHub",
//!   "blocks": [
//!     {"type": "header", "text": {"type": "plain_text", "text": "🚀 Agent Motivationnel"}},
//!     {"type": "section", "text": {"type": "mrkdwn", "text": "*message*"}},
//!     {"type": "context", "elements": [{"type": "mrkdwn", "text": "👤 *actor* | 📁 *repo* | 🌿 *branch*"}]}
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;

use super::event::TriggerContext;
use crate::motivation::MotivationalContent;

/// 标题文案
pub const HEADER_TITLE: &str = "Agent Motivationnel";

/// 通知摘要文案（客户端不渲染 blocks 时显示）
pub const FALLBACK_TITLE: &str = "Motivation GitHub";

/// 文本对象类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextKind {
    #[serde(rename = "plain_text")]
    PlainText,
    #[serde(rename = "mrkdwn")]
    Mrkdwn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
}

/// 聊天 webhook payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub text: String,
    pub blocks: Vec<Block>,
}

impl ChatPayload {
    /// 由激励内容和触发上下文生成 payload（header / section / context 三段）
    pub fn from_content(content: &MotivationalContent, ctx: &TriggerContext) -> Self {
        let context_line = format!(
            "👤 *{}* | 📁 *{}* | 🌿 *{}*",
            ctx.actor_or_unknown(),
            ctx.repository_or_unknown(),
            ctx.branch_name()
        );

        Self {
            text: format!("{} {}", content.icon, FALLBACK_TITLE),
            blocks: vec![
                Block::Header {
                    text: TextObject::plain(format!("{} {}", content.icon, HEADER_TITLE)),
                },
                Block::Section {
                    text: TextObject::mrkdwn(format!("*{}*", content.message)),
                },
                Block::Context {
                    elements: vec![TextObject::mrkdwn(context_line)],
                },
            ],
        }
    }

    pub fn header_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Header { text } => Some(text.text.as_str()),
            _ => None,
        })
    }

    pub fn context_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Context { elements } => elements.first().map(|e| e.text.as_str()),
            _ => None,
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("Failed to serialize chat payload")
    }

    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize chat payload")
    }
}
