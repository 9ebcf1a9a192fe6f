//! 激励消息 - 事件分类与消息池

pub mod classifier;
pub mod messages;

pub use classifier::{classify, select, MessagePool, MotivationalContent, Selection};
