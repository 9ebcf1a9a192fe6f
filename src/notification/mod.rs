//! 通知层 - 渲染聊天 payload 并分发到各渠道
//!
//! # 使用示例
//! ```ignore
//! use motivation_agent::notification::{NotificationBuilder, NotificationMessage};
//!
//! let dispatcher = NotificationBuilder::new()
//!     .webhook_url("https://hooks.slack.com/services/...")
//!     .build()?;
//!
//! let message = NotificationMessage::new(content, ctx);
//! dispatcher.send_sync(&message)?;
//! ```

pub mod builder;
pub mod channel;
pub mod channels;
pub mod dispatcher;
pub mod event;
pub mod payload;

pub use builder::{NotificationBuilder, NotifierConfig};
pub use channel::{NotificationChannel, NotificationMessage, SendResult};
pub use dispatcher::NotificationDispatcher;
pub use event::{EventKind, TriggerContext, TriggerContextBuilder};
pub use payload::ChatPayload;
