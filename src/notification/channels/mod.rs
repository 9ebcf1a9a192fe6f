//! 具体渠道实现

pub mod email;
pub mod webhook;

pub use email::{EmailChannel, EmailConfig};
pub use webhook::{WebhookChannel, WebhookConfig};
