//! 默认运行命令 - 从 CLI 参数 / 环境变量读取触发上下文并执行 Agent

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args};

use crate::agent::{MotivationAgent, RunOutcome};
use crate::notification::channels::email::DEFAULT_EMAIL_DOMAIN;
use crate::notification::{NotificationBuilder, NotifierConfig, TriggerContext};

/// 运行参数（每个参数都可由环境变量提供）
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// 事件名称 (push / pull_request / pull_request_review ...)
    #[arg(long = "event", env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,
    /// 事件动作 (opened / closed / submitted ...)
    #[arg(long = "action", env = "GITHUB_EVENT_ACTION")]
    pub event_action: Option<String>,
    /// 触发者
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: Option<String>,
    /// git ref (如 refs/heads/main)
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,
    /// 仓库 (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,
    /// PR 是否已合并 ("true" 表示已合并)
    #[arg(long, env = "PR_MERGED")]
    pub merged: Option<String>,
    /// PR 之前的状态
    #[arg(long, env = "PR_STATE")]
    pub pr_state: Option<String>,
    /// commit 消息
    #[arg(long, env = "COMMIT_MESSAGE")]
    pub commit_message: Option<String>,
    /// 聊天 webhook URL（未设置时只打印 payload）
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,
    /// Dry-run 模式（只打印不发送）
    #[arg(
        long,
        env = "MOTIVATION_DRY_RUN",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub dry_run: bool,
    /// 不记录邮件占位通知
    #[arg(
        long,
        env = "MOTIVATION_NO_EMAIL",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_email: bool,
    /// 邮件收件人域名
    #[arg(long, env = "MOTIVATION_EMAIL_DOMAIN")]
    pub email_domain: Option<String>,
}

impl RunArgs {
    /// 构建触发上下文
    pub fn trigger_context(&self) -> TriggerContext {
        TriggerContext::builder(self.event_name.clone().unwrap_or_default())
            .optional_fields(
                self.event_action.clone(),
                self.actor.clone(),
                self.git_ref.clone(),
                self.repository.clone(),
                self.pr_state.clone(),
                self.commit_message.clone(),
            )
            .merged(self.merged.as_deref() == Some("true"))
            .build()
    }

    /// 构建通知配置
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            webhook_url: self.webhook_url.clone().filter(|url| !url.is_empty()),
            dry_run: self.dry_run,
            email_enabled: !self.no_email,
            email_domain: self
                .email_domain
                .clone()
                .filter(|domain| !domain.is_empty())
                .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_string()),
        }
    }
}

/// 执行一次运行
pub fn handle_run(args: RunArgs) -> Result<RunOutcome> {
    let ctx = args.trigger_context();
    let dispatcher = NotificationBuilder::from_config(args.notifier_config()).build()?;
    let agent = MotivationAgent::new(dispatcher);

    agent.run(&ctx, &mut rand::thread_rng())
}
