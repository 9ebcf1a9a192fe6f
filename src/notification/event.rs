//! 触发事件上下文
//!
//! 描述启动本次运行的仓库事件（push / pull_request / review），每次调用只构建一次。

use serde::Serialize;

/// 分支 ref 的前缀
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// commit 摘要的最大字符数
pub const COMMIT_SUMMARY_MAX_CHARS: usize = 100;

/// 缺失字段的占位值
pub const UNKNOWN: &str = "unknown";

/// 仓库事件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Push,
    PullRequest,
    PullRequestReview,
    /// 其他事件（保留原始名称）
    Other(String),
}

impl EventKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "push" => EventKind::Push,
            "pull_request" => EventKind::PullRequest,
            "pull_request_review" => EventKind::PullRequestReview,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "push",
            EventKind::PullRequest => "pull_request",
            EventKind::PullRequestReview => "pull_request_review",
            EventKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 触发上下文（不可变快照）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerContext {
    /// 事件名称
    pub event_name: String,
    /// 事件动作（opened / closed / submitted ...）
    pub event_action: Option<String>,
    /// 触发者
    pub actor: Option<String>,
    /// git ref（如 refs/heads/main）
    pub git_ref: Option<String>,
    /// 仓库（owner/name）
    pub repository: Option<String>,
    /// PR 是否已合并
    pub merged: bool,
    /// PR 之前的状态
    pub prior_state: Option<String>,
    /// commit 消息
    pub commit_message: Option<String>,
}

impl TriggerContext {
    pub fn builder(event_name: impl Into<String>) -> TriggerContextBuilder {
        TriggerContextBuilder::new(event_name)
    }

    pub fn event_kind(&self) -> EventKind {
        EventKind::parse(&self.event_name)
    }

    pub fn action(&self) -> Option<&str> {
        self.event_action.as_deref()
    }

    pub fn actor_or_unknown(&self) -> &str {
        self.actor.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn repository_or_unknown(&self) -> &str {
        self.repository.as_deref().unwrap_or(UNKNOWN)
    }

    /// 从 ref 提取分支名，缺失时返回 "unknown"
    pub fn branch_name(&self) -> &str {
        match self.git_ref.as_deref() {
            Some(git_ref) => git_ref.strip_prefix(BRANCH_REF_PREFIX).unwrap_or(git_ref),
            None => UNKNOWN,
        }
    }

    /// commit 消息摘要，超过 100 个字符时截断并追加 "..."
    pub fn commit_summary(&self) -> Option<String> {
        let message = self.commit_message.as_deref()?;
        let mut chars = message.char_indices();
        match chars.nth(COMMIT_SUMMARY_MAX_CHARS) {
            Some((idx, _)) => Some(format!("{}...", &message[..idx])),
            None => Some(message.to_string()),
        }
    }
}

/// 触发上下文构建器
///
/// 空字符串视为缺失，和 CI 中未设置的变量保持一致。
#[derive(Debug)]
pub struct TriggerContextBuilder {
    context: TriggerContext,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TriggerContextBuilder {
    pub fn new(event_name: impl Into<String>) -> Self {
        Self {
            context: TriggerContext {
                event_name: event_name.into(),
                event_action: None,
                actor: None,
                git_ref: None,
                repository: None,
                merged: false,
                prior_state: None,
                commit_message: None,
            },
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.context.event_action = non_empty(Some(action.into()));
        self
    }

    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.context.actor = non_empty(Some(actor.into()));
        self
    }

    pub fn git_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.context.git_ref = non_empty(Some(git_ref.into()));
        self
    }

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.context.repository = non_empty(Some(repository.into()));
        self
    }

    pub fn merged(mut self, merged: bool) -> Self {
        self.context.merged = merged;
        self
    }

    pub fn prior_state(mut self, state: impl Into<String>) -> Self {
        self.context.prior_state = non_empty(Some(state.into()));
        self
    }

    pub fn commit_message(mut self, message: impl Into<String>) -> Self {
        self.context.commit_message = non_empty(Some(message.into()));
        self
    }

    /// 一次性设置所有可选字段（用于 CLI 参数）
    pub fn optional_fields(
        mut self,
        action: Option<String>,
        actor: Option<String>,
        git_ref: Option<String>,
        repository: Option<String>,
        prior_state: Option<String>,
        commit_message: Option<String>,
    ) -> Self {
        self.context.event_action = non_empty(action);
        self.context.actor = non_empty(actor);
        self.context.git_ref = non_empty(git_ref);
        self.context.repository = non_empty(repository);
        self.context.prior_state = non_empty(prior_state);
        self.context.commit_message = non_empty(commit_message);
        self
    }

    pub fn build(self) -> TriggerContext {
        self.context
    }
}
