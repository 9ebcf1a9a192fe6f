//! 事件分类器 - 将触发事件映射到消息池和图标
//!
//! 优先级：
//! 1. push → 推送池
//! 2. pull_request + opened → PR 打开池
//! 3. pull_request + closed + merged → 合并池
//! 4. pull_request + closed + 未合并 → 关闭池
//! 5. pull_request_review + submitted → review 池
//! 6. 其他事件 → 带 actor 的兜底消息
//!
//! pull_request / pull_request_review 的其他动作不产生消息。

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::messages::{self, icon};
use crate::notification::event::{EventKind, TriggerContext};

/// 消息池
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessagePool {
    Push,
    PullRequestOpened,
    PullRequestMerged,
    PullRequestClosed,
    Review,
}

impl MessagePool {
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            MessagePool::Push => messages::PUSH,
            MessagePool::PullRequestOpened => messages::PULL_REQUEST_OPENED,
            MessagePool::PullRequestMerged => messages::PULL_REQUEST_MERGED,
            MessagePool::PullRequestClosed => messages::PULL_REQUEST_CLOSED,
            MessagePool::Review => messages::REVIEW,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MessagePool::Push => icon::PUSH,
            MessagePool::PullRequestOpened => icon::PULL_REQUEST_OPENED,
            MessagePool::PullRequestMerged => icon::PULL_REQUEST_MERGED,
            MessagePool::PullRequestClosed => icon::PULL_REQUEST_CLOSED,
            MessagePool::Review => icon::REVIEW,
        }
    }

    /// 从池中均匀随机选取一条
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        self.messages().choose(rng).copied()
    }
}

/// 分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Pool(MessagePool),
    Fallback,
}

/// 激励内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotivationalContent {
    pub message: String,
    pub icon: &'static str,
}

/// 按优先级选择消息池，None 表示该事件不产生消息
pub fn select(ctx: &TriggerContext) -> Option<Selection> {
    let action = ctx.action();

    match ctx.event_kind() {
        EventKind::Push => Some(Selection::Pool(MessagePool::Push)),
        EventKind::PullRequest => match action {
            Some("opened") => Some(Selection::Pool(MessagePool::PullRequestOpened)),
            Some("closed") if ctx.merged => Some(Selection::Pool(MessagePool::PullRequestMerged)),
            Some("closed") => Some(Selection::Pool(MessagePool::PullRequestClosed)),
            _ => None,
        },
        EventKind::PullRequestReview => match action {
            Some("submitted") => Some(Selection::Pool(MessagePool::Review)),
            _ => None,
        },
        EventKind::Other(_) => Some(Selection::Fallback),
    }
}

/// 分析事件并生成激励内容
pub fn classify<R: Rng + ?Sized>(ctx: &TriggerContext, rng: &mut R) -> Option<MotivationalContent> {
    info!(
        event = %ctx.event_name,
        action = ctx.action().unwrap_or(""),
        "Analyzing event"
    );

    let content = match select(ctx)? {
        Selection::Pool(pool) => MotivationalContent {
            message: pool.pick(rng)?.to_string(),
            icon: pool.icon(),
        },
        Selection::Fallback => MotivationalContent {
            message: messages::fallback(ctx.actor_or_unknown()),
            icon: icon::FALLBACK,
        },
    };

    debug!(icon = content.icon, "Event classified");
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pr(action: &str, merged: bool) -> TriggerContext {
        TriggerContext::builder("pull_request")
            .action(action)
            .actor("contributor")
            .merged(merged)
            .build()
    }

    #[test]
    fn test_select_precedence() {
        let push = TriggerContext::builder("push").build();
        assert_eq!(select(&push), Some(Selection::Pool(MessagePool::Push)));

        assert_eq!(
            select(&pr("opened", false)),
            Some(Selection::Pool(MessagePool::PullRequestOpened))
        );
        assert_eq!(
            select(&pr("closed", true)),
            Some(Selection::Pool(MessagePool::PullRequestMerged))
        );
        assert_eq!(
            select(&pr("closed", false)),
            Some(Selection::Pool(MessagePool::PullRequestClosed))
        );

        let review = TriggerContext::builder("pull_request_review")
            .action("submitted")
            .build();
        assert_eq!(select(&review), Some(Selection::Pool(MessagePool::Review)));

        let other = TriggerContext::builder("workflow_dispatch").build();
        assert_eq!(select(&other), Some(Selection::Fallback));
    }

    #[test]
    fn test_push_ignores_action_and_merged() {
        let ctx = TriggerContext::builder("push")
            .action("closed")
            .merged(true)
            .build();
        assert_eq!(select(&ctx), Some(Selection::Pool(MessagePool::Push)));
    }

    #[test]
    fn test_opened_ignores_merged_flag() {
        assert_eq!(
            select(&pr("opened", true)),
            Some(Selection::Pool(MessagePool::PullRequestOpened))
        );
    }

    #[test]
    fn test_partial_pull_request_match_is_no_message() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(classify(&pr("synchronize", false), &mut rng), None);
        assert_eq!(classify(&pr("reopened", true), &mut rng), None);

        let no_action = TriggerContext::builder("pull_request").build();
        assert_eq!(classify(&no_action, &mut rng), None);
    }

    #[test]
    fn test_review_without_submitted_is_no_message() {
        let mut rng = StdRng::seed_from_u64(7);
        let ctx = TriggerContext::builder("pull_request_review")
            .action("dismissed")
            .build();
        assert_eq!(classify(&ctx, &mut rng), None);
    }

    #[test]
    fn test_classify_draws_from_documented_pool() {
        let cases = [
            (TriggerContext::builder("push").build(), MessagePool::Push, "🚀"),
            (pr("opened", false), MessagePool::PullRequestOpened, "🎯"),
            (pr("closed", true), MessagePool::PullRequestMerged, "🎉"),
            (pr("closed", false), MessagePool::PullRequestClosed, "💪"),
            (
                TriggerContext::builder("pull_request_review")
                    .action("submitted")
                    .build(),
                MessagePool::Review,
                "👀",
            ),
        ];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (ctx, pool, expected_icon) in &cases {
                let content = classify(ctx, &mut rng).unwrap();
                assert!(
                    pool.messages().contains(&content.message.as_str()),
                    "{:?} produced message outside its pool: {}",
                    pool,
                    content.message
                );
                assert_eq!(content.icon, *expected_icon);
            }
        }
    }

    #[test]
    fn test_classify_deterministic_with_constant_rng() {
        let mut rng = StepRng::new(0, 0);
        let content = classify(&pr("closed", true), &mut rng).unwrap();
        assert_eq!(content.message, messages::PULL_REQUEST_MERGED[0]);
        assert_eq!(content.icon, "🎉");
    }

    #[test]
    fn test_same_seed_same_message() {
        let ctx = TriggerContext::builder("push").build();
        let a = classify(&ctx, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = classify(&ctx, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(MessagePool::Review.pick(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), MessagePool::Review.messages().len());
    }

    #[test]
    fn test_fallback_uses_actor() {
        let mut rng = StepRng::new(0, 0);
        let ctx = TriggerContext::builder("release").actor("lead-dev").build();
        let content = classify(&ctx, &mut rng).unwrap();
        assert_eq!(
            content.message,
            "Excellent travail lead-dev ! 🌟 Continue ton super boulot !"
        );
        assert_eq!(content.icon, "⭐");
    }

    #[test]
    fn test_fallback_without_actor() {
        let mut rng = StepRng::new(0, 0);
        let ctx = TriggerContext::builder("").build();
        let content = classify(&ctx, &mut rng).unwrap();
        assert!(content.message.contains("unknown"));
        assert_eq!(content.icon, "⭐");
    }
}
