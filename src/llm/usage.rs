//! 用量快照：请求 / 任务计数与 token 统计的只读时点值
//!
//! 由外部遥测收集器产出，核心只读取。

use serde::{Deserialize, Serialize};

use crate::llm::wire::ChatUsage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub completed_tasks: u64,
    pub failed_tasks: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    /// 命中缓存的 prompt token（部分后端提供）
    #[serde(default)]
    pub cached_prompt_tokens: u64,
}

impl UsageSnapshot {
    /// prompt + completion
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }

    /// 在当前快照基础上叠加一次成功请求的用量，返回新快照
    pub fn with_request(&self, usage: Option<&ChatUsage>) -> Self {
        let mut next = *self;
        next.total_requests += 1;
        next.successful_requests += 1;
        if let Some(u) = usage {
            next.prompt_tokens += u.prompt_tokens;
            next.completion_tokens += u.completion_tokens;
        }
        next
    }

    pub fn with_failed_request(&self) -> Self {
        let mut next = *self;
        next.total_requests += 1;
        next.failed_requests += 1;
        next
    }
}

impl From<ChatUsage> for UsageSnapshot {
    fn from(usage: ChatUsage) -> Self {
        Self::default().with_request(Some(&usage))
    }
}
