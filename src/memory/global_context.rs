//! 全局上下文：整棵任务树共享的知识库与已完成意图台账
//!
//! - 事实（SemanticFactRecord）按 (summary, file_path) 忽略大小写去重，写入即刷新到最新位置；
//!   超出容量时按 FIFO 淘汰最旧条目。
//! - 已完成意图按 hash 幂等登记，同一 hash 至多一条台账记录。
//! - 所有操作持有同一把互斥锁，读操作返回拷贝，调用方拿不到内部存储的引用。

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MemorySection;
use crate::core::SecurityProfile;

/// 事实库默认容量
pub const MAX_FACTS: usize = 4096;

const DEFAULT_FACT_KIND: &str = "general";

/// 一条已学到的事实；file_path 为空表示工作区范围
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticFactRecord {
    pub summary: String,
    pub detail: String,
    pub source: String,
    pub file_path: String,
    pub recorded_at: DateTime<Utc>,
    pub kind: String,
}

/// 忽略大小写比较；纯 ASCII 时不分配
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

impl SemanticFactRecord {
    fn same_identity(&self, summary: &str, file_path: &str) -> bool {
        eq_ignore_case(&self.summary, summary) && eq_ignore_case(&self.file_path, file_path)
    }

    pub fn is_workspace_wide(&self) -> bool {
        self.file_path.is_empty()
    }
}

/// 已完成意图台账条目（只追加，不修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedIntentRecord {
    pub hash: String,
    pub intent: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct GlobalState {
    facts: VecDeque<SemanticFactRecord>,
    intent_hashes: HashSet<String>,
    intent_ledger: Vec<CompletedIntentRecord>,
    security_profile: SecurityProfile,
}

/// 一次 assignment 运行内共享的全局上下文；通常包在 Arc 中交给各执行分支
#[derive(Debug)]
pub struct GlobalContext {
    state: Mutex<GlobalState>,
    max_facts: usize,
}

impl GlobalContext {
    pub fn new() -> Self {
        Self::with_capacity(MAX_FACTS)
    }

    /// 指定事实库容量（至少为 1）
    pub fn with_capacity(max_facts: usize) -> Self {
        Self {
            state: Mutex::new(GlobalState::default()),
            max_facts: max_facts.max(1),
        }
    }

    pub fn from_config(section: &MemorySection) -> Self {
        Self::with_capacity(section.max_facts)
    }

    pub fn max_facts(&self) -> usize {
        self.max_facts
    }

    fn lock(&self) -> MutexGuard<'_, GlobalState> {
        // 单个调用内不会留下半更新状态，中毒后直接沿用内部数据
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 全部事实的时点拷贝（最旧在前）
    pub fn facts(&self) -> Vec<SemanticFactRecord> {
        self.lock().facts.iter().cloned().collect()
    }

    pub fn fact_count(&self) -> usize {
        self.lock().facts.len()
    }

    /// 按 summary（忽略大小写）从新到旧查找，返回最近一次记录的 detail，不区分文件
    pub fn try_get_fact(&self, summary: &str) -> Option<String> {
        self.try_get_fact_record(summary).map(|f| f.detail)
    }

    pub fn try_get_fact_record(&self, summary: &str) -> Option<SemanticFactRecord> {
        let needle = summary.trim();
        self.lock()
            .facts
            .iter()
            .rev()
            .find(|f| eq_ignore_case(&f.summary, needle))
            .cloned()
    }

    /// 对某个文件可见的事实：工作区范围的事实 + 该文件自己的事实
    pub fn facts_in_scope(&self, file_path: &str) -> Vec<SemanticFactRecord> {
        let path = file_path.trim();
        self.lock()
            .facts
            .iter()
            .filter(|f| f.is_workspace_wide() || eq_ignore_case(&f.file_path, path))
            .cloned()
            .collect()
    }

    /// 写入事实：summary 为空白时忽略；同一 (summary, file_path) 先删除再追加到末尾，超出容量淘汰最旧
    pub fn set_fact(
        &self,
        summary: &str,
        detail: &str,
        source: Option<&str>,
        file_path: Option<&str>,
        kind: Option<&str>,
    ) {
        let summary = summary.trim();
        if summary.is_empty() {
            return;
        }
        let file_path = file_path.map(str::trim).unwrap_or_default();
        let record = SemanticFactRecord {
            summary: summary.to_string(),
            detail: detail.to_string(),
            source: source.unwrap_or_default().to_string(),
            file_path: file_path.to_string(),
            recorded_at: Utc::now(),
            kind: kind
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .unwrap_or(DEFAULT_FACT_KIND)
                .to_string(),
        };

        let mut state = self.lock();
        if let Some(pos) = state
            .facts
            .iter()
            .position(|f| f.same_identity(summary, file_path))
        {
            state.facts.remove(pos);
        }
        state.facts.push_back(record);
        while state.facts.len() > self.max_facts {
            if let Some(evicted) = state.facts.pop_front() {
                tracing::debug!("Evicted fact '{}' (capacity {})", evicted.summary, self.max_facts);
            }
        }
    }

    pub fn has_completed_intent(&self, hash: &str) -> bool {
        self.lock().intent_hashes.contains(hash)
    }

    /// 幂等登记已完成意图；返回是否为首次登记。空白 hash 忽略
    pub fn register_completed_intent(&self, hash: &str, intent: &str) -> bool {
        if hash.trim().is_empty() {
            return false;
        }
        let mut state = self.lock();
        if !state.intent_hashes.insert(hash.to_string()) {
            tracing::debug!("Duplicate intent ignored: {}", hash);
            return false;
        }
        state.intent_ledger.push(CompletedIntentRecord {
            hash: hash.to_string(),
            intent: intent.to_string(),
            completed_at: Utc::now(),
        });
        true
    }

    /// 已完成意图台账拷贝（按登记顺序）
    pub fn completed_intent_ledger(&self) -> Vec<CompletedIntentRecord> {
        self.lock().intent_ledger.clone()
    }

    pub fn security_profile(&self) -> SecurityProfile {
        self.lock().security_profile.clone()
    }

    pub fn set_security_profile(&self, profile: SecurityProfile) {
        self.lock().security_profile = profile;
    }

    /// 清空事实、意图集合与台账（安全档案保留），用于两次独立运行之间
    pub fn reset_state(&self) {
        let mut state = self.lock();
        let facts = state.facts.len();
        let intents = state.intent_ledger.len();
        state.facts.clear();
        state.intent_hashes.clear();
        state.intent_ledger.clear();
        tracing::info!("Global context reset ({} facts, {} intents cleared)", facts, intents);
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
