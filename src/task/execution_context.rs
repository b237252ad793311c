//! 任务执行上下文：单个任务的生命周期记录
//!
//! - 状态只能经 `set_status` 改变，显示文本与图标随 `status_kind` 一起更新，不会出现不一致。
//! - 类型、优先级、标签在写入时归一化（见 `task::normalize`）。
//! - 修复历史与产出上下文只追加；产出条目 trim 后截断到 4000 字符。
//! - 每次字段变化都会递增 revision；若有订阅者，经 mpsc 通道推送 TaskChange（核心自身不读取）。

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::planner::{AgentCommandDescription, AgentPlannedTask};
use crate::task::normalize::{
    clamp_fraction, fraction_percent, normalize_priority, normalize_tags, normalize_type,
    priority_score,
};

/// 单条产出上下文的最大字符数
pub const MAX_CONTEXT_ENTRY_CHARS: usize = 4000;

const DEFAULT_MAX_REPAIR_ATTEMPTS: u32 = 5;

static NEXT_CREATION_ORDER: AtomicU64 = AtomicU64::new(0);

/// 执行状态：Planned → PendingApproval → InProgress → {Succeeded | Failed | Skipped}
///
/// 不强制转换表，重试会从 Failed 回到 InProgress。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatusKind {
    #[default]
    Planned,
    PendingApproval,
    InProgress,
    Succeeded,
    Failed,
    Skipped,
}

impl TaskStatusKind {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatusKind::Planned => "Planned",
            TaskStatusKind::PendingApproval => "Pending approval",
            TaskStatusKind::InProgress => "In progress",
            TaskStatusKind::Succeeded => "Completed",
            TaskStatusKind::Failed => "Failed",
            TaskStatusKind::Skipped => "Skipped",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TaskStatusKind::Planned => "📝",
            TaskStatusKind::PendingApproval => "⏸",
            TaskStatusKind::InProgress => "⚙",
            TaskStatusKind::Succeeded => "✅",
            TaskStatusKind::Failed => "❌",
            TaskStatusKind::Skipped => "⏭",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatusKind::Succeeded | TaskStatusKind::Failed | TaskStatusKind::Skipped
        )
    }
}

/// 字段变更通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChange {
    pub task_number: u32,
    pub field: &'static str,
    pub revision: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartTaskExecutionContext {
    task_number: u32,
    creation_order: u64,
    label: String,
    #[serde(rename = "type")]
    task_type: String,
    status_kind: TaskStatusKind,
    status: String,
    status_icon: String,
    created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    last_result_text: String,
    agent_task_id: String,
    commands: Vec<AgentCommandDescription>,
    attempt_count: u32,
    max_repair_attempts: u32,
    task_log_text: String,
    dependencies: Vec<String>,
    parent_task_id: Option<String>,
    task_context: String,
    aggregated_context_snapshot: String,
    repair_attempt_history: Vec<String>,
    produced_context_entries: Vec<String>,
    priority: String,
    priority_score: u8,
    phase: String,
    context_tags: Vec<String>,
    allows_dependents_to_proceed: bool,
    requires_command_execution: bool,
    has_scheduled_repair_task: bool,
    work_retention_fraction: f64,
    delegation_fraction: f64,
    work_retention_display: String,
    revision: u64,
    #[serde(skip)]
    last_changed: Option<&'static str>,
    #[serde(skip)]
    notifier: Option<mpsc::UnboundedSender<TaskChange>>,
}

impl SmartTaskExecutionContext {
    pub fn new(task_number: u32, label: impl Into<String>) -> Self {
        let priority = normalize_priority("");
        let status_kind = TaskStatusKind::Planned;
        Self {
            task_number,
            creation_order: NEXT_CREATION_ORDER.fetch_add(1, Ordering::Relaxed),
            label: label.into(),
            task_type: String::new(),
            status_kind,
            status: status_kind.label().to_string(),
            status_icon: status_kind.icon().to_string(),
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            last_result_text: String::new(),
            agent_task_id: String::new(),
            commands: Vec::new(),
            attempt_count: 0,
            max_repair_attempts: DEFAULT_MAX_REPAIR_ATTEMPTS,
            task_log_text: String::new(),
            dependencies: Vec::new(),
            parent_task_id: None,
            task_context: String::new(),
            aggregated_context_snapshot: String::new(),
            repair_attempt_history: Vec::new(),
            produced_context_entries: Vec::new(),
            priority_score: priority_score(&priority),
            priority,
            phase: String::new(),
            context_tags: Vec::new(),
            allows_dependents_to_proceed: true,
            requires_command_execution: false,
            has_scheduled_repair_task: false,
            work_retention_fraction: 0.0,
            delegation_fraction: 0.0,
            work_retention_display: fraction_percent(0.0),
            revision: 0,
            last_changed: None,
            notifier: None,
        }
    }

    /// 由规划出的任务构造执行上下文（不含子任务）
    pub fn from_planned(
        task_number: u32,
        planned: &AgentPlannedTask,
        parent_task_id: Option<&str>,
        max_repair_attempts: u32,
    ) -> Self {
        let mut ctx = Self::new(task_number, planned.label.trim());
        ctx.agent_task_id = planned.id.trim().to_string();
        ctx.task_type = normalize_type(&planned.task_type);
        ctx.priority = normalize_priority(&planned.priority);
        ctx.priority_score = priority_score(&ctx.priority);
        ctx.phase = planned.phase.trim().to_string();
        ctx.context_tags = normalize_tags(&planned.context_tags);
        ctx.dependencies = normalize_tags(&planned.dependencies);
        ctx.commands = planned.commands.clone();
        ctx.requires_command_execution = !planned.commands.is_empty();
        ctx.task_context = planned.context.clone();
        ctx.parent_task_id = parent_task_id
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        ctx.max_repair_attempts = max_repair_attempts;
        ctx
    }

    fn touch(&mut self, field: &'static str) {
        self.revision += 1;
        self.last_changed = Some(field);
        let change = TaskChange {
            task_number: self.task_number,
            field,
            revision: self.revision,
        };
        let closed = match &self.notifier {
            Some(tx) => tx.send(change).is_err(),
            None => false,
        };
        if closed {
            // 订阅端已关闭
            self.notifier = None;
        }
    }

    /// 订阅字段变更；新的订阅会替换旧的
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<TaskChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.notifier = Some(tx);
        rx
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_changed(&self) -> Option<&'static str> {
        self.last_changed
    }

    // ---------- 标识与排序 ----------

    pub fn task_number(&self) -> u32 {
        self.task_number
    }

    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// 稳定排序键：创建时间相同时按 creation_order 决定先后
    pub fn ordering_key(&self) -> (DateTime<Utc>, u64) {
        (self.created_at, self.creation_order)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.touch("label");
    }

    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    pub fn set_task_type(&mut self, task_type: &str) {
        self.task_type = normalize_type(task_type);
        self.touch("type");
    }

    pub fn agent_task_id(&self) -> &str {
        &self.agent_task_id
    }

    pub fn set_agent_task_id(&mut self, id: impl Into<String>) {
        self.agent_task_id = id.into();
        self.touch("agent_task_id");
    }

    // ---------- 状态 ----------

    pub fn status_kind(&self) -> TaskStatusKind {
        self.status_kind
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_icon(&self) -> &str {
        &self.status_icon
    }

    /// 唯一的状态入口：同时更新 status_kind、显示文本与图标，并记录开始 / 完成时间
    pub fn set_status(&mut self, kind: TaskStatusKind) {
        let previous = self.status_kind;
        self.status_kind = kind;
        self.status = kind.label().to_string();
        self.status_icon = kind.icon().to_string();

        let now = Utc::now();
        if kind == TaskStatusKind::InProgress {
            if self.started_at.is_none() {
                self.started_at = Some(now);
            }
            self.completed_at = None;
        } else if kind.is_terminal() && kind != previous {
            self.completed_at = Some(now);
        }
        tracing::debug!(
            "Task #{} status {:?} -> {:?}",
            self.task_number,
            previous,
            kind
        );
        self.touch("status");
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn last_result_text(&self) -> &str {
        &self.last_result_text
    }

    pub fn set_last_result_text(&mut self, text: impl Into<String>) {
        self.last_result_text = text.into();
        self.touch("last_result_text");
    }

    // ---------- 命令与重试 ----------

    pub fn commands(&self) -> &[AgentCommandDescription] {
        &self.commands
    }

    pub fn set_commands(&mut self, commands: Vec<AgentCommandDescription>) {
        self.commands = commands;
        self.touch("commands");
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn set_attempt_count(&mut self, count: u32) {
        self.attempt_count = count;
        self.touch("attempt_count");
    }

    /// 尝试次数加一，返回新值
    pub fn record_attempt(&mut self) -> u32 {
        self.attempt_count = self.attempt_count.saturating_add(1);
        self.touch("attempt_count");
        self.attempt_count
    }

    pub fn max_repair_attempts(&self) -> u32 {
        self.max_repair_attempts
    }

    pub fn set_max_repair_attempts(&mut self, max: u32) {
        self.max_repair_attempts = max;
        self.touch("max_repair_attempts");
    }

    pub fn repair_budget_exhausted(&self) -> bool {
        self.attempt_count >= self.max_repair_attempts
    }

    pub fn has_scheduled_repair_task(&self) -> bool {
        self.has_scheduled_repair_task
    }

    pub fn set_has_scheduled_repair_task(&mut self, value: bool) {
        self.has_scheduled_repair_task = value;
        self.touch("has_scheduled_repair_task");
    }

    pub fn requires_command_execution(&self) -> bool {
        self.requires_command_execution
    }

    pub fn set_requires_command_execution(&mut self, value: bool) {
        self.requires_command_execution = value;
        self.touch("requires_command_execution");
    }

    pub fn allows_dependents_to_proceed(&self) -> bool {
        self.allows_dependents_to_proceed
    }

    pub fn set_allows_dependents_to_proceed(&mut self, value: bool) {
        self.allows_dependents_to_proceed = value;
        self.touch("allows_dependents_to_proceed");
    }

    // ---------- 日志与上下文 ----------

    pub fn task_log_text(&self) -> &str {
        &self.task_log_text
    }

    /// 追加一行日志（按换行分隔）
    pub fn append_log(&mut self, line: &str) {
        if !self.task_log_text.is_empty() {
            self.task_log_text.push('\n');
        }
        self.task_log_text.push_str(line.trim_end());
        self.touch("task_log_text");
    }

    pub fn task_context(&self) -> &str {
        &self.task_context
    }

    pub fn set_task_context(&mut self, context: impl Into<String>) {
        self.task_context = context.into();
        self.touch("task_context");
    }

    pub fn aggregated_context_snapshot(&self) -> &str {
        &self.aggregated_context_snapshot
    }

    pub fn set_aggregated_context_snapshot(&mut self, snapshot: impl Into<String>) {
        self.aggregated_context_snapshot = snapshot.into();
        self.touch("aggregated_context_snapshot");
    }

    pub fn repair_attempt_history(&self) -> &[String] {
        &self.repair_attempt_history
    }

    /// 追加修复历史；空白忽略
    pub fn record_repair_history_entry(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() {
            return;
        }
        self.repair_attempt_history.push(entry.to_string());
        self.touch("repair_attempt_history");
    }

    pub fn produced_context_entries(&self) -> &[String] {
        &self.produced_context_entries
    }

    /// 追加产出上下文；空白忽略，超过 4000 字符截断
    pub fn append_context_entry(&mut self, entry: &str) {
        let entry = entry.trim();
        if entry.is_empty() {
            return;
        }
        let stored: String = entry.chars().take(MAX_CONTEXT_ENTRY_CHARS).collect();
        self.produced_context_entries.push(stored);
        self.touch("produced_context_entries");
    }

    // ---------- 依赖与层级 ----------

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn set_dependencies<I, S>(&mut self, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dependencies = normalize_tags(dependencies);
        self.touch("dependencies");
    }

    pub fn parent_task_id(&self) -> Option<&str> {
        self.parent_task_id.as_deref()
    }

    pub fn set_parent_task_id(&mut self, parent: Option<String>) {
        self.parent_task_id = parent;
        self.touch("parent_task_id");
    }

    // ---------- 优先级、阶段、标签 ----------

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn priority_score(&self) -> u8 {
        self.priority_score
    }

    pub fn set_priority(&mut self, priority: &str) {
        self.priority = normalize_priority(priority);
        self.priority_score = priority_score(&self.priority);
        self.touch("priority");
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn set_phase(&mut self, phase: impl Into<String>) {
        self.phase = phase.into();
        self.touch("phase");
    }

    pub fn context_tags(&self) -> &[String] {
        &self.context_tags
    }

    pub fn set_context_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.context_tags = normalize_tags(tags);
        self.touch("context_tags");
    }

    // ---------- 工作比例 ----------

    pub fn work_retention_fraction(&self) -> f64 {
        self.work_retention_fraction
    }

    pub fn work_retention_display(&self) -> &str {
        &self.work_retention_display
    }

    pub fn set_work_retention_fraction(&mut self, value: f64) {
        self.work_retention_fraction = clamp_fraction(value);
        self.work_retention_display = fraction_percent(self.work_retention_fraction);
        self.touch("work_retention_fraction");
    }

    pub fn delegation_fraction(&self) -> f64 {
        self.delegation_fraction
    }

    pub fn set_delegation_fraction(&mut self, value: f64) {
        self.delegation_fraction = clamp_fraction(value);
        self.touch("delegation_fraction");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_defaults() {
        let ctx = SmartTaskExecutionContext::new(1, "Build");
        assert_eq!(ctx.status_kind(), TaskStatusKind::Planned);
        assert_eq!(ctx.status(), "Planned");
        assert_eq!(ctx.priority(), "Normal");
        assert_eq!(ctx.priority_score(), 2);
        assert_eq!(ctx.max_repair_attempts(), 5);
        assert_eq!(ctx.revision(), 0);
        assert!(ctx.allows_dependents_to_proceed());
    }

    #[test]
    fn test_set_status_keeps_display_in_sync() {
        let mut ctx = SmartTaskExecutionContext::new(1, "Build");
        ctx.set_status(TaskStatusKind::Succeeded);
        assert_eq!(ctx.status_kind(), TaskStatusKind::Succeeded);
        assert_eq!(ctx.status(), "Completed");
        assert!(!ctx.status_icon().is_empty());
        assert_eq!(ctx.last_changed(), Some("status"));
    }

    #[test]
    fn test_status_timestamps_and_retry() {
        let mut ctx = SmartTaskExecutionContext::new(1, "Deploy");
        ctx.set_status(TaskStatusKind::InProgress);
        let started = ctx.started_at().unwrap();
        assert!(ctx.completed_at().is_none());

        ctx.set_status(TaskStatusKind::Failed);
        assert!(ctx.completed_at().is_some());

        // 重试：Failed -> InProgress 保留首次开始时间并清除完成时间
        ctx.set_status(TaskStatusKind::InProgress);
        assert_eq!(ctx.started_at(), Some(started));
        assert!(ctx.completed_at().is_none());
        assert_eq!(ctx.status(), "In progress");
    }

    #[test]
    fn test_terminal_to_terminal_restamps_completion() {
        let mut ctx = SmartTaskExecutionContext::new(1, "Lint");
        ctx.set_status(TaskStatusKind::Failed);
        let failed_at = ctx.completed_at().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        ctx.set_status(TaskStatusKind::Skipped);
        let skipped_at = ctx.completed_at().unwrap();
        assert!(skipped_at > failed_at);

        // 同一终态重复设置不改时间
        std::thread::sleep(std::time::Duration::from_millis(5));
        ctx.set_status(TaskStatusKind::Skipped);
        assert_eq!(ctx.completed_at(), Some(skipped_at));
    }

    #[test]
    fn test_priority_normalization() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_priority("URGENT");
        assert_eq!(ctx.priority(), "Urgent");
        assert_eq!(ctx.priority_score(), 2);
        ctx.set_priority("low");
        assert_eq!(ctx.priority(), "Low");
        assert_eq!(ctx.priority_score(), 3);
        ctx.set_priority("cRiTiCaL");
        assert_eq!(ctx.priority(), "Critical");
        assert_eq!(ctx.priority_score(), 0);
        ctx.set_priority("  ");
        assert_eq!(ctx.priority(), "Normal");
    }

    #[test]
    fn test_type_normalization() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_task_type("q");
        assert_eq!(ctx.task_type(), "Q");
        ctx.set_task_type("refactorCode");
        assert_eq!(ctx.task_type(), "RefactorCode");
        ctx.set_task_type(" ");
        assert_eq!(ctx.task_type(), "");
    }

    #[test]
    fn test_context_entry_truncated_and_blank_dropped() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.append_context_entry(&"x".repeat(5000));
        assert_eq!(ctx.produced_context_entries().len(), 1);
        assert_eq!(ctx.produced_context_entries()[0].chars().count(), 4000);

        ctx.append_context_entry("   \n\t");
        ctx.append_context_entry("");
        assert_eq!(ctx.produced_context_entries().len(), 1);

        ctx.append_context_entry("  found Cargo.toml  ");
        assert_eq!(ctx.produced_context_entries()[1], "found Cargo.toml");
    }

    #[test]
    fn test_context_entry_truncates_by_chars() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.append_context_entry(&"日".repeat(4500));
        assert_eq!(ctx.produced_context_entries()[0].chars().count(), 4000);
    }

    #[test]
    fn test_repair_history_append_only() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.record_repair_history_entry("  retry with --locked ");
        ctx.record_repair_history_entry(" ");
        ctx.record_repair_history_entry("bump toolchain");
        assert_eq!(
            ctx.repair_attempt_history(),
            &["retry with --locked".to_string(), "bump toolchain".to_string()]
        );
    }

    #[test]
    fn test_tags_and_dependencies_normalized() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_context_tags(["  backend", "", "db  ", "   "]);
        assert_eq!(ctx.context_tags(), &["backend".to_string(), "db".to_string()]);
        ctx.set_dependencies(Vec::<String>::new());
        assert!(ctx.dependencies().is_empty());
        ctx.set_dependencies(vec![" t1 ", "t2"]);
        assert_eq!(ctx.dependencies(), &["t1".to_string(), "t2".to_string()]);
    }

    #[test]
    fn test_attempt_bookkeeping() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_max_repair_attempts(2);
        assert!(!ctx.repair_budget_exhausted());
        ctx.record_attempt();
        assert_eq!(ctx.record_attempt(), 2);
        assert!(ctx.repair_budget_exhausted());
    }

    #[test]
    fn test_fraction_clamp_and_display() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_work_retention_fraction(0.25);
        assert_eq!(ctx.work_retention_display(), "25%");
        ctx.set_work_retention_fraction(7.0);
        assert_eq!(ctx.work_retention_fraction(), 1.0);
        assert_eq!(ctx.work_retention_display(), "100%");
        ctx.set_delegation_fraction(-1.0);
        assert_eq!(ctx.delegation_fraction(), 0.0);
    }

    #[test]
    fn test_append_log_lines() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.append_log("$ cargo build");
        ctx.append_log("Finished\n");
        assert_eq!(ctx.task_log_text(), "$ cargo build\nFinished");
    }

    #[test]
    fn test_creation_order_is_monotonic() {
        let a = SmartTaskExecutionContext::new(1, "a");
        let b = SmartTaskExecutionContext::new(2, "b");
        assert!(b.creation_order() > a.creation_order());
        assert!(b.ordering_key() > a.ordering_key());
    }

    #[test]
    fn test_from_planned() {
        let planned = AgentPlannedTask {
            id: " t3 ".into(),
            label: "Run tests".into(),
            task_type: "test".into(),
            priority: "high".into(),
            phase: "verify".into(),
            context_tags: vec!["ci".into(), " ".into()],
            dependencies: vec!["t1".into(), "".into()],
            commands: vec![AgentCommandDescription {
                executable: "cargo".into(),
                arguments: "test".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let ctx = SmartTaskExecutionContext::from_planned(3, &planned, Some("t1"), 7);
        assert_eq!(ctx.agent_task_id(), "t3");
        assert_eq!(ctx.task_type(), "Test");
        assert_eq!(ctx.priority(), "High");
        assert_eq!(ctx.priority_score(), 1);
        assert_eq!(ctx.context_tags(), &["ci".to_string()]);
        assert_eq!(ctx.dependencies(), &["t1".to_string()]);
        assert!(ctx.requires_command_execution());
        assert_eq!(ctx.parent_task_id(), Some("t1"));
        assert_eq!(ctx.max_repair_attempts(), 7);
    }

    #[test]
    fn test_change_notifications() {
        let mut ctx = SmartTaskExecutionContext::new(9, "t");
        let mut rx = ctx.subscribe();
        ctx.set_phase("build");
        ctx.set_status(TaskStatusKind::InProgress);

        let first = rx.try_recv().unwrap();
        assert_eq!(first.field, "phase");
        assert_eq!(first.task_number, 9);
        let second = rx.try_recv().unwrap();
        assert_eq!(second.field, "status");
        assert_eq!(second.revision, 2);

        // 订阅端关闭后继续修改不会出错
        drop(rx);
        ctx.set_phase("verify");
        assert_eq!(ctx.revision(), 3);
    }

    #[test]
    fn test_serialized_snapshot_uses_wire_names() {
        let mut ctx = SmartTaskExecutionContext::new(1, "t");
        ctx.set_status(TaskStatusKind::Skipped);
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["statusKind"], "Skipped");
        assert_eq!(json["status"], "Skipped");
        assert!(json.get("notifier").is_none());
    }
}
