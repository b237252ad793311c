//! 执行树节点：把执行上下文挂到任务层级中的某个位置
//!
//! 子任务顺序即执行顺序，由调用方维护；每次修改都会刷新 last_updated_utc。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::execution_context::SmartTaskExecutionContext;
use crate::task::normalize::clamp_fraction;

/// 节点所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SmartTaskState {
    #[default]
    Pending,
    Planning,
    Executing,
    Verifying,
    Succeeded,
    Failed,
    Skipped,
    /// 未识别的外部状态值
    #[serde(other)]
    Unknown,
}

impl SmartTaskState {
    pub fn icon(self) -> &'static str {
        match self {
            SmartTaskState::Pending => "⏳",
            SmartTaskState::Planning => "✏️",
            SmartTaskState::Executing => "⚙️",
            SmartTaskState::Verifying => "🔍",
            SmartTaskState::Succeeded => "✅",
            SmartTaskState::Failed => "❌",
            SmartTaskState::Skipped => "•",
            SmartTaskState::Unknown => "○",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SmartTaskState::Succeeded | SmartTaskState::Failed | SmartTaskState::Skipped
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartTask {
    id: String,
    intent: String,
    #[serde(rename = "type")]
    task_type: String,
    state: SmartTaskState,
    state_icon: &'static str,
    strategy: Option<String>,
    subtasks: Vec<SmartTask>,
    execution_context: Option<SmartTaskExecutionContext>,
    parent_id: Option<String>,
    phase: String,
    stage: String,
    depth: u32,
    work_retention_fraction: f64,
    delegation_fraction: f64,
    last_updated_utc: DateTime<Utc>,
}

impl SmartTask {
    pub fn new(id: impl Into<String>, intent: impl Into<String>) -> Self {
        let state = SmartTaskState::Pending;
        Self {
            id: id.into(),
            intent: intent.into(),
            task_type: String::new(),
            state,
            state_icon: state.icon(),
            strategy: None,
            subtasks: Vec::new(),
            execution_context: None,
            parent_id: None,
            phase: String::new(),
            stage: String::new(),
            depth: 0,
            work_retention_fraction: 0.0,
            delegation_fraction: 0.0,
            last_updated_utc: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.last_updated_utc = Utc::now();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn set_intent(&mut self, intent: impl Into<String>) {
        self.intent = intent.into();
        self.touch();
    }

    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    pub fn set_task_type(&mut self, task_type: impl Into<String>) {
        self.task_type = task_type.into();
        self.touch();
    }

    pub fn state(&self) -> SmartTaskState {
        self.state
    }

    pub fn state_icon(&self) -> &'static str {
        self.state_icon
    }

    pub fn set_state(&mut self, state: SmartTaskState) {
        self.state = state;
        self.state_icon = state.icon();
        self.touch();
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    pub fn set_strategy(&mut self, strategy: Option<String>) {
        self.strategy = strategy;
        self.touch();
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn set_parent_id(&mut self, parent_id: Option<String>) {
        self.parent_id = parent_id;
        self.touch();
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn set_phase(&mut self, phase: impl Into<String>) {
        self.phase = phase.into();
        self.touch();
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn set_stage(&mut self, stage: impl Into<String>) {
        self.stage = stage.into();
        self.touch();
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
        self.touch();
    }

    pub fn work_retention_fraction(&self) -> f64 {
        self.work_retention_fraction
    }

    pub fn set_work_retention_fraction(&mut self, value: f64) {
        self.work_retention_fraction = clamp_fraction(value);
        self.touch();
    }

    pub fn delegation_fraction(&self) -> f64 {
        self.delegation_fraction
    }

    pub fn set_delegation_fraction(&mut self, value: f64) {
        self.delegation_fraction = clamp_fraction(value);
        self.touch();
    }

    pub fn last_updated_utc(&self) -> DateTime<Utc> {
        self.last_updated_utc
    }

    pub fn execution_context(&self) -> Option<&SmartTaskExecutionContext> {
        self.execution_context.as_ref()
    }

    pub fn execution_context_mut(&mut self) -> Option<&mut SmartTaskExecutionContext> {
        self.touch();
        self.execution_context.as_mut()
    }

    pub fn bind_execution_context(&mut self, ctx: SmartTaskExecutionContext) {
        self.execution_context = Some(ctx);
        self.touch();
    }

    // ---------- 子任务 ----------

    pub fn subtasks(&self) -> &[SmartTask] {
        &self.subtasks
    }

    /// 子任务列表的可变引用（调用方负责顺序）
    pub fn subtasks_mut(&mut self) -> &mut Vec<SmartTask> {
        self.touch();
        &mut self.subtasks
    }

    pub fn add_subtask(&mut self, subtask: SmartTask) {
        self.subtasks.push(subtask);
        self.touch();
    }

    /// 插入到指定位置；越界时追加到末尾
    pub fn insert_subtask(&mut self, index: usize, subtask: SmartTask) {
        let index = index.min(self.subtasks.len());
        self.subtasks.insert(index, subtask);
        self.touch();
    }

    // ---------- 树查询 ----------

    /// 先序遍历（含自身），即执行顺序
    pub fn iter(&self) -> impl Iterator<Item = &SmartTask> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.subtasks.iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, id: &str) -> Option<&SmartTask> {
        self.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut SmartTask> {
        if self.id == id {
            return Some(self);
        }
        self.subtasks.iter_mut().find_map(|t| t.find_mut(id))
    }

    pub fn count_in_state(&self, state: SmartTaskState) -> usize {
        self.iter().filter(|t| t.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SmartTask {
        let mut root = SmartTask::new("root", "Ship v2");
        let mut a = SmartTask::new("a", "Backend");
        a.add_subtask(SmartTask::new("a1", "Schema"));
        a.add_subtask(SmartTask::new("a2", "API"));
        root.add_subtask(a);
        root.add_subtask(SmartTask::new("b", "Frontend"));
        root
    }

    #[test]
    fn test_state_icon_follows_state() {
        let mut task = SmartTask::new("t", "intent");
        assert_eq!(task.state_icon(), "⏳");
        task.set_state(SmartTaskState::Verifying);
        assert_eq!(task.state_icon(), "🔍");
        task.set_state(SmartTaskState::Skipped);
        assert_eq!(task.state_icon(), "•");
        assert!(task.is_terminal());
    }

    #[test]
    fn test_unknown_state_deserializes() {
        let state: SmartTaskState = serde_json::from_str("\"Paused\"").unwrap();
        assert_eq!(state, SmartTaskState::Unknown);
        assert_eq!(state.icon(), "○");
    }

    #[test]
    fn test_mutation_touches_timestamp() {
        let mut task = SmartTask::new("t", "intent");
        let before = task.last_updated_utc();
        std::thread::sleep(std::time::Duration::from_millis(2));
        task.set_stage("compiling");
        assert!(task.last_updated_utc() > before);
    }

    #[test]
    fn test_preorder_is_execution_order() {
        let root = sample_tree();
        let ids: Vec<&str> = root.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_insert_subtask_keeps_caller_order() {
        let mut root = sample_tree();
        root.insert_subtask(0, SmartTask::new("z", "First"));
        root.insert_subtask(99, SmartTask::new("y", "Last"));
        let ids: Vec<&str> = root.subtasks().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["z", "a", "b", "y"]);
    }

    #[test]
    fn test_find_and_find_mut() {
        let mut root = sample_tree();
        assert_eq!(root.find("a2").map(|t| t.intent()), Some("API"));
        assert!(root.find("missing").is_none());

        root.find_mut("a1").unwrap().set_state(SmartTaskState::Succeeded);
        root.find_mut("b").unwrap().set_state(SmartTaskState::Succeeded);
        assert_eq!(root.count_in_state(SmartTaskState::Succeeded), 2);
        assert_eq!(root.count_in_state(SmartTaskState::Pending), 3);
    }

    #[test]
    fn test_fractions_clamped() {
        let mut task = SmartTask::new("t", "i");
        task.set_work_retention_fraction(1.7);
        task.set_delegation_fraction(-3.0);
        assert_eq!(task.work_retention_fraction(), 1.0);
        assert_eq!(task.delegation_fraction(), 0.0);
    }
}
