//! 规划请求上下文：描述一次分解调用在任务树中的位置
//!
//! 根调用用 `create_root` 构造；每展开一个任务就用 `create_child` 派生新实例，父实例保持不变。
//! 祖先摘要按从旧到新排列，且记录的是「被展开任务的父任务」，比当前展开滞后一层。

use serde::{Deserialize, Serialize};

use crate::config::PlannerSection;
use crate::core::{HiveError, HiveResult};
use crate::planner::AgentPlannedTask;
use crate::task::normalize::clamp_fraction;

/// 规划调用类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannerInvocationKind {
    /// 顶层 assignment 的首次分解
    AssignmentRoot,
    /// 对某个已规划任务的再分解
    SubtaskExpansion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerRequestContext {
    invocation_kind: PlannerInvocationKind,
    assignment_title: Option<String>,
    assignment_prompt: String,
    workspace_context: String,
    parent_task: Option<AgentPlannedTask>,
    depth: u32,
    work_retention_fraction: f64,
    delegation_fraction: f64,
    allow_decomposition: bool,
    ancestor_summaries: Vec<String>,
}

impl PlannerRequestContext {
    /// 深度 0 的根上下文；有标题时以 "Assignment: {title}" 作为第一条祖先摘要
    pub fn create_root(
        title: Option<&str>,
        prompt: impl Into<String>,
        workspace_context: impl Into<String>,
        work_retention: f64,
        delegation: f64,
    ) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let ancestor_summaries = title
            .iter()
            .map(|t| format!("Assignment: {}", t))
            .collect();

        Self {
            invocation_kind: PlannerInvocationKind::AssignmentRoot,
            assignment_title: title,
            assignment_prompt: prompt.into(),
            workspace_context: workspace_context.into(),
            parent_task: None,
            depth: 0,
            work_retention_fraction: clamp_fraction(work_retention),
            delegation_fraction: clamp_fraction(delegation),
            allow_decomposition: true,
            ancestor_summaries,
        }
    }

    /// 用 [planner] 配置段中的默认比例构造根上下文
    pub fn create_root_from_config(
        title: Option<&str>,
        prompt: impl Into<String>,
        workspace_context: impl Into<String>,
        section: &PlannerSection,
    ) -> Self {
        let mut root = Self::create_root(
            title,
            prompt,
            workspace_context,
            section.default_work_retention,
            section.default_delegation,
        );
        root.enforce_depth_limit(section.max_decomposition_depth);
        root
    }

    /// 为展开 `task_to_expand` 派生子上下文；仅当当前上下文本身已有父任务时，才把该父任务追加进祖先摘要
    pub fn create_child(
        &self,
        task_to_expand: &AgentPlannedTask,
        work_retention: f64,
        delegation: f64,
    ) -> Self {
        let mut child = self.clone();
        child.invocation_kind = PlannerInvocationKind::SubtaskExpansion;
        child.parent_task = Some(task_to_expand.clone());
        child.depth = self.depth + 1;
        child.work_retention_fraction = clamp_fraction(work_retention);
        child.delegation_fraction = clamp_fraction(delegation);
        if let Some(parent) = &self.parent_task {
            child.ancestor_summaries.push(parent.ancestor_summary());
        }
        tracing::debug!(
            "Derived planner context depth {} for task '{}'",
            child.depth,
            task_to_expand.id
        );
        child
    }

    pub fn invocation_kind(&self) -> PlannerInvocationKind {
        self.invocation_kind
    }

    pub fn assignment_title(&self) -> Option<&str> {
        self.assignment_title.as_deref()
    }

    pub fn assignment_prompt(&self) -> &str {
        &self.assignment_prompt
    }

    pub fn workspace_context(&self) -> &str {
        &self.workspace_context
    }

    pub fn parent_task(&self) -> Option<&AgentPlannedTask> {
        self.parent_task.as_ref()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn work_retention_fraction(&self) -> f64 {
        self.work_retention_fraction
    }

    pub fn delegation_fraction(&self) -> f64 {
        self.delegation_fraction
    }

    pub fn allow_decomposition(&self) -> bool {
        self.allow_decomposition
    }

    pub fn set_allow_decomposition(&mut self, allow: bool) {
        self.allow_decomposition = allow;
    }

    pub fn ancestor_summaries(&self) -> &[String] {
        &self.ancestor_summaries
    }

    /// 深度达到上限时关闭分解；不会重新打开调用方已关闭的开关
    pub fn enforce_depth_limit(&mut self, max_depth: u32) {
        if self.depth >= max_depth {
            self.allow_decomposition = false;
        }
    }

    /// 展开前检查：已关闭分解或已达深度上限时返回 DepthLimit
    pub fn ensure_can_expand(&self, max_depth: u32) -> HiveResult<()> {
        if !self.allow_decomposition || self.depth >= max_depth {
            return Err(HiveError::DepthLimit {
                depth: self.depth,
                max_depth,
            });
        }
        Ok(())
    }
}
