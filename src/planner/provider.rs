//! 规划器接缝：外部 LLM 客户端实现 PlanProvider，核心只负责传入上下文、接收任务列表
//!
//! StaticPlanProvider 返回预置计划，便于在无模型的情况下跑通编排流程。

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::HiveResult;
use crate::memory::GlobalContext;
use crate::planner::{AgentPlannedTask, PlannerRequestContext};

/// 规划器 trait：根据请求上下文与共享知识产出任务列表
#[async_trait]
pub trait PlanProvider: Send + Sync {
    async fn plan(
        &self,
        request: &PlannerRequestContext,
        global: &GlobalContext,
    ) -> HiveResult<Vec<AgentPlannedTask>>;
}

/// 预置计划：根计划 + 按被展开任务 id 索引的子计划；未知任务返回空计划
#[derive(Debug, Clone, Default)]
pub struct StaticPlanProvider {
    root_plan: Vec<AgentPlannedTask>,
    expansions: HashMap<String, Vec<AgentPlannedTask>>,
}

impl StaticPlanProvider {
    pub fn new(root_plan: Vec<AgentPlannedTask>) -> Self {
        Self {
            root_plan,
            expansions: HashMap::new(),
        }
    }

    pub fn with_expansion(
        mut self,
        task_id: impl Into<String>,
        plan: Vec<AgentPlannedTask>,
    ) -> Self {
        self.expansions.insert(task_id.into(), plan);
        self
    }
}

#[async_trait]
impl PlanProvider for StaticPlanProvider {
    async fn plan(
        &self,
        request: &PlannerRequestContext,
        _global: &GlobalContext,
    ) -> HiveResult<Vec<AgentPlannedTask>> {
        Ok(match request.parent_task() {
            None => self.root_plan.clone(),
            Some(parent) => self.expansions.get(&parent.id).cloned().unwrap_or_default(),
        })
    }
}

/// 展开前先检查深度 / 分解开关，再调用规划器
pub async fn expand_with(
    provider: &dyn PlanProvider,
    request: &PlannerRequestContext,
    global: &GlobalContext,
    max_depth: u32,
) -> HiveResult<Vec<AgentPlannedTask>> {
    request.ensure_can_expand(max_depth)?;
    let tasks = provider.plan(request, global).await?;
    tracing::debug!(
        "Planner returned {} task(s) at depth {}",
        tasks.len(),
        request.depth()
    );
    Ok(tasks)
}
