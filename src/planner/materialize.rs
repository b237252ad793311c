//! 把规划出的任务接入执行树：每个 AgentPlannedTask 配一个 SmartTask 与执行上下文
//!
//! 任务编号按深度优先顺序连续分配，可跨多次展开复用同一个 PlanMaterializer。
//! 若传入 GlobalContext，意图已完成的任务直接标记为 Skipped。

use crate::core::AssignmentRunRequest;
use crate::memory::{intent_fingerprint, GlobalContext};
use crate::planner::{AgentPlannedTask, PlannerRequestContext};
use crate::task::{SmartTask, SmartTaskExecutionContext, SmartTaskState, TaskStatusKind};

#[derive(Debug, Clone)]
pub struct PlanMaterializer {
    next_task_number: u32,
    max_repair_attempts: u32,
}

impl PlanMaterializer {
    pub fn new(max_repair_attempts: u32) -> Self {
        Self {
            next_task_number: 1,
            max_repair_attempts,
        }
    }

    pub fn for_request(request: &AssignmentRunRequest) -> Self {
        Self::new(request.max_repair_attempts_per_task)
    }

    pub fn next_task_number(&self) -> u32 {
        self.next_task_number
    }

    /// 为请求上下文下的任务列表建节点；顶层任务深度为上下文深度 + 1
    pub fn materialize(
        &mut self,
        planned: &[AgentPlannedTask],
        request: &PlannerRequestContext,
        global: Option<&GlobalContext>,
    ) -> Vec<SmartTask> {
        let parent_id = request
            .parent_task()
            .map(|t| t.id.trim().to_string())
            .filter(|id| !id.is_empty());
        planned
            .iter()
            .map(|task| {
                self.build_node(task, parent_id.clone(), request.depth() + 1, request, global)
            })
            .collect()
    }

    fn build_node(
        &mut self,
        planned: &AgentPlannedTask,
        parent_id: Option<String>,
        depth: u32,
        request: &PlannerRequestContext,
        global: Option<&GlobalContext>,
    ) -> SmartTask {
        let id = match planned.id.trim() {
            "" => format!("task_{}", uuid::Uuid::new_v4()),
            id => id.to_string(),
        };
        let intent = if planned.description.trim().is_empty() {
            planned.label.trim()
        } else {
            planned.description.trim()
        };

        let task_number = self.next_task_number;
        self.next_task_number += 1;

        let mut ctx = SmartTaskExecutionContext::from_planned(
            task_number,
            planned,
            parent_id.as_deref(),
            self.max_repair_attempts,
        );
        ctx.set_agent_task_id(id.clone());
        ctx.set_work_retention_fraction(request.work_retention_fraction());
        ctx.set_delegation_fraction(request.delegation_fraction());

        let mut node = SmartTask::new(id.clone(), intent);
        node.set_task_type(ctx.task_type().to_string());
        node.set_phase(planned.phase.trim());
        node.set_stage("planned");
        node.set_parent_id(parent_id);
        node.set_depth(depth);
        node.set_work_retention_fraction(request.work_retention_fraction());
        node.set_delegation_fraction(request.delegation_fraction());

        let already_done =
            global.is_some_and(|g| g.has_completed_intent(&intent_fingerprint(intent)));
        if already_done {
            tracing::debug!("Skipping task '{}': intent already completed", id);
            ctx.append_log("Skipped: intent already completed in this run");
            ctx.set_status(TaskStatusKind::Skipped);
            node.set_state(SmartTaskState::Skipped);
        }
        node.bind_execution_context(ctx);

        for sub in &planned.subtasks {
            let child = self.build_node(sub, Some(id.clone()), depth + 1, request, global);
            node.add_subtask(child);
        }
        node
    }
}
