//! 任务树查询：依赖是否满足、哪些任务可以开始
//!
//! 只读查询；真正的调度由外部编排循环决定。

use std::collections::HashMap;

use crate::task::{SmartTask, SmartTaskExecutionContext, TaskStatusKind};

/// 依赖任务是否放行其下游：成功，或已结束且允许下游继续
fn releases_dependents(status: TaskStatusKind, allows_dependents: bool) -> bool {
    status == TaskStatusKind::Succeeded || (status.is_terminal() && allows_dependents)
}

/// 列出处于 Planned 且所有依赖都已放行的任务 id（先序 / 执行顺序）
///
/// 找不到的依赖视为未满足。
pub fn ready_task_ids(root: &SmartTask) -> Vec<String> {
    let released: HashMap<&str, bool> = root
        .iter()
        .filter_map(|t| {
            t.execution_context().map(|ctx| {
                (
                    t.id(),
                    releases_dependents(ctx.status_kind(), ctx.allows_dependents_to_proceed()),
                )
            })
        })
        .collect();

    root.iter()
        .filter(|t| {
            t.execution_context().is_some_and(|ctx| {
                ctx.status_kind() == TaskStatusKind::Planned
                    && ctx
                        .dependencies()
                        .iter()
                        .all(|dep| released.get(dep.as_str()).copied().unwrap_or(false))
            })
        })
        .map(|t| t.id().to_string())
        .collect()
}

/// 按 (created_at, creation_order) 排序的执行上下文，用于稳定展示
pub fn contexts_in_creation_order(root: &SmartTask) -> Vec<&SmartTaskExecutionContext> {
    let mut contexts: Vec<_> = root.iter().filter_map(|t| t.execution_context()).collect();
    contexts.sort_by_key(|ctx| ctx.ordering_key());
    contexts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, number: u32, deps: &[&str]) -> SmartTask {
        let mut task = SmartTask::new(id, id);
        let mut ctx = SmartTaskExecutionContext::new(number, id);
        ctx.set_dependencies(deps.iter().copied());
        task.bind_execution_context(ctx);
        task
    }

    fn status(root: &mut SmartTask, id: &str, kind: TaskStatusKind) {
        root.find_mut(id)
            .and_then(|t| t.execution_context_mut())
            .unwrap()
            .set_status(kind);
    }

    #[test]
    fn test_ready_respects_dependencies() {
        let mut root = node("root", 0, &[]);
        root.add_subtask(node("a", 1, &[]));
        root.add_subtask(node("b", 2, &["a"]));
        root.add_subtask(node("c", 3, &["a", "b"]));
        status(&mut root, "root", TaskStatusKind::InProgress);

        assert_eq!(ready_task_ids(&root), vec!["a".to_string()]);

        status(&mut root, "a", TaskStatusKind::Succeeded);
        assert_eq!(ready_task_ids(&root), vec!["b".to_string()]);

        status(&mut root, "b", TaskStatusKind::Succeeded);
        assert_eq!(ready_task_ids(&root), vec!["c".to_string()]);
    }

    #[test]
    fn test_failed_dependency_gating() {
        let mut root = node("root", 0, &[]);
        root.add_subtask(node("a", 1, &[]));
        root.add_subtask(node("b", 2, &["a"]));
        status(&mut root, "root", TaskStatusKind::InProgress);
        status(&mut root, "a", TaskStatusKind::Failed);

        // 默认允许下游继续
        assert_eq!(ready_task_ids(&root), vec!["b".to_string()]);

        root.find_mut("a")
            .and_then(|t| t.execution_context_mut())
            .unwrap()
            .set_allows_dependents_to_proceed(false);
        assert!(ready_task_ids(&root).is_empty());
    }

    #[test]
    fn test_missing_dependency_blocks() {
        let mut root = node("root", 0, &[]);
        root.add_subtask(node("a", 1, &["ghost"]));
        status(&mut root, "root", TaskStatusKind::Succeeded);
        assert!(ready_task_ids(&root).is_empty());
    }

    #[test]
    fn test_creation_order_listing() {
        let mut root = node("root", 0, &[]);
        root.add_subtask(node("a", 1, &[]));
        root.insert_subtask(0, node("b", 2, &[]));
        let numbers: Vec<u32> = contexts_in_creation_order(&root)
            .iter()
            .map(|c| c.task_number())
            .collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }
}
