//! 任务层：执行树节点、生命周期记录、成功判据、输入归一化与树查询

pub mod execution_context;
pub mod heuristic;
pub mod normalize;
pub mod smart_task;
pub mod tree;

pub use execution_context::{
    SmartTaskExecutionContext, TaskChange, TaskStatusKind, MAX_CONTEXT_ENTRY_CHARS,
};
pub use heuristic::{all_mandatory_passed, HeuristicStatus, SuccessHeuristicItem};
pub use smart_task::{SmartTask, SmartTaskState};
pub use tree::{contexts_in_creation_order, ready_task_ids};
