//! 规划层：递归分解上下文、规划任务格式、输出解析、规划器接缝与执行树接入

pub mod materialize;
pub mod output;
pub mod planned_task;
pub mod provider;
pub mod request_context;

pub use materialize::PlanMaterializer;
pub use output::{parse_plan_output, plan_output_schema};
pub use planned_task::{AgentCommandDescription, AgentPlannedTask};
pub use provider::{expand_with, PlanProvider, StaticPlanProvider};
pub use request_context::{PlannerInvocationKind, PlannerRequestContext};
