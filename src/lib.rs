//! Hive - Rust 任务编排核心
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型、安全档案、assignment 入口模型
//! - **memory**: 整棵任务树共享的知识库（事实去重 + 已完成意图台账）
//! - **planner**: 递归分解上下文、规划任务格式、输出解析、规划器接缝
//! - **task**: 执行树节点、任务生命周期、成功判据
//! - **llm**: Chat Completion 线上格式与用量快照
//! - **observability**: tracing 初始化

pub mod config;
pub mod core;
pub mod llm;
pub mod memory;
pub mod observability;
pub mod planner;
pub mod task;

pub use crate::core::{HiveError, HiveResult};
pub use memory::GlobalContext;
pub use planner::{PlanMaterializer, PlannerRequestContext};
pub use task::{SmartTask, SmartTaskExecutionContext, SuccessHeuristicItem};
