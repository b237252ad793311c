//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `HIVE__*` 覆盖（双下划线表示嵌套，如 `HIVE__MEMORY__MAX_FACTS=2048`）。

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::HiveError;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub assignment: AssignmentSection,
    #[serde(default)]
    pub memory: MemorySection,
    #[serde(default)]
    pub planner: PlannerSection,
}

/// [app] 段
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppSection {
    pub name: Option<String>,
}

/// [assignment] 段：单次任务运行的重试 / 修复上限
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentSection {
    #[serde(default = "default_max_command_retry_attempts")]
    pub max_command_retry_attempts: u32,
    #[serde(default = "default_max_repair_attempts_per_task")]
    pub max_repair_attempts_per_task: u32,
    #[serde(default)]
    pub use_hands_free_mode: bool,
}

pub(crate) fn default_max_command_retry_attempts() -> u32 {
    25
}

pub(crate) fn default_max_repair_attempts_per_task() -> u32 {
    5
}

impl Default for AssignmentSection {
    fn default() -> Self {
        Self {
            max_command_retry_attempts: default_max_command_retry_attempts(),
            max_repair_attempts_per_task: default_max_repair_attempts_per_task(),
            use_hands_free_mode: false,
        }
    }
}

/// [memory] 段：共享知识库容量
#[derive(Debug, Clone, Deserialize)]
pub struct MemorySection {
    #[serde(default = "default_max_facts")]
    pub max_facts: usize,
}

fn default_max_facts() -> usize {
    crate::memory::MAX_FACTS
}

impl Default for MemorySection {
    fn default() -> Self {
        Self {
            max_facts: default_max_facts(),
        }
    }
}

/// [planner] 段：根上下文的默认工作保留 / 委派比例与最大分解深度
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSection {
    #[serde(default = "default_work_retention")]
    pub default_work_retention: f64,
    #[serde(default = "default_delegation")]
    pub default_delegation: f64,
    #[serde(default = "default_max_decomposition_depth")]
    pub max_decomposition_depth: u32,
}

fn default_work_retention() -> f64 {
    0.35
}

fn default_delegation() -> f64 {
    0.65
}

fn default_max_decomposition_depth() -> u32 {
    4
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            default_work_retention: default_work_retention(),
            default_delegation: default_delegation(),
            max_decomposition_depth: default_max_decomposition_depth(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 HIVE__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 HIVE__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, HiveError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        } else {
            tracing::warn!("Config file {:?} not found, using defaults", path);
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("HIVE")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    Ok(c.try_deserialize()?)
}
