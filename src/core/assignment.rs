//! 任务运行入口模型（AssignmentRunRequestModel）
//!
//! 外部应用提交一次 assignment 时使用的配置；字段名是与前端 / 规划器约定的线上格式。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{
    default_max_command_retry_attempts, default_max_repair_attempts_per_task, AssignmentSection,
};

/// 附带在 assignment 上的工作区文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFileItem {
    pub path: PathBuf,
    #[serde(default)]
    pub relative_path: String,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// 一次 assignment 运行的入口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRunRequest {
    pub workspace_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_title: Option<String>,
    pub assignment_prompt: String,
    #[serde(default)]
    pub use_hands_free_mode: bool,
    #[serde(default = "default_max_command_retry_attempts")]
    pub max_command_retry_attempts: u32,
    #[serde(default = "default_max_repair_attempts_per_task")]
    pub max_repair_attempts_per_task: u32,
    #[serde(default)]
    pub workspace_context_files: Vec<WorkspaceFileItem>,
}

impl AssignmentRunRequest {
    pub fn new(workspace_path: impl Into<PathBuf>, assignment_prompt: impl Into<String>) -> Self {
        Self {
            workspace_path: workspace_path.into(),
            assignment_title: None,
            assignment_prompt: assignment_prompt.into(),
            use_hands_free_mode: false,
            max_command_retry_attempts: default_max_command_retry_attempts(),
            max_repair_attempts_per_task: default_max_repair_attempts_per_task(),
            workspace_context_files: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.assignment_title = Some(title.into());
        self
    }

    /// 用 [assignment] 配置段覆盖重试 / 修复上限与免确认模式
    pub fn with_limits(mut self, section: &AssignmentSection) -> Self {
        self.max_command_retry_attempts = section.max_command_retry_attempts;
        self.max_repair_attempts_per_task = section.max_repair_attempts_per_task;
        self.use_hands_free_mode = section.use_hands_free_mode;
        self
    }
}
