//! 规划器输出的任务与命令描述（与外部规划器 / 模型客户端约定的 JSON 格式）

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 规划出的单条命令
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentCommandDescription {
    pub id: String,
    pub description: String,
    pub executable: String,
    pub arguments: String,
    pub working_directory: String,
    pub danger_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_in_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_run_seconds: Option<i32>,
}

impl AgentCommandDescription {
    /// 可执行文件 + 参数拼成的命令行（仅用于展示与日志）
    pub fn command_line(&self) -> String {
        let args = self.arguments.trim();
        if args.is_empty() {
            self.executable.trim().to_string()
        } else {
            format!("{} {}", self.executable.trim(), args)
        }
    }
}

/// 规划出的任务；subtasks 递归
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPlannedTask {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub description: String,
    pub context: String,
    pub priority: String,
    pub phase: String,
    pub context_tags: Vec<String>,
    pub dependencies: Vec<String>,
    pub commands: Vec<AgentCommandDescription>,
    pub subtasks: Vec<AgentPlannedTask>,
}

impl AgentPlannedTask {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    pub fn with_subtask(mut self, subtask: AgentPlannedTask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// 祖先摘要行："{id} - {label} [{type}]"，缺失字段用占位文本
    pub fn ancestor_summary(&self) -> String {
        format!(
            "{} - {} [{}]",
            non_blank_or(&self.id, "(no id)"),
            non_blank_or(&self.label, "(no label)"),
            non_blank_or(&self.task_type, "Task"),
        )
    }

    /// 含自身在内的任务总数
    pub fn total_count(&self) -> usize {
        1 + self.subtasks.iter().map(|t| t.total_count()).sum::<usize>()
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
