//! 安全策略档案
//!
//! 仅为数据：外部策略评估器读取它来决定命令是否允许执行；核心不做任何放行/拒绝判断。

use serde::{Deserialize, Serialize};

/// 当前运行生效的安全档案（由 GlobalContext 持有）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityProfile {
    pub name: String,
    pub allow_network_access: bool,
    pub allow_file_system_writes: bool,
    /// 危险命令是否需要人工确认（对应任务状态 PendingApproval）
    pub require_approval_for_dangerous_commands: bool,
    /// 显式允许的可执行文件（首词，如 cargo、git）
    #[serde(default)]
    pub allowed_executables: Vec<String>,
    #[serde(default)]
    pub blocked_executables: Vec<String>,
}

impl SecurityProfile {
    /// 默认档案：可写工作区、无网络、危险命令需确认
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            allow_network_access: false,
            allow_file_system_writes: true,
            require_approval_for_dangerous_commands: true,
            allowed_executables: Vec::new(),
            blocked_executables: vec!["rm".into(), "shutdown".into(), "reboot".into()],
        }
    }

    /// 只读档案：禁止写入与网络，所有危险命令都需确认
    pub fn restricted() -> Self {
        Self {
            name: "restricted".to_string(),
            allow_network_access: false,
            allow_file_system_writes: false,
            require_approval_for_dangerous_commands: true,
            allowed_executables: vec![
                "ls".into(),
                "cat".into(),
                "grep".into(),
                "find".into(),
            ],
            blocked_executables: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for SecurityProfile {
    fn default() -> Self {
        Self::standard()
    }
}
