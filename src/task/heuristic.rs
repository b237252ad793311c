//! 成功判据：任务验收时逐条评估的检查项

use serde::{Deserialize, Serialize};

/// 判据评估结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicStatus {
    #[default]
    Pending,
    Passed,
    Failed,
}

impl HeuristicStatus {
    /// 未提供说明时使用的默认文本
    fn default_notes(self) -> &'static str {
        match self {
            HeuristicStatus::Passed => "Met",
            HeuristicStatus::Failed => "Not met",
            HeuristicStatus::Pending => "Pending evaluation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessHeuristicItem {
    pub description: String,
    pub mandatory: bool,
    pub evidence: String,
    status: HeuristicStatus,
    notes: String,
}

impl SuccessHeuristicItem {
    pub fn new(description: impl Into<String>, mandatory: bool) -> Self {
        Self {
            description: description.into(),
            mandatory,
            evidence: String::new(),
            status: HeuristicStatus::Pending,
            notes: HeuristicStatus::Pending.default_notes().to_string(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    pub fn status(&self) -> HeuristicStatus {
        self.status
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// 写入评估结果；允许重复评估
    pub fn set_evaluation_result(&mut self, status: HeuristicStatus, notes: Option<&str>) {
        self.status = status;
        self.notes = match notes.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => status.default_notes().to_string(),
        };
    }

    /// 必需判据未通过即阻塞验收
    pub fn blocks_acceptance(&self) -> bool {
        self.mandatory && self.status != HeuristicStatus::Passed
    }
}

/// 所有必需判据均通过
pub fn all_mandatory_passed(items: &[SuccessHeuristicItem]) -> bool {
    !items.iter().any(SuccessHeuristicItem::blocks_acceptance)
}
