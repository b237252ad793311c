//! 编排核心错误类型
//!
//! 内存中的核心结构（GlobalContext、规划上下文、任务生命周期）按「静默归一化」处理非法输入，不返回错误；
//! 只有配置加载、规划输出解析与外部规划器接缝会产生 HiveError。

use thiserror::Error;

/// 配置、解析与规划器接缝上可能出现的错误
#[derive(Error, Debug)]
pub enum HiveError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 规划器输出无法解析为任务列表
    #[error("Plan parse error: {0}")]
    PlanParse(String),

    /// 外部规划器（LLM 客户端）报告的失败
    #[error("Planner error: {0}")]
    Planner(String),

    /// 当前规划上下文已禁止继续分解
    #[error("Decomposition disabled at depth {depth} (max depth {max_depth})")]
    DepthLimit { depth: u32, max_depth: u32 },
}

pub type HiveResult<T> = Result<T, HiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_message() {
        let err = HiveError::DepthLimit {
            depth: 4,
            max_depth: 4,
        };
        assert_eq!(
            err.to_string(),
            "Decomposition disabled at depth 4 (max depth 4)"
        );
    }

    #[test]
    fn test_serialization_error_converts() {
        let raw = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: HiveError = raw.into();
        assert!(matches!(err, HiveError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
