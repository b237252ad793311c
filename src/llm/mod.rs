//! LLM 边界：OpenAI 兼容 Chat Completion 的线上格式与用量快照
//!
//! 客户端本身（网络、流式、重试）不在核心内。

pub mod usage;
pub mod wire;

pub use usage::UsageSnapshot;
pub use wire::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatUsage, ModelInfo,
    ModelList, Role, StreamOptions,
};
