//! 记忆层：整棵任务树共享的知识库（事实 + 已完成意图台账）与意图指纹

pub mod global_context;
pub mod intent;

pub use global_context::{CompletedIntentRecord, GlobalContext, SemanticFactRecord, MAX_FACTS};
pub use intent::{intent_fingerprint, normalize_intent};
