//! 核心公共层：错误类型、安全档案、assignment 入口模型

pub mod assignment;
pub mod error;
pub mod security;

pub use assignment::{AssignmentRunRequest, WorkspaceFileItem};
pub use error::{HiveError, HiveResult};
pub use security::SecurityProfile;
