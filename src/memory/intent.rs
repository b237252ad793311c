//! 意图指纹：将意图文本归一化后取 SHA-256，用作 GlobalContext 去重台账的 hash
//!
//! 调用方也可以自带 hash；这里只提供默认算法。

use sha2::{Digest, Sha256};

/// 去首尾空白、转小写、把连续空白压成一个空格
pub fn normalize_intent(intent: &str) -> String {
    intent
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 归一化意图的 SHA-256（小写十六进制）
pub fn intent_fingerprint(intent: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_intent(intent).as_bytes());
    format!("{:x}", hasher.finalize())
}
