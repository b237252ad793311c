//! 输入归一化：任务类型、优先级、上下文标签、比例
//!
//! 规则需与规划器 / 前端保持一致，改动会影响已有数据的显示与排序。

/// 把比例夹到 [0, 1]；NaN 视为 0
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// 比例的百分比显示，如 0.35 -> "35%"
pub fn fraction_percent(value: f64) -> String {
    format!("{:.0}%", clamp_fraction(value) * 100.0)
}

/// 空白 -> 空串；单字符 -> 大写；否则首字符大写、其余不变
pub fn normalize_type(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 空白 -> "Normal"；critical/high/medium/low（忽略大小写）-> 规范写法；其它按单词首字母大写
pub fn normalize_priority(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "Normal".to_string();
    }
    match trimmed.to_lowercase().as_str() {
        "critical" => "Critical".to_string(),
        "high" => "High".to_string(),
        "medium" => "Medium".to_string(),
        "low" => "Low".to_string(),
        _ => title_case(trimmed),
    }
}

/// 优先级分数，越小越先执行；未识别的优先级取中性值 2
pub fn priority_score(priority: &str) -> u8 {
    match priority.trim().to_lowercase().as_str() {
        "critical" => 0,
        "high" => 1,
        "medium" | "normal" => 2,
        "low" => 3,
        _ => 2,
    }
}

/// 去掉空白标签并 trim 其余标签，保持原顺序
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
