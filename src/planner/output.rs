//! 规划输出解析：从模型回复中提取任务列表
//!
//! 支持 ```json 代码块或裸 JSON；顶层可以是数组、`{"tasks": [...]}` 或单个任务对象。

use schemars::schema::RootSchema;
use serde::Deserialize;

use crate::core::{HiveError, HiveResult};
use crate::planner::AgentPlannedTask;

#[derive(Deserialize)]
#[serde(untagged)]
enum PlanEnvelope {
    List(Vec<AgentPlannedTask>),
    Wrapped { tasks: Vec<AgentPlannedTask> },
    Single(AgentPlannedTask),
}

/// 从某个起始字符截取到对应的最后一个闭合字符
fn slice_from(text: &str, open: char) -> Option<&str> {
    let start = text.find(open)?;
    let close = if open == '[' { ']' } else { '}' };
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// 回复中可能的 JSON 片段，按出现顺序排列
///
/// ```json 代码块优先；否则先从第一个 `[` / `{` 截取，再换另一种括号重试，
/// 避免正文里的方括号（如 "Step [1]"）挡住后面的对象。
fn json_candidates(text: &str) -> Vec<&str> {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + 7..];
        return vec![rest.find("```").map(|end| rest[..end].trim()).unwrap_or(rest.trim())];
    }
    let mut openers: Vec<(usize, char)> = ['[', '{']
        .into_iter()
        .filter_map(|c| text.find(c).map(|pos| (pos, c)))
        .collect();
    openers.sort_by_key(|(pos, _)| *pos);
    openers
        .into_iter()
        .filter_map(|(_, open)| slice_from(text, open))
        .collect()
}

fn parse_envelope(json_str: &str) -> HiveResult<Vec<AgentPlannedTask>> {
    let envelope: PlanEnvelope = serde_json::from_str(json_str)
        .map_err(|e| HiveError::PlanParse(format!("{}: {}", e, json_str)))?;

    match envelope {
        PlanEnvelope::List(tasks) | PlanEnvelope::Wrapped { tasks } => Ok(tasks),
        PlanEnvelope::Single(task) => {
            if task.id.trim().is_empty()
                && task.label.trim().is_empty()
                && task.description.trim().is_empty()
            {
                return Err(HiveError::PlanParse(format!(
                    "object is not a task (no id, label or description): {}",
                    json_str
                )));
            }
            Ok(vec![task])
        }
    }
}

/// 解析模型输出为任务列表；空白输出视为空计划
pub fn parse_plan_output(output: &str) -> HiveResult<Vec<AgentPlannedTask>> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut first_err = None;
    for json_str in json_candidates(trimmed) {
        match parse_envelope(json_str) {
            Ok(tasks) => return Ok(tasks),
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err
        .unwrap_or_else(|| HiveError::PlanParse(format!("no JSON found in: {}", trimmed))))
}

/// 任务数组的 JSON Schema，供结构化输出请求使用
pub fn plan_output_schema() -> RootSchema {
    schemars::schema_for!(Vec<AgentPlannedTask>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_array() {
        let out = "Here is the plan:\n```json\n[{\"id\": \"1\", \"label\": \"Build\"}, {\"id\": \"2\", \"label\": \"Test\"}]\n```\nDone.";
        let tasks = parse_plan_output(out).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].label, "Test");
    }

    #[test]
    fn test_parse_wrapped_object() {
        let out = r#"{"tasks": [{"id": "a", "subtasks": [{"id": "a.1"}]}]}"#;
        let tasks = parse_plan_output(out).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].subtasks[0].id, "a.1");
    }

    #[test]
    fn test_parse_single_task_with_prose() {
        let out = r#"Sure! {"id": "only", "label": "One", "type": "chore"} hope this helps"#;
        let tasks = parse_plan_output(out).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_type, "chore");
    }

    #[test]
    fn test_blank_output_is_empty_plan() {
        assert!(parse_plan_output("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_output_is_error() {
        assert!(matches!(
            parse_plan_output("no plan today"),
            Err(HiveError::PlanParse(_))
        ));
        assert!(matches!(
            parse_plan_output("[{\"id\": 1,}]"),
            Err(HiveError::PlanParse(_))
        ));
    }

    #[test]
    fn test_object_without_task_fields_is_error() {
        assert!(matches!(
            parse_plan_output(r#"{"error": "rate limited"}"#),
            Err(HiveError::PlanParse(_))
        ));
        assert!(matches!(
            parse_plan_output("Sorry: {}"),
            Err(HiveError::PlanParse(_))
        ));
    }

    #[test]
    fn test_bracketed_prose_before_payload() {
        let out = r#"Step [1] done. {"tasks": [{"id": "a"}, {"id": "b"}]}"#;
        let tasks = parse_plan_output(out).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, "b");

        let out = r#"Plan {v2}: [{"id": "x", "label": "X"}]"#;
        let tasks = parse_plan_output(out).unwrap();
        assert_eq!(tasks[0].label, "X");
    }

    #[test]
    fn test_schema_describes_wire_names() {
        let schema = serde_json::to_string(&plan_output_schema()).unwrap();
        assert!(schema.contains("contextTags"));
        assert!(schema.contains("expectedExitCode"));
    }
}
