use serde_json::{json, Value};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Roadmap prompt template. Replace `{profile_json}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = "\
Generate a prioritized career improvement action plan for a student with the \
following profile: {profile_json}. Provide actionable steps.";

pub fn build_roadmap_prompt(profile_json: &str) -> String {
    format!(
        "{}\n\n{}",
        ROADMAP_PROMPT_TEMPLATE.replace("{profile_json}", profile_json),
        JSON_ONLY_INSTRUCTION
    )
}

/// Output schema: an array of `{category, priority, title, description}`.
pub fn roadmap_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": {"type": "STRING"},
                "priority": {"type": "STRING", "enum": ["High", "Medium", "Low"]},
                "title": {"type": "STRING"},
                "description": {"type": "STRING"}
            },
            "required": ["category", "priority", "title", "description"]
        }
    })
}
