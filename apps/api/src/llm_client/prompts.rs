// Cross-cutting prompt fragments. Each service that calls the model keeps its
// own prompts.rs alongside it.

/// Appended to every structured-output prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only, matching the requested schema exactly. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences.";
