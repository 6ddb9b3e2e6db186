use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImprovementAction {
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

impl ImprovementAction {
    fn new(category: &str, priority: Priority, title: &str, description: &str) -> Self {
        Self {
            category: category.to_string(),
            priority,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Static plan returned whenever the generated roadmap is unavailable.
pub fn fallback_plan() -> Vec<ImprovementAction> {
    vec![
        ImprovementAction::new(
            "Technical Skills",
            Priority::High,
            "Master System Design",
            "Focus on scalability, load balancing, and database sharding.",
        ),
        ImprovementAction::new(
            "Aptitude",
            Priority::Medium,
            "Quantitative Reasoning",
            "Practice competitive math and logic puzzles daily for 30 mins.",
        ),
        ImprovementAction::new(
            "Experience",
            Priority::High,
            "Full-stack Portfolio",
            "Deploy a production-ready MERN application with CI/CD pipelines.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_plan_literal_text() {
        let plan = serde_json::to_value(fallback_plan()).unwrap();
        assert_eq!(
            plan,
            json!([
                {"category": "Technical Skills", "priority": "High", "title": "Master System Design", "description": "Focus on scalability, load balancing, and database sharding."},
                {"category": "Aptitude", "priority": "Medium", "title": "Quantitative Reasoning", "description": "Practice competitive math and logic puzzles daily for 30 mins."},
                {"category": "Experience", "priority": "High", "title": "Full-stack Portfolio", "description": "Deploy a production-ready MERN application with CI/CD pipelines."}
            ])
        );
    }

    #[test]
    fn test_priority_outside_enum_is_rejected() {
        let value = json!({"category": "x", "priority": "Urgent", "title": "t", "description": "d"});
        assert!(serde_json::from_value::<ImprovementAction>(value).is_err());
    }
}
