use serde::{Deserialize, Serialize};

/// Placeholder confidence reported with every prediction. Not derived from
/// the profile.
pub const CONFIDENCE_SCORE: u32 = 92;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies the unrounded weighted total.
    pub fn from_total(total: f64) -> Self {
        if total > 80.0 {
            RiskLevel::Low
        } else if total > 60.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub overall_probability: u32, // 0 – 98
    pub confidence_score: u32,
    pub risk_level: RiskLevel,
    // Impacts are the rounded sub-scores. Academic and soft-skill can exceed 100.
    pub academic_impact: i64,
    pub skill_impact: i64,
    pub experience_impact: i64,
    pub soft_skill_impact: i64,
    pub explanation: String,
}

/// One bar of the per-skill proficiency chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillPoint {
    pub name: String,
    pub points: u32,
}

/// One axis of the employability radar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub subject: String,
    pub value: i64,
    pub full_mark: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_thresholds_are_exclusive() {
        assert_eq!(RiskLevel::from_total(88.85), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(80.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(60.5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(60.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_total(-5.0), RiskLevel::High);
    }

    #[test]
    fn test_prediction_serializes_camel_case() {
        let result = PredictionResult {
            overall_probability: 89,
            confidence_score: CONFIDENCE_SCORE,
            risk_level: RiskLevel::Low,
            academic_impact: 87,
            skill_impact: 76,
            experience_impact: 95,
            soft_skill_impact: 113,
            explanation: String::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["overallProbability"], 89);
        assert_eq!(value["riskLevel"], "Low");
        assert_eq!(value["softSkillImpact"], 113);
    }
}
