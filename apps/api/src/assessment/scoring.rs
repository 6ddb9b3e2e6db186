//! Placement probability: a fixed weighted sum over four sub-scores.
//!
//! This is a closed-form heuristic, not a trained model. Weights:
//! academics 0.25, skills 0.35, experience 0.25, soft skills 0.15.

use crate::models::prediction::{
    PredictionResult, RadarAxis, RiskLevel, SkillPoint, CONFIDENCE_SCORE,
};
use crate::models::profile::StudentProfile;

const ACADEMIC_WEIGHT: f64 = 0.25;
const SKILL_WEIGHT: f64 = 0.35;
const EXPERIENCE_WEIGHT: f64 = 0.25;
const SOFT_SKILL_WEIGHT: f64 = 0.15;

/// Never promise certainty.
const PROBABILITY_CEILING: f64 = 98.0;

/// Raw (unrounded) sub-scores and their weighted total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub academic: f64,
    pub skill: f64,
    pub experience: f64,
    pub soft_skill: f64,
}

impl SubScores {
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            academic: academic_score(profile),
            skill: skill_score(profile),
            experience: experience_score(profile),
            soft_skill: soft_skill_score(profile),
        }
    }

    pub fn total(&self) -> f64 {
        self.academic * ACADEMIC_WEIGHT
            + self.skill * SKILL_WEIGHT
            + self.experience * EXPERIENCE_WEIGHT
            + self.soft_skill * SOFT_SKILL_WEIGHT
    }
}

/// Assumes a 10-point CGPA. Not clamped: cgpa > 10 or consistency > 100
/// pushes this past 100.
pub fn academic_score(profile: &StudentProfile) -> f64 {
    profile.cgpa * 10.0 * 0.7 + profile.consistency_score * 0.3
}

/// Mean proficiency points; 0 for an empty skill list.
pub fn skill_score(profile: &StudentProfile) -> f64 {
    let sum: u32 = profile.skills.iter().map(|s| s.proficiency.points()).sum();
    let count = profile.skills.len().max(1);
    sum as f64 / count as f64
}

pub fn experience_score(profile: &StudentProfile) -> f64 {
    let open_source = if profile.open_source { 20.0 } else { 0.0 };
    let raw = profile.internships as f64 * 30.0 + profile.projects as f64 * 15.0 + open_source;
    raw.min(100.0)
}

/// Not clamped: aptitude 100 with both ratings at 5 yields 150.
pub fn soft_skill_score(profile: &StudentProfile) -> f64 {
    profile.aptitude_score * 0.5
        + profile.communication_rating * 10.0
        + profile.leadership_rating * 10.0
}

/// Computes the prediction for a profile. Total: no I/O, never fails.
pub fn compute_prediction(profile: &StudentProfile) -> PredictionResult {
    let scores = SubScores::from_profile(profile);
    let total = scores.total();

    PredictionResult {
        overall_probability: total.round().clamp(0.0, PROBABILITY_CEILING) as u32,
        confidence_score: CONFIDENCE_SCORE,
        risk_level: RiskLevel::from_total(total),
        academic_impact: scores.academic.round() as i64,
        skill_impact: scores.skill.round() as i64,
        experience_impact: scores.experience.round() as i64,
        soft_skill_impact: scores.soft_skill.round() as i64,
        explanation: build_explanation(profile, &scores),
    }
}

fn build_explanation(profile: &StudentProfile, scores: &SubScores) -> String {
    let strength = if scores.academic > scores.skill {
        "Academics"
    } else {
        "Technical Skills"
    };
    let focus = if scores.soft_skill < 70.0 {
        "Soft Skills"
    } else {
        "Domain Depth"
    };

    format!(
        "Based on your profile, your primary strength lies in {strength}. \
         With {} projects and an open-source footprint, you show strong practical alignment. \
         Improvements in {focus} could further boost your dream company prospects.",
        profile.projects
    )
}

/// Per-skill points in profile order.
pub fn skill_breakdown(profile: &StudentProfile) -> Vec<SkillPoint> {
    profile
        .skills
        .iter()
        .map(|s| SkillPoint {
            name: s.name.clone(),
            points: s.proficiency.points(),
        })
        .collect()
}

/// Employability radar: the four impacts plus raw aptitude.
pub fn radar(profile: &StudentProfile, prediction: &PredictionResult) -> Vec<RadarAxis> {
    [
        ("Academic", prediction.academic_impact),
        ("Skills", prediction.skill_impact),
        ("Experience", prediction.experience_impact),
        ("Soft Skills", prediction.soft_skill_impact),
        ("Aptitude", profile.aptitude_score.round() as i64),
    ]
    .into_iter()
    .map(|(subject, value)| RadarAxis {
        subject: subject.to_string(),
        value,
        full_mark: 100,
    })
    .collect()
}
