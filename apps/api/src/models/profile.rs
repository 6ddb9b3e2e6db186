use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    /// Points contributed to the skill sub-score.
    pub fn points(self) -> u32 {
        match self {
            Proficiency::Advanced => 100,
            Proficiency::Intermediate => 70,
            Proficiency::Beginner => 40,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillCategory {
    Language,
    Domain,
    Framework,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: &str, proficiency: Proficiency, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            proficiency,
            category,
        }
    }

    /// A skill captured by name only. The intake form used to default these
    /// to Intermediate / Domain until the student picked something else.
    pub fn named(name: &str) -> Self {
        Self::new(name, Proficiency::Intermediate, SkillCategory::Domain)
    }
}

/// Complete snapshot of one student's academics, skills, experience and goals.
///
/// Ranges noted on fields are what the intake form expects; nothing here
/// enforces them and the scoring formulas pass out-of-range values through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub degree: String,
    pub branch: String,
    /// 10-point scale.
    pub cgpa: f64,
    /// 0 – 100
    pub consistency_score: f64,
    pub skills: Vec<Skill>,
    pub internships: u32,
    pub projects: u32,
    pub open_source: bool,
    /// 0 – 100
    pub aptitude_score: f64,
    /// 1 – 5
    pub communication_rating: f64,
    /// 1 – 5
    pub leadership_rating: f64,
    pub hackathons: u32,
    pub coding_contests: u32,
    pub certifications: Vec<String>,
    pub preferred_role: String,
    pub preferred_company_type: String,
    pub salary_expectation: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum SkillEditError {
    #[error("skill index {index} is out of range (profile has {len} skills)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl StudentProfile {
    /// The pre-filled profile the intake form starts from.
    pub fn sample() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            degree: "B.Tech".to_string(),
            branch: "Computer Science".to_string(),
            cgpa: 8.5,
            consistency_score: 90.0,
            skills: vec![
                Skill::new("JavaScript", Proficiency::Advanced, SkillCategory::Language),
                Skill::new("React", Proficiency::Intermediate, SkillCategory::Framework),
                Skill::new("Node.js", Proficiency::Beginner, SkillCategory::Framework),
                Skill::new("Python", Proficiency::Intermediate, SkillCategory::Language),
                Skill::new("SQL", Proficiency::Advanced, SkillCategory::Domain),
            ],
            internships: 1,
            projects: 3,
            open_source: true,
            aptitude_score: 85.0,
            communication_rating: 4.0,
            leadership_rating: 3.0,
            hackathons: 2,
            coding_contests: 5,
            certifications: vec![
                "AWS Cloud Practitioner".to_string(),
                "Google Data Analytics".to_string(),
            ],
            preferred_role: "Full Stack Developer".to_string(),
            preferred_company_type: "Product-Based".to_string(),
            salary_expectation: 1_200_000.0,
        }
    }

    /// Skill names in profile order.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }

    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<Skill, SkillEditError> {
        self.check_index(index)?;
        Ok(self.skills.remove(index))
    }

    pub fn update_skill(&mut self, index: usize, skill: Skill) -> Result<(), SkillEditError> {
        self.check_index(index)?;
        self.skills[index] = skill;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), SkillEditError> {
        if index >= self.skills.len() {
            return Err(SkillEditError::IndexOutOfRange {
                index,
                len: self.skills.len(),
            });
        }
        Ok(())
    }
}

/// Industry benchmark skill set the dashboard compares students against.
pub fn benchmark_skills() -> Vec<Skill> {
    vec![
        Skill::new("Data Structures", Proficiency::Advanced, SkillCategory::Domain),
        Skill::new("System Design", Proficiency::Intermediate, SkillCategory::Domain),
        Skill::new("Python", Proficiency::Advanced, SkillCategory::Language),
        Skill::new("React", Proficiency::Advanced, SkillCategory::Framework),
        Skill::new("Cloud Computing", Proficiency::Intermediate, SkillCategory::Domain),
    ]
}
