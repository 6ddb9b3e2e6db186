use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompanyCategory {
    Safe,
    Moderate,
    Dream,
}

impl CompanyCategory {
    /// Offset applied to the jittered base fit score.
    pub fn fit_adjustment(self) -> f64 {
        match self {
            CompanyCategory::Dream => -10.0,
            CompanyCategory::Safe => 10.0,
            CompanyCategory::Moderate => 0.0,
        }
    }
}

/// Static roster entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,
    pub logo: String,
    pub category: CompanyCategory,
    pub role: String,
}

impl Company {
    fn new(name: &str, logo: &str, category: CompanyCategory, role: &str) -> Self {
        Self {
            name: name.to_string(),
            logo: logo.to_string(),
            category,
            role: role.to_string(),
        }
    }
}

/// Display tier for a fit score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FitBand {
    Strong,  // > 85
    Good,    // > 70
    Stretch,
}

impl FitBand {
    pub fn from_score(fit_score: i64) -> Self {
        if fit_score > 85 {
            FitBand::Strong
        } else if fit_score > 70 {
            FitBand::Good
        } else {
            FitBand::Stretch
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFit {
    pub name: String,
    pub logo: String,
    pub category: CompanyCategory,
    pub role: String,
    pub fit_score: i64, // upper-clamped at 100
    pub fit_band: FitBand,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// The fixed roster every profile is matched against.
pub fn default_roster() -> Vec<Company> {
    use CompanyCategory::*;

    vec![
        Company::new("Google", "https://picsum.photos/40/40?1", Dream, "Software Engineer (L3)"),
        Company::new("Microsoft", "https://picsum.photos/40/40?2", Dream, "SDE-I"),
        Company::new("Accenture", "https://picsum.photos/40/40?3", Safe, "Application Developer"),
        Company::new("TCS", "https://picsum.photos/40/40?4", Safe, "System Engineer"),
        Company::new("Zomato", "https://picsum.photos/40/40?5", Moderate, "Full Stack Dev"),
        Company::new("Amazon", "https://picsum.photos/40/40?6", Dream, "SDE Intern"),
        Company::new("Coinbase", "https://picsum.photos/40/40?7", Moderate, "Backend Engineer"),
    ]
}
