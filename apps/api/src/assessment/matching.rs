//! Company matching. Maps a profile onto the static roster.
//!
//! Fit scores carry a uniform jitter of up to 30 points, so two calls with the
//! same profile may disagree on `fit_score`. Everything else in a `CompanyFit`
//! is a function of the profile and the roster entry. Randomness comes from a
//! `JitterSource` so callers can seed or stub it.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::models::company::{Company, CompanyFit, FitBand};
use crate::models::profile::StudentProfile;

const BASE_FIT: f64 = 60.0;
const JITTER_SPAN: f64 = 30.0;
const MATCHING_SKILL_COUNT: usize = 3;
const SKILL_GAPS: [&str; 2] = ["System Design", "Kubernetes"];

/// Supplies uniform samples on [0, 1).
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

impl JitterSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl JitterSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Returns the same sample every time. Values are clamped into [0, 1).
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

#[cfg(test)]
impl JitterSource for FixedJitter {
    fn next_unit(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Produces one `CompanyFit` per roster entry, in roster order.
pub fn match_companies(
    profile: &StudentProfile,
    roster: &[Company],
    jitter: &mut dyn JitterSource,
) -> Vec<CompanyFit> {
    let matching_skills: Vec<String> = profile
        .skill_names()
        .take(MATCHING_SKILL_COUNT)
        .map(str::to_string)
        .collect();
    // TODO: compare against per-role requirements once the roster carries them.
    let missing_skills: Vec<String> = SKILL_GAPS.iter().take(1).map(|s| s.to_string()).collect();

    roster
        .iter()
        .map(|company| {
            let base = BASE_FIT + jitter.next_unit() * JITTER_SPAN;
            let adjusted = base + company.category.fit_adjustment();
            let fit_score = adjusted.min(100.0).round() as i64;

            CompanyFit {
                name: company.name.clone(),
                logo: company.logo.clone(),
                category: company.category,
                role: company.role.clone(),
                fit_score,
                fit_band: FitBand::from_score(fit_score),
                matching_skills: matching_skills.clone(),
                missing_skills: missing_skills.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::{default_roster, CompanyCategory};
    use crate::models::profile::Skill;
    use rand::SeedableRng;

    /// Cycles through a fixed list of samples.
    struct ScriptedJitter {
        values: Vec<f64>,
        next: usize,
    }

    impl JitterSource for ScriptedJitter {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn test_length_and_order_match_roster() {
        let roster = default_roster();
        let fits = match_companies(&StudentProfile::sample(), &roster, &mut rand::thread_rng());

        assert_eq!(fits.len(), roster.len());
        for (fit, company) in fits.iter().zip(&roster) {
            assert_eq!(fit.name, company.name);
            assert_eq!(fit.role, company.role);
            assert_eq!(fit.logo, company.logo);
            assert_eq!(fit.category, company.category);
        }
    }

    #[test]
    fn test_fit_scores_within_bounds() {
        let roster = default_roster();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            for fit in match_companies(&StudentProfile::sample(), &roster, &mut rng) {
                let (lo, hi) = match fit.category {
                    CompanyCategory::Dream => (50, 80),
                    CompanyCategory::Moderate => (60, 90),
                    CompanyCategory::Safe => (70, 100),
                };
                assert!(
                    (lo..=hi).contains(&fit.fit_score),
                    "{} scored {}",
                    fit.name,
                    fit.fit_score
                );
            }
        }
    }

    #[test]
    fn test_zero_jitter_gives_category_floor() {
        let fits = match_companies(
            &StudentProfile::sample(),
            &default_roster(),
            &mut FixedJitter(0.0),
        );
        let scores: Vec<i64> = fits.iter().map(|f| f.fit_score).collect();
        assert_eq!(scores, vec![50, 50, 70, 70, 60, 50, 60]);
    }

    #[test]
    fn test_max_jitter_clamps_safe_at_100() {
        let fits = match_companies(
            &StudentProfile::sample(),
            &default_roster(),
            &mut FixedJitter(0.999_999),
        );
        let accenture = &fits[2];
        assert_eq!(accenture.fit_score, 100);
        assert_eq!(accenture.fit_band, FitBand::Strong);
        assert_eq!(fits[0].fit_score, 80);
    }

    #[test]
    fn test_each_company_draws_its_own_sample() {
        let mut jitter = ScriptedJitter {
            values: vec![0.0, 0.5],
            next: 0,
        };
        let fits = match_companies(&StudentProfile::sample(), &default_roster(), &mut jitter);
        // Google (Dream, 0.0) → 50, Microsoft (Dream, 0.5) → 65
        assert_eq!(fits[0].fit_score, 50);
        assert_eq!(fits[1].fit_score, 65);
    }

    #[test]
    fn test_skill_lists_are_constant_across_companies() {
        let fits = match_companies(
            &StudentProfile::sample(),
            &default_roster(),
            &mut rand::thread_rng(),
        );
        for fit in &fits {
            assert_eq!(fit.matching_skills, vec!["JavaScript", "React", "Node.js"]);
            assert_eq!(fit.missing_skills, vec!["System Design"]);
        }
    }

    #[test]
    fn test_short_skill_list() {
        let mut profile = StudentProfile::sample();
        profile.skills = vec![Skill::named("Go")];
        let fits = match_companies(&profile, &default_roster(), &mut FixedJitter(0.3));
        assert_eq!(fits[0].matching_skills, vec!["Go"]);

        profile.skills.clear();
        let fits = match_companies(&profile, &default_roster(), &mut FixedJitter(0.3));
        assert!(fits.iter().all(|f| f.matching_skills.is_empty()));
        assert!(fits.iter().all(|f| f.missing_skills == vec!["System Design"]));
    }

    #[test]
    fn test_repeat_calls_differ_only_in_fit_score() {
        let profile = StudentProfile::sample();
        let roster = default_roster();
        let mut rng = StdRng::seed_from_u64(42);
        let first = match_companies(&profile, &roster, &mut rng);
        let second = match_companies(&profile, &roster, &mut rng);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.matching_skills, b.matching_skills);
            assert_eq!(a.missing_skills, b.missing_skills);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let profile = StudentProfile::sample();
        let roster = default_roster();
        let a = match_companies(&profile, &roster, &mut StdRng::seed_from_u64(1));
        let b = match_companies(&profile, &roster, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_roster() {
        let fits = match_companies(&StudentProfile::sample(), &[], &mut FixedJitter(0.5));
        assert!(fits.is_empty());
    }
}
