//! Job scoring against a user profile.
//!
//! Score = skill_matches × 10 + aspiration_matches × 5 + environment bonus 2 + salary bonus 1.
//! Skill fit dominates, then aspiration fit, then environment, then salary.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::models::profile::{UserProfile, WorkEnvironment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub skill: u32,
    pub aspiration: u32,
    pub environment: u32,
    pub salary: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 10,
            aspiration: 5,
            environment: 2,
            salary: 1,
        }
    }
}

/// The parts of a profile the scorer reads, normalized once per pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTerms {
    pub skills: Vec<String>,
    pub aspirations: Vec<String>,
    pub environments: Vec<WorkEnvironment>,
    pub salary_expectation: u32,
}

impl ProfileTerms {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            skills: split_terms(&profile.skills),
            aspirations: split_terms(&profile.career_aspirations),
            environments: profile.preferred_work_environments.clone(),
            salary_expectation: profile.salary_expectations,
        }
    }

    /// Skills then aspirations, space separated. Empty when the profile has neither.
    pub fn search_phrase(&self) -> String {
        self.skills
            .iter()
            .chain(self.aspirations.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Case-insensitive membership test against the user's skills.
    pub fn has_skill(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.skills.iter().any(|s| *s == skill)
    }
}

/// Splits a comma list into lowercased, trimmed, non-empty entries.
pub fn split_terms(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobScore {
    pub score: u32,
    pub skill_match_count: u32,
    pub aspiration_match_count: u32,
    pub environment_match: bool,
    pub salary_match: bool,
}

pub fn score_job(terms: &ProfileTerms, job: &JobPosting, weights: &ScoringWeights) -> JobScore {
    let job_skills: Vec<String> = job.required_skills.iter().map(|s| s.to_lowercase()).collect();
    let title = job.title.to_lowercase();
    let description = job.description.to_lowercase();

    // Exact matches only; a repeated user skill counts each time.
    let skill_match_count = terms
        .skills
        .iter()
        .filter(|skill| job_skills.contains(*skill))
        .count() as u32;

    let aspiration_match_count = terms
        .aspirations
        .iter()
        .filter(|a| title.contains(a.as_str()) || description.contains(a.as_str()))
        .count() as u32;

    let environment_match = terms.environments.contains(&job.environment);
    let salary_match = job.average_salary >= terms.salary_expectation;

    let score = skill_match_count * weights.skill
        + aspiration_match_count * weights.aspiration
        + if environment_match { weights.environment } else { 0 }
        + if salary_match { weights.salary } else { 0 };

    JobScore {
        score,
        skill_match_count,
        aspiration_match_count,
        environment_match,
        salary_match,
    }
}
