use std::collections::HashSet;

use serde::Serialize;

use crate::models::job::{CourseOffering, ExternalJobPosting, JobPosting};
use crate::recommend::scoring::{JobScore, ProfileTerms};

pub const TOP_JOBS: usize = 8;
pub const TOP_COURSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Static,
    External,
}

/// A job in the merged ranking, tagged with where it came from.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CandidateJob {
    Static(JobPosting),
    External(ExternalJobPosting),
}

impl CandidateJob {
    pub fn provenance(&self) -> Provenance {
        match self {
            CandidateJob::Static(_) => Provenance::Static,
            CandidateJob::External(_) => Provenance::External,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CandidateJob::Static(j) => &j.id,
            CandidateJob::External(j) => &j.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CandidateJob::Static(j) => &j.title,
            CandidateJob::External(j) => &j.title,
        }
    }

    /// External listings carry no skill data.
    pub fn required_skills(&self) -> &[String] {
        match self {
            CandidateJob::Static(j) => &j.required_skills,
            CandidateJob::External(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: CandidateJob,
    #[serde(flatten)]
    pub score: JobScore,
}

impl ScoredJob {
    /// External listings enter the ranking unscored.
    pub fn external(job: ExternalJobPosting) -> Self {
        Self {
            job: CandidateJob::External(job),
            score: JobScore::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: CourseOffering,
    pub skill_gap_coverage: u32,
}

/// Stable sort by descending score, then keep the first `limit`.
/// Equal scores keep their input order, so static jobs precede external ones on ties.
pub fn rank_jobs(mut candidates: Vec<ScoredJob>, limit: usize) -> Vec<ScoredJob> {
    candidates.sort_by(|a, b| b.score.score.cmp(&a.score.score));
    candidates.truncate(limit);
    candidates
}

/// Skills required by the ranked jobs that the user does not already list.
/// Collapsed case-insensitively; first spelling and first-appearance order win.
pub fn needed_skills(ranked: &[ScoredJob], terms: &ProfileTerms) -> Vec<String> {
    let mut seen = HashSet::new();
    ranked
        .iter()
        .flat_map(|j| j.job.required_skills())
        .filter(|skill| !terms.has_skill(skill))
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Scores each course by how many needed skills it teaches, drops courses that teach none,
/// and keeps the top `limit`.
pub fn rank_courses(
    courses: &[CourseOffering],
    needed: &[String],
    limit: usize,
) -> Vec<ScoredCourse> {
    let needed: Vec<String> = needed.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<ScoredCourse> = courses
        .iter()
        .map(|course| {
            let taught: Vec<String> = course.skills_taught.iter().map(|s| s.to_lowercase()).collect();
            let skill_gap_coverage = needed.iter().filter(|n| taught.contains(*n)).count() as u32;
            ScoredCourse {
                course: course.clone(),
                skill_gap_coverage,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.skill_gap_coverage.cmp(&a.skill_gap_coverage));
    scored.retain(|c| c.skill_gap_coverage > 0);
    scored.truncate(limit);
    scored
}
