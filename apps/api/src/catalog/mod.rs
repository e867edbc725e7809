//! Static job and course catalogs.
//!
//! The catalog is configuration: a bundled JSON document by default, or any file of the same
//! shape named by `CATALOG_PATH`. It is loaded once at startup and shared read-only.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::job::{CourseOffering, JobPosting};
use crate::models::profile::WorkEnvironment;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

const INTEREST_OPTIONS: &[&str] = &[
    "AI",
    "Web Development",
    "Finance",
    "Cloud",
    "Security",
    "Design",
    "Marketing",
    "Management",
];

const EDUCATION_OPTIONS: &[&str] = &[
    "Bachelor's in Computer Science",
    "Master's in Data Science",
    "Associate's in IT",
    "PhD in Engineering",
    "Bootcamp Graduate",
    "Self-taught",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub jobs: Vec<JobPosting>,
    pub courses: Vec<CourseOffering>,
}

/// Choices offered when a user fills in their profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOptions {
    pub skills: Vec<String>,
    pub aspirations: Vec<String>,
    pub environments: Vec<WorkEnvironment>,
    pub interests: Vec<String>,
    pub education: Vec<String>,
}

impl Catalog {
    /// Loads the catalog from `path`, or the bundled default when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid catalog file {}", path.display()))?
            }
            None => Self::bundled()?,
        };

        info!(
            "Catalog loaded: {} jobs, {} courses",
            catalog.jobs.len(),
            catalog.courses.len()
        );
        Ok(catalog)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("Bundled catalog is invalid")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut job_ids = HashSet::new();
        for job in &self.jobs {
            if !job_ids.insert(job.id.as_str()) {
                bail!("Duplicate job id '{}'", job.id);
            }
            if job.title.trim().is_empty() {
                bail!("Job '{}' has an empty title", job.id);
            }
            if job.required_skills.iter().any(|s| s.trim().is_empty()) {
                bail!("Job '{}' lists a blank skill", job.id);
            }
        }

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id.as_str()) {
                bail!("Duplicate course id '{}'", course.id);
            }
            if course.name.trim().is_empty() {
                bail!("Course '{}' has an empty name", course.id);
            }
            if course.skills_taught.iter().any(|s| s.trim().is_empty()) {
                bail!("Course '{}' lists a blank skill", course.id);
            }
        }
        Ok(())
    }
}

/// Builds the profile form choices: every distinct skill and job title in the catalog
/// (first-seen order) plus the fixed environment, interest and education lists.
pub fn profile_options(catalog: &Catalog) -> ProfileOptions {
    let mut seen = HashSet::new();
    let skills = catalog
        .jobs
        .iter()
        .flat_map(|j| j.required_skills.iter().map(String::as_str))
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    let aspirations = catalog
        .jobs
        .iter()
        .map(|j| j.title.as_str())
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect();

    ProfileOptions {
        skills,
        aspirations,
        environments: WorkEnvironment::ALL.to_vec(),
        interests: INTEREST_OPTIONS.iter().map(|s| s.to_string()).collect(),
        education: EDUCATION_OPTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
