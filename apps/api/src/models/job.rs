use serde::{Deserialize, Serialize};

use crate::models::profile::WorkEnvironment;

/// A job role from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    pub average_salary: u32,
    pub environment: WorkEnvironment,
    pub description: String,
}

/// A listing pulled from the external job feed, already normalized.
/// The feed carries no skill data, so these never take part in skill matching.
/// `environment` holds the listing's contract time, or "unknown".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalJobPosting {
    pub id: String,
    pub title: String,
    pub salary: Option<f64>,
    pub environment: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseOffering {
    pub id: String,
    pub name: String,
    pub skills_taught: Vec<String>,
    pub difficulty: String,
    pub provider: String,
    pub url: String,
}
