use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkEnvironment {
    Remote,
    Startup,
    Corporate,
    Hybrid,
}

impl WorkEnvironment {
    pub const ALL: [WorkEnvironment; 4] = [
        WorkEnvironment::Remote,
        WorkEnvironment::Startup,
        WorkEnvironment::Corporate,
        WorkEnvironment::Hybrid,
    ];
}

/// A user's career profile as stored in the profile document.
///
/// Only `skills`, `career_aspirations`, `preferred_work_environments` and
/// `salary_expectations` feed the scorer; the rest is carried for display.
/// Every field defaults so that partially written documents still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub skills: String,
    pub interests: String,
    pub education: String,
    pub work_experience: String,
    pub career_aspirations: String,
    pub salary_expectations: u32,
    pub preferred_work_environments: Vec<WorkEnvironment>,
}

/// Partial profile write. Absent fields keep whatever the stored document has.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_aspirations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_work_environments: Option<Vec<WorkEnvironment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// A profile document together with its owner and last write time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredProfile {
    pub user_id: Uuid,
    pub profile: UserProfile,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for StoredProfile {
    type Error = serde_json::Error;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(StoredProfile {
            user_id: row.user_id,
            profile: serde_json::from_value(row.data)?,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_document_fills_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "skills": "Rust, SQL",
            "preferred_work_environments": ["remote", "hybrid"]
        }))
        .unwrap();

        assert_eq!(profile.skills, "Rust, SQL");
        assert_eq!(profile.career_aspirations, "");
        assert_eq!(profile.salary_expectations, 0);
        assert_eq!(
            profile.preferred_work_environments,
            vec![WorkEnvironment::Remote, WorkEnvironment::Hybrid]
        );
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let result: Result<UserProfile, _> = serde_json::from_value(json!({
            "preferred_work_environments": ["moon_base"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = ProfileUpdate {
            skills: Some("Go".to_string()),
            salary_expectations: Some(90000),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "skills": "Go", "salary_expectations": 90000 }));
    }
}
