use crate::errors::AppError;
use crate::models::profile::{ProfileUpdate, UserProfile};

pub const MAX_FIELD_CHARS: usize = 2000;

fn check_length(name: &str, value: &str) -> Result<(), AppError> {
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(AppError::Validation(format!(
            "{name} must be at most {MAX_FIELD_CHARS} characters"
        )));
    }
    Ok(())
}

/// Trims text fields, rejects oversized ones and de-duplicates environments
/// (first occurrence wins).
pub fn normalize_update(mut update: ProfileUpdate) -> Result<ProfileUpdate, AppError> {
    let fields = [
        ("skills", &mut update.skills),
        ("interests", &mut update.interests),
        ("education", &mut update.education),
        ("work_experience", &mut update.work_experience),
        ("career_aspirations", &mut update.career_aspirations),
    ];

    for (name, field) in fields {
        if let Some(value) = field.as_mut() {
            let trimmed = value.trim();
            check_length(name, trimmed)?;
            *value = trimmed.to_string();
        }
    }

    if let Some(envs) = update.preferred_work_environments.as_mut() {
        let mut deduped = Vec::with_capacity(envs.len());
        for env in envs.drain(..) {
            if !deduped.contains(&env) {
                deduped.push(env);
            }
        }
        *envs = deduped;
    }

    Ok(update)
}

/// Applies the same field cap to a profile sent inline with a request.
pub fn validate_profile(profile: &UserProfile) -> Result<(), AppError> {
    let fields = [
        ("skills", &profile.skills),
        ("interests", &profile.interests),
        ("education", &profile.education),
        ("work_experience", &profile.work_experience),
        ("career_aspirations", &profile.career_aspirations),
    ];

    for (name, value) in fields {
        check_length(name, value.trim())?;
    }
    Ok(())
}
