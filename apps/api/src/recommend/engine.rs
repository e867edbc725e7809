use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::feed::{fetch_external_jobs, FeedQuery, JobFeed};
use crate::models::job::ExternalJobPosting;
use crate::models::profile::UserProfile;
use crate::recommend::ranking::{
    needed_skills, rank_courses, rank_jobs, CandidateJob, Provenance, ScoredCourse, ScoredJob,
    TOP_COURSES, TOP_JOBS,
};
use crate::recommend::scoring::{score_job, ProfileTerms, ScoringWeights};

/// Where and how much to ask the external feed for. The search phrase comes from the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub country: String,
    pub location: String,
    pub results_per_page: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendations {
    pub search_terms: String,
    pub jobs: Vec<ScoredJob>,
    pub needed_skills: Vec<String>,
    pub courses: Vec<ScoredCourse>,
}

/// Ranks jobs and courses for `profile`. Pure: the catalog is only read and the same
/// inputs always produce the same output.
pub fn recommend(
    profile: &UserProfile,
    catalog: &Catalog,
    external: Vec<ExternalJobPosting>,
) -> Recommendations {
    let terms = ProfileTerms::from_profile(profile);
    let weights = ScoringWeights::default();

    let candidates: Vec<ScoredJob> = catalog
        .jobs
        .iter()
        .map(|job| ScoredJob {
            score: score_job(&terms, job, &weights),
            job: CandidateJob::Static(job.clone()),
        })
        .chain(external.into_iter().map(ScoredJob::external))
        .collect();

    let jobs = rank_jobs(candidates, TOP_JOBS);
    let needed_skills = needed_skills(&jobs, &terms);
    let courses = rank_courses(&catalog.courses, &needed_skills, TOP_COURSES);

    Recommendations {
        search_terms: terms.search_phrase(),
        jobs,
        needed_skills,
        courses,
    }
}

/// Fetches external listings for the profile's search terms (skipped when empty), then
/// runs `recommend`. Feed failures only shrink the candidate set.
pub async fn build_recommendations(
    profile: &UserProfile,
    catalog: &Catalog,
    feed: &dyn JobFeed,
    settings: &FeedSettings,
) -> Recommendations {
    let query = FeedQuery {
        what: ProfileTerms::from_profile(profile).search_phrase(),
        location: settings.location.clone(),
        country: settings.country.clone(),
        results_per_page: settings.results_per_page,
    };

    let external = fetch_external_jobs(feed, &query).await;
    let recommendations = recommend(profile, catalog, external);

    let external_ranked = recommendations
        .jobs
        .iter()
        .filter(|j| j.job.provenance() == Provenance::External)
        .count();
    if let Some(top) = recommendations.jobs.first() {
        debug!(
            "Top job '{}' ({}) scored {}",
            top.job.title(),
            top.job.id(),
            top.score.score
        );
    }
    debug!(
        "Recommended {} jobs ({} external), {} needed skills, {} courses",
        recommendations.jobs.len(),
        external_ranked,
        recommendations.needed_skills.len(),
        recommendations.courses.len()
    );
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::testing::{external_job, StubFeed};
    use crate::models::profile::WorkEnvironment;

    fn settings() -> FeedSettings {
        FeedSettings {
            country: "us".to_string(),
            location: String::new(),
            results_per_page: 5,
        }
    }

    fn frontend_profile() -> UserProfile {
        UserProfile {
            skills: "React, JavaScript".to_string(),
            career_aspirations: "Frontend Developer".to_string(),
            preferred_work_environments: vec![WorkEnvironment::Startup],
            salary_expectations: 70000,
            ..Default::default()
        }
    }

    #[test]
    fn test_frontend_profile_ranks_frontend_first() {
        let catalog = Catalog::bundled().unwrap();
        let recs = recommend(&frontend_profile(), &catalog, vec![]);

        assert_eq!(recs.jobs.len(), TOP_JOBS);
        assert_eq!(recs.jobs[0].job.id(), "job1");
        assert_eq!(recs.jobs[0].score.score, 28);
        assert!(recs
            .jobs
            .windows(2)
            .all(|w| w[0].score.score >= w[1].score.score));
    }

    #[test]
    fn test_needed_skills_never_include_held_skills() {
        let catalog = Catalog::bundled().unwrap();
        let recs = recommend(&frontend_profile(), &catalog, vec![]);

        assert!(!recs.needed_skills.is_empty());
        for skill in &recs.needed_skills {
            let lower = skill.to_lowercase();
            assert!(lower != "react" && lower != "javascript", "{skill} is already held");
        }
        assert!(recs.needed_skills.contains(&"HTML".to_string()));
    }

    #[test]
    fn test_courses_cover_needed_skills() {
        let catalog = Catalog::bundled().unwrap();
        let recs = recommend(&frontend_profile(), &catalog, vec![]);

        assert!(recs.courses.len() <= TOP_COURSES);
        assert!(recs.courses.iter().all(|c| c.skill_gap_coverage > 0));
        assert!(recs
            .courses
            .windows(2)
            .all(|w| w[0].skill_gap_coverage >= w[1].skill_gap_coverage));
    }

    #[test]
    fn test_output_only_contains_candidates() {
        let catalog = Catalog::bundled().unwrap();
        let external = vec![external_job("x1", "Remote React Role")];
        let recs = recommend(&frontend_profile(), &catalog, external);

        for job in &recs.jobs {
            let known = catalog.jobs.iter().any(|j| j.id == job.job.id()) || job.job.id() == "x1";
            assert!(known, "unexpected job {}", job.job.id());
        }
    }

    #[test]
    fn test_recommend_is_deterministic_and_leaves_catalog_untouched() {
        let catalog = Catalog::bundled().unwrap();
        let before = catalog.clone();
        let first = recommend(&frontend_profile(), &catalog, vec![external_job("x1", "A")]);
        let second = recommend(&frontend_profile(), &catalog, vec![external_job("x1", "A")]);
        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_external_jobs_rank_after_scored_static_jobs() {
        let catalog = Catalog {
            jobs: Catalog::bundled().unwrap().jobs.into_iter().take(2).collect(),
            courses: vec![],
        };
        let recs = recommend(&frontend_profile(), &catalog, vec![external_job("x1", "Listing")]);

        assert_eq!(recs.jobs.len(), 3);
        let last = recs.jobs.last().unwrap();
        assert_eq!(last.job.provenance(), Provenance::External);
        assert_eq!(last.score.score, 0);
    }

    #[tokio::test]
    async fn test_empty_terms_skip_feed_but_still_rank() {
        let catalog = Catalog::bundled().unwrap();
        let feed = StubFeed::returning(vec![external_job("x1", "Listing")]);
        let profile = UserProfile {
            salary_expectations: 90000,
            ..Default::default()
        };

        let recs = build_recommendations(&profile, &catalog, &feed, &settings()).await;

        assert_eq!(feed.calls(), 0);
        assert_eq!(recs.search_terms, "");
        assert_eq!(recs.jobs.len(), TOP_JOBS);
        assert!(recs.jobs.iter().all(|j| j.job.provenance() == Provenance::Static));
    }

    #[tokio::test]
    async fn test_feed_query_uses_profile_terms() {
        let catalog = Catalog::bundled().unwrap();
        let feed = StubFeed::returning(vec![external_job("x1", "Listing")]);

        let recs = build_recommendations(&frontend_profile(), &catalog, &feed, &settings()).await;

        assert_eq!(feed.calls(), 1);
        let query = feed.last_query().unwrap();
        assert_eq!(query.what, "react javascript frontend developer");
        assert_eq!(query.country, "us");
        assert_eq!(query.results_per_page, 5);
        assert_eq!(recs.search_terms, query.what);
    }

    #[tokio::test]
    async fn test_feed_failure_falls_back_to_static() {
        let catalog = Catalog::bundled().unwrap();
        let feed = StubFeed::failing();

        let recs = build_recommendations(&frontend_profile(), &catalog, &feed, &settings()).await;

        assert_eq!(feed.calls(), 1);
        assert_eq!(recs.jobs.len(), TOP_JOBS);
        assert_eq!(recs.jobs[0].job.id(), "job1");
    }
}
