//! External job feed client.
//!
//! All calls to the third-party job search API go through the `JobFeed` trait. A failed
//! fetch is never fatal: callers use `fetch_external_jobs`, which logs the failure and
//! falls back to an empty list.

pub mod adzuna;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::job::ExternalJobPosting;

pub use adzuna::AdzunaFeed;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A single search against the job feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedQuery {
    pub what: String,
    pub location: String,
    pub country: String,
    pub results_per_page: u32,
}

/// Job feed backend. Carried in `AppState` as `Arc<dyn JobFeed>`.
#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn search(&self, query: &FeedQuery) -> Result<Vec<ExternalJobPosting>, FeedError>;
}

/// Stand-in used when no feed credentials are configured.
pub struct DisabledFeed;

#[async_trait]
impl JobFeed for DisabledFeed {
    async fn search(&self, _query: &FeedQuery) -> Result<Vec<ExternalJobPosting>, FeedError> {
        Ok(vec![])
    }
}

/// Runs `query` against `feed`, degrading any failure to an empty list.
/// An empty search phrase never reaches the feed.
pub async fn fetch_external_jobs(feed: &dyn JobFeed, query: &FeedQuery) -> Vec<ExternalJobPosting> {
    if query.what.trim().is_empty() {
        debug!("Empty search terms, skipping external job feed");
        return vec![];
    }

    match feed.search(query).await {
        Ok(jobs) => {
            debug!("External job feed returned {} listings", jobs.len());
            jobs
        }
        Err(e) => {
            warn!("External job feed failed, continuing without it: {e}");
            vec![]
        }
    }
}
