use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::{FeedError, FeedQuery, JobFeed};
use crate::models::job::ExternalJobPosting;

pub const DEFAULT_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const UNKNOWN_ENVIRONMENT: &str = "unknown";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    // Optional so that an explicit null in one listing does not fail the whole page.
    #[serde(default)]
    title: Option<String>,
    salary_average: Option<f64>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    contract_time: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
}

impl From<Listing> for ExternalJobPosting {
    fn from(listing: Listing) -> Self {
        let salary = listing.salary_average.or(match (listing.salary_min, listing.salary_max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        });

        ExternalJobPosting {
            id: listing.id,
            title: listing.title.unwrap_or_default(),
            salary,
            environment: listing
                .contract_time
                .unwrap_or_else(|| UNKNOWN_ENVIRONMENT.to_string()),
            description: listing.description.unwrap_or_default(),
            url: listing.redirect_url.unwrap_or_default(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Adzuna job search client.
#[derive(Clone)]
pub struct AdzunaFeed {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl AdzunaFeed {
    pub fn new(
        base_url: String,
        app_id: String,
        app_key: String,
        timeout: Duration,
    ) -> Result<Self, FeedError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            app_id,
            app_key,
        })
    }

    fn search_url(&self, country: &str) -> String {
        format!("{}/{}/search/1", self.base_url.trim_end_matches('/'), country)
    }
}

#[async_trait]
impl JobFeed for AdzunaFeed {
    async fn search(&self, query: &FeedQuery) -> Result<Vec<ExternalJobPosting>, FeedError> {
        let per_page = query.results_per_page.to_string();
        let response = self
            .client
            .get(self.search_url(&query.country))
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", per_page.as_str()),
                ("what", query.what.as_str()),
                ("where", query.location.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("Adzuna search '{}' returned {} results", query.what, body.results.len());

        Ok(body.results.into_iter().map(ExternalJobPosting::from).collect())
    }
}
