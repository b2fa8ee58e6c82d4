//! Recommender: the client for the external recommendation API.
//!
//! The remote service maps a user's `JobPreferences` to a list of
//! `JobRecommendation`s. Handlers reach it only through the `JobRecommender`
//! trait carried in `AppState`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::models::job::{JobPreferences, JobRecommendation};

#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait JobRecommender: Send + Sync {
    async fn recommend(
        &self,
        preferences: &JobPreferences,
    ) -> Result<Vec<JobRecommendation>, RecommenderError>;
}

/// Calls the recommendation API over HTTP with a single POST per request.
/// No retries: any failure is reported to the caller as-is.
#[derive(Clone)]
pub struct HttpRecommender {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpRecommender {
    /// `timeout: None` leaves the call unbounded.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RecommenderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl JobRecommender for HttpRecommender {
    async fn recommend(
        &self,
        preferences: &JobPreferences,
    ) -> Result<Vec<JobRecommendation>, RecommenderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(preferences)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Only an exact 200 counts; 201/204 and friends are failures too.
        if status != StatusCode::OK {
            return Err(RecommenderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let jobs = parse_recommendations(&body)?;
        debug!("Recommendation API returned {} jobs", jobs.len());

        Ok(jobs)
    }
}

/// Parses a recommendation API body. An empty body or JSON `null` means
/// "no recommendations" rather than an error.
fn parse_recommendations(body: &str) -> Result<Vec<JobRecommendation>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let jobs: Option<Vec<JobRecommendation>> = serde_json::from_str(body)?;
    Ok(jobs.unwrap_or_default())
}
