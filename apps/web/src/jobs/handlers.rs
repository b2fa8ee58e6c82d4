//! Axum route handlers for the job recommendation flow.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::jobs::flash::{self, FETCH_ERROR_ALERT};
use crate::jobs::ranking::{top_by_salary, TOP_RECOMMENDATIONS};
use crate::jobs::views;
use crate::models::job::{JobPreferences, JobRecommendation};
use crate::state::AppState;

pub const FORM_PATH: &str = "/jobs";
pub const RECOMMEND_PATH: &str = "/recommend_jobs";
pub const RESULTS_PATH: &str = "/recommended_jobs";
/// Query parameter the ranked list travels in between the proxy and results page.
pub const RESULTS_PARAM: &str = "recommended_jobs";

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub recommended_jobs: Option<String>,
}

/// GET /jobs
///
/// Renders the preference form, consuming any pending flash alert.
pub async fn handle_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, alert) = flash::take_alert(jar);
    (jar, Html(views::render_form(alert.as_deref())))
}

/// POST /recommend_jobs
///
/// Forwards the preferences to the recommendation API and redirects to the
/// results page with the three best-paid jobs. Every upstream failure ends in
/// the same alert and a redirect back to the form.
pub async fn handle_recommend(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(preferences): Form<JobPreferences>,
) -> Result<(CookieJar, Redirect), AppError> {
    let jobs = match state.recommender.recommend(&preferences).await {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("Recommendation API call failed: {e}");
            return Ok((flash::set_alert(jar, FETCH_ERROR_ALERT), Redirect::to(FORM_PATH)));
        }
    };

    let received = jobs.len();
    let top = top_by_salary(jobs, TOP_RECOMMENDATIONS);
    info!(
        "Recommending {} of {} jobs for personality '{}'",
        top.len(),
        received,
        preferences.personality
    );
    debug!(
        "Top recommendations: {:?}",
        top.iter().filter_map(JobRecommendation::title).collect::<Vec<_>>()
    );

    Ok((jar, Redirect::to(&results_location(&top)?)))
}

/// GET /recommended_jobs
///
/// Renders whatever list arrived in the query string. A missing or malformed
/// parameter, including a query string axum cannot decode, renders as an
/// empty result set.
pub async fn handle_results(query: Option<Query<ResultsQuery>>) -> Html<String> {
    let jobs = query
        .and_then(|Query(query)| query.recommended_jobs)
        .as_deref()
        .map(parse_results_param)
        .unwrap_or_default();

    Html(views::render_results(&jobs))
}

/// Builds `/recommended_jobs?recommended_jobs=<url-encoded JSON list>`.
fn results_location(jobs: &[JobRecommendation]) -> Result<String, AppError> {
    let encoded = serde_json::to_string(jobs).context("Failed to serialize recommendations")?;
    let query = serde_urlencoded::to_string([(RESULTS_PARAM, encoded)])
        .context("Failed to encode recommendations query")?;
    Ok(format!("{RESULTS_PATH}?{query}"))
}

fn parse_results_param(raw: &str) -> Vec<Map<String, Value>> {
    match serde_json::from_str::<Option<Vec<Map<String, Value>>>>(raw) {
        Ok(jobs) => jobs.unwrap_or_default(),
        Err(e) => {
            debug!("Ignoring malformed recommended_jobs parameter: {e}");
            Vec::new()
        }
    }
}
