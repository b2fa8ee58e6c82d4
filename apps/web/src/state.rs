use std::sync::Arc;

use crate::recommender::JobRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable recommendation backend. Default: `HttpRecommender`.
    pub recommender: Arc<dyn JobRecommender>,
}
