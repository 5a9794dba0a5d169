use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::services::analysis::HealthAnalysisService;

pub fn health_analysis_routes(service: Arc<HealthAnalysisService>) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze_health_data))
        .with_state(service)
}
