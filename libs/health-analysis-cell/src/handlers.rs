use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::{error, info, instrument};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::services::analysis::HealthAnalysisService;

const ANALYSIS_FAILED: &str = "Failed to analyze health data";

/// Only an empty body is a client error; every other failure is a 500.
#[instrument(skip(service, body), fields(analysis_id = %Uuid::new_v4()))]
pub async fn analyze_health_data(
    State(service): State<Arc<HealthAnalysisService>>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("No data provided".to_string()));
    }

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Request body is not JSON: {}", e);
        AppError::internal(ANALYSIS_FAILED, e)
    })?;

    if value.is_null() {
        return Err(AppError::BadRequest("No data provided".to_string()));
    }

    info!("Analyzing health data");

    let analysis = service.analyze_body(value).await.map_err(|e| {
        error!("Health analysis error: {}", e);
        AppError::internal(ANALYSIS_FAILED, e)
    })?;

    Ok(Json(analysis))
}
