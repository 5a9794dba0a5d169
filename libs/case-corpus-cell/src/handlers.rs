use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{debug, instrument};

use shared_models::analysis::CaseLoadReceipt;
use shared_models::error::AppError;

use crate::error::CorpusError;
use crate::models::CaseListResponse;
use crate::services::loader::CaseCorpusLoader;

const UPLOAD_FIELD: &str = "file";

#[instrument(skip(loader, multipart))]
pub async fn load_cases(
    State(loader): State<Arc<CaseCorpusLoader>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CaseLoadReceipt>, AppError> {
    let mut multipart = multipart.map_err(|e| CorpusError::Multipart(e.body_text()))?;

    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CorpusError::Multipart(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // Reject on the declared type before buffering the payload.
        loader.check_media_type(field.content_type())?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| CorpusError::Multipart(e.body_text()))?;
        upload = Some(bytes.to_vec());
        break;
    }

    let bytes = upload.ok_or(CorpusError::MissingFile)?;
    debug!("Received past-case upload of {} bytes", bytes.len());

    let summary = loader.load(bytes).await?;

    Ok(Json(CaseLoadReceipt {
        message: "Past cases loaded successfully".to_string(),
        file_size: summary.file_size,
        cases_loaded: summary.cases_loaded,
    }))
}

#[instrument(skip(loader))]
pub async fn list_cases(
    State(loader): State<Arc<CaseCorpusLoader>>,
) -> Json<CaseListResponse> {
    let snapshot = loader.store().snapshot().await;

    Json(CaseListResponse {
        count: snapshot.len(),
        cases: snapshot.as_ref().clone(),
    })
}
