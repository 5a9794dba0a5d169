use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use case_corpus_cell::api::{CaseCorpusLoader, CaseCorpusStore};
use case_corpus_cell::case_corpus_routes;
use health_analysis_cell::api::HealthAnalysisService;
use health_analysis_cell::{health_analysis_routes, AnalysisError};
use shared_config::AppConfig;

/// Both cells share one corpus store: uploads replace it, comprehensive
/// analyses read a snapshot of it.
pub fn create_router(state: Arc<AppConfig>) -> Result<Router, AnalysisError> {
    let corpus = CaseCorpusStore::new();
    let loader = Arc::new(CaseCorpusLoader::with_pdf_extractor(corpus.clone()));
    let analysis = Arc::new(HealthAnalysisService::from_config(&state, corpus)?);

    let health = health_analysis_routes(analysis)
        .merge(case_corpus_routes(loader, state.max_upload_bytes));

    Ok(Router::new()
        .route("/", get(|| async { "HealthQuest API is running!" }))
        .nest("/api/health", health))
}
