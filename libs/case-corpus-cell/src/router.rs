use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::loader::CaseCorpusLoader;

pub fn case_corpus_routes(loader: Arc<CaseCorpusLoader>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/load-cases", post(handlers::load_cases))
        .route("/cases", get(handlers::list_cases))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(loader)
}
