//! Health Analysis Cell
//!
//! LLM-backed check-in, clinical and comprehensive analysis behind
//! `POST /analyze`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod services;

pub use error::AnalysisError;
pub use router::health_analysis_routes;

pub mod api {
    pub use crate::services::analysis::{fallback_check_in_analysis, HealthAnalysisService};
    pub use crate::services::completion::{CompletionClient, CompletionRequest, OpenAiCompletionClient};
    pub use crate::services::validation::{parse_analysis, strip_code_fences, ValidatedAnalysis};
}
