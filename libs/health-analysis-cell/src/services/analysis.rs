use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use case_corpus_cell::api::CaseCorpusStore;
use shared_config::AppConfig;
use shared_models::analysis::{
    AnalysisRequest, CheckInAnalysis, CheckInRequest, ClinicalAnalysis, HealthAnalysis, VisitSummary,
};

use crate::error::AnalysisError;
use crate::services::completion::{CompletionClient, CompletionRequest, OpenAiCompletionClient};
use crate::services::prompts;
use crate::services::validation::{parse_analysis, ValidatedAnalysis};

/// Returned for every failed check-in analysis.
pub fn fallback_check_in_analysis() -> Value {
    json!({
        "summary": "Unable to analyze health data at this time.",
        "concerns": ["Unable to analyze concerns"],
        "tips": ["Please try again later"],
        "doctorRecommendation": {
            "needed": false,
            "urgency": "routine",
            "reason": "Unable to complete analysis"
        }
    })
}

/// Check-in failures degrade to [`fallback_check_in_analysis`]; clinical and
/// comprehensive failures are returned to the caller. Successful analyses are
/// the model's JSON object, unchanged.
pub struct HealthAnalysisService {
    completion: Arc<dyn CompletionClient>,
    corpus: CaseCorpusStore,
}

impl HealthAnalysisService {
    pub fn new(completion: Arc<dyn CompletionClient>, corpus: CaseCorpusStore) -> Self {
        Self { completion, corpus }
    }

    pub fn from_config(config: &AppConfig, corpus: CaseCorpusStore) -> Result<Self, AnalysisError> {
        let client = OpenAiCompletionClient::new(config)?;
        Ok(Self::new(Arc::new(client), corpus))
    }

    /// Decodes a request body and runs it. A body that does not name a visit
    /// analysis and cannot be decoded as a check-in gets the check-in fallback.
    pub async fn analyze_body(&self, body: Value) -> Result<Value, AnalysisError> {
        let names_visit = AnalysisRequest::names_visit_analysis(&body);

        match AnalysisRequest::from_value(body) {
            Ok(request) => self.analyze(&request).await,
            Err(e) if names_visit => Err(AnalysisError::InvalidRequest(e.to_string())),
            Err(e) => {
                warn!("Check-in body could not be decoded, returning fallback: {}", e);
                Ok(fallback_check_in_analysis())
            }
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, AnalysisError> {
        info!("Running {} analysis", request.kind());
        match request {
            AnalysisRequest::CheckIn(check_in) => Ok(self.analyze_check_in(check_in).await),
            AnalysisRequest::Clinical(visit) => self.analyze_visit(visit).await,
            AnalysisRequest::Comprehensive(visit) => self.analyze_comprehensive(visit).await,
        }
    }

    #[instrument(skip(self, check_in))]
    pub async fn analyze_check_in(&self, check_in: &CheckInRequest) -> Value {
        let outcome = match prompts::check_in_prompt(check_in) {
            Ok(prompt) => self.run::<CheckInAnalysis>(prompts::SYSTEM_INSTRUCTION, prompt).await,
            Err(e) => Err(e),
        };

        outcome.unwrap_or_else(|e| {
            warn!("Check-in analysis failed, returning fallback: {}", e);
            fallback_check_in_analysis()
        })
    }

    #[instrument(skip(self, visit))]
    pub async fn analyze_visit(&self, visit: &VisitSummary) -> Result<Value, AnalysisError> {
        let prompt = prompts::clinical_prompt(visit)?;
        self.run::<ClinicalAnalysis>(prompts::CLINICAL_SYSTEM_INSTRUCTION, prompt).await
    }

    #[instrument(skip(self, visit))]
    pub async fn analyze_comprehensive(&self, visit: &VisitSummary) -> Result<Value, AnalysisError> {
        let past_cases = self.corpus.snapshot().await;
        debug!("Comprehensive analysis with {} past cases", past_cases.len());

        let prompt = prompts::comprehensive_prompt(visit, &past_cases)?;
        self.run::<HealthAnalysis>(prompts::CLINICAL_SYSTEM_INSTRUCTION, prompt).await
    }

    async fn run<T: ValidatedAnalysis>(&self, system: &str, prompt: String) -> Result<Value, AnalysisError> {
        debug!("Analysis prompt:\n{}", prompt);

        let content = self
            .completion
            .complete(CompletionRequest {
                system: system.to_string(),
                prompt,
            })
            .await?;

        debug!("Completion response: {}", content);

        let analysis = parse_analysis::<T>(&content)?;
        info!("Analysis validated");
        Ok(analysis)
    }
}
