use chrono::{DateTime, Utc};
use reqwest::{multipart, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use shared_models::analysis::{
    AnalysisRequest, CaseLoadReceipt, CheckInAnalysis, CheckInRequest, ClinicalAnalysis,
    HealthAnalysis, VisitSummary,
};

use crate::error::ClientError;
use crate::form::{CheckInForm, StoredProfile};

const ANALYZE_PATH: &str = "/api/health/analyze";
const LOAD_CASES_PATH: &str = "/api/health/load-cases";
const PDF_MEDIA_TYPE: &str = "application/pdf";

pub struct HealthAnalysisClient {
    client: Client,
    base_url: String,
}

impl HealthAnalysisClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validates the form locally before anything is sent.
    pub async fn submit_check_in(
        &self,
        form: &CheckInForm,
        profile: Option<&StoredProfile>,
        date: DateTime<Utc>,
    ) -> Result<CheckInAnalysis, ClientError> {
        let request = form.to_request(profile, date)?;
        self.analyze_check_in(&request).await
    }

    pub async fn analyze_check_in(&self, request: &CheckInRequest) -> Result<CheckInAnalysis, ClientError> {
        self.dispatch(&AnalysisRequest::CheckIn(request.clone())).await
    }

    pub async fn analyze_visit(&self, visit: &VisitSummary) -> Result<ClinicalAnalysis, ClientError> {
        self.dispatch(&AnalysisRequest::Clinical(visit.clone())).await
    }

    pub async fn analyze_comprehensive(&self, visit: &VisitSummary) -> Result<HealthAnalysis, ClientError> {
        self.dispatch(&AnalysisRequest::Comprehensive(visit.clone())).await
    }

    /// Uploads a PDF of past cases for comprehensive analyses.
    pub async fn load_cases(&self, file_name: &str, pdf: Vec<u8>) -> Result<CaseLoadReceipt, ClientError> {
        let part = multipart::Part::bytes(pdf)
            .file_name(file_name.to_string())
            .mime_str(PDF_MEDIA_TYPE)
            .map_err(|e| ClientError::UploadFailed(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}{}", self.base_url, LOAD_CASES_PATH);
        debug!("Uploading past cases to {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::UploadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Past-case upload rejected ({}): {}", status, error_text);
            return Err(ClientError::UploadFailed(format!("server returned {}", status)));
        }

        response
            .json::<CaseLoadReceipt>()
            .await
            .map_err(|e| ClientError::UploadFailed(e.to_string()))
    }

    async fn dispatch<T>(&self, request: &AnalysisRequest) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, ANALYZE_PATH);
        debug!("Requesting {} analysis from {}", request.kind(), url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::AnalysisFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Analysis request failed ({}): {}", status, error_text);
            return Err(ClientError::AnalysisFailed(format!("server returned {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::AnalysisFailed(e.to_string()))
    }
}
