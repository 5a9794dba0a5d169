use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("No response content from completion API")]
    NoContent,

    #[error("Completion output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid response structure: {0}")]
    InvalidShape(String),

    #[error("Expected at least {required} references, found {found}")]
    InsufficientReferences { required: usize, found: usize },

    #[error("Invalid visit analysis request: {0}")]
    InvalidRequest(String),

    #[error("Could not serialize request payload: {0}")]
    Payload(String),
}
