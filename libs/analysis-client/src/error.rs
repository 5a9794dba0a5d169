use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid check-in form: {0}")]
    InvalidForm(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),
}
