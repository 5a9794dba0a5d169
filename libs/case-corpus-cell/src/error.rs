use shared_models::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("No file provided")]
    MissingFile,

    #[error("File must be a PDF (received {0})")]
    UnsupportedMediaType(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Extraction task failed: {0}")]
    TaskJoin(String),
}

impl From<CorpusError> for AppError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::MissingFile => AppError::BadRequest("No file provided".to_string()),
            CorpusError::UnsupportedMediaType(_) => AppError::BadRequest("File must be a PDF".to_string()),
            CorpusError::Multipart(details) => AppError::ValidationError {
                message: "Invalid upload".to_string(),
                details,
            },
            other => AppError::internal("Failed to load past cases", other),
        }
    }
}
