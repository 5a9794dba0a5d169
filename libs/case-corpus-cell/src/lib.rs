//! Case Corpus Cell
//!
//! Loads past-case PDFs into a shared corpus that comprehensive analyses
//! read as context.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::CorpusError;
pub use models::{CaseSegmentation, LoadSummary, PastCase};
pub use router::case_corpus_routes;

pub mod api {
    pub use crate::services::extractor::{DocumentTextExtractor, PdfTextExtractor, ACCEPTED_MEDIA_TYPE};
    pub use crate::services::loader::CaseCorpusLoader;
    pub use crate::services::segmentation::parse_cases;
    pub use crate::services::store::CaseCorpusStore;
}
