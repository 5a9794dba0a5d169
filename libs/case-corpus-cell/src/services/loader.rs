use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::error::CorpusError;
use crate::models::LoadSummary;
use crate::services::extractor::{is_accepted_media_type, DocumentTextExtractor, PdfTextExtractor};
use crate::services::segmentation::parse_cases;
use crate::services::store::CaseCorpusStore;

pub struct CaseCorpusLoader {
    extractor: Arc<dyn DocumentTextExtractor>,
    store: CaseCorpusStore,
}

impl CaseCorpusLoader {
    pub fn new(extractor: Arc<dyn DocumentTextExtractor>, store: CaseCorpusStore) -> Self {
        Self { extractor, store }
    }

    pub fn with_pdf_extractor(store: CaseCorpusStore) -> Self {
        Self::new(Arc::new(PdfTextExtractor), store)
    }

    pub fn store(&self) -> &CaseCorpusStore {
        &self.store
    }

    pub fn check_media_type(&self, declared: Option<&str>) -> Result<(), CorpusError> {
        match declared {
            Some(media_type) if is_accepted_media_type(media_type) => Ok(()),
            Some(media_type) => Err(CorpusError::UnsupportedMediaType(media_type.to_string())),
            None => Err(CorpusError::UnsupportedMediaType("unspecified".to_string())),
        }
    }

    /// Extracts, segments and installs a new corpus. On any failure the
    /// previously loaded corpus stays in place.
    #[instrument(skip(self, bytes), fields(file_size = bytes.len()))]
    pub async fn load(&self, bytes: Vec<u8>) -> Result<LoadSummary, CorpusError> {
        let file_size = bytes.len();
        let extractor = Arc::clone(&self.extractor);

        let text = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
            .await
            .map_err(|e| CorpusError::TaskJoin(e.to_string()))??;

        debug!("Extracted {} characters of case text", text.len());

        let segmentation = parse_cases(&text);
        if segmentation.unattributed_lines > 0 || segmentation.incomplete_records > 0 {
            warn!(
                "Case segmentation skipped {} unattributed lines and {} incomplete records",
                segmentation.unattributed_lines, segmentation.incomplete_records
            );
        }

        let cases_loaded = self.store.replace(segmentation.cases).await;

        info!("Loaded {} past cases ({} bytes)", cases_loaded, file_size);

        Ok(LoadSummary {
            file_size,
            cases_loaded,
        })
    }
}
