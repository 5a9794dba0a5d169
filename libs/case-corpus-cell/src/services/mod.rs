pub mod extractor;
pub mod loader;
pub mod segmentation;
pub mod store;

pub use extractor::{DocumentTextExtractor, PdfTextExtractor};
pub use loader::CaseCorpusLoader;
pub use store::CaseCorpusStore;
