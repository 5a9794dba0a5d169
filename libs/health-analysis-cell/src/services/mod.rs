pub mod analysis;
pub mod completion;
pub mod prompts;
pub mod validation;

pub use analysis::HealthAnalysisService;
pub use completion::{CompletionClient, OpenAiCompletionClient};
