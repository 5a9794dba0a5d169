pub mod analysis;
pub mod error;

pub use analysis::{
    AnalysisRequest,
    CheckInAnalysis,
    CheckInRequest,
    ClinicalAnalysis,
    HealthAnalysis,
    Urgency,
    VisitSummary,
};
pub use error::AppError;
