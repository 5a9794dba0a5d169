use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use shared_models::analysis::{CheckInAnalysis, ClinicalAnalysis, HealthAnalysis};

use crate::error::AnalysisError;

pub const MIN_REFERENCES: usize = 3;

/// An analysis shape that can be checked beyond what deserialization enforces.
pub trait ValidatedAnalysis: DeserializeOwned {
    fn validate(&self) -> Result<(), AnalysisError>;
}

impl ValidatedAnalysis for CheckInAnalysis {
    fn validate(&self) -> Result<(), AnalysisError> {
        require_text("summary", &self.summary)
    }
}

// Lists and urgency are fully enforced by the typed shape.
impl ValidatedAnalysis for ClinicalAnalysis {
    fn validate(&self) -> Result<(), AnalysisError> {
        Ok(())
    }
}

impl ValidatedAnalysis for HealthAnalysis {
    fn validate(&self) -> Result<(), AnalysisError> {
        require_text("analysis", &self.analysis)?;
        require_text("comparison", &self.comparison)?;
        require_text("finalRecommendation", &self.final_recommendation)?;

        if self.references.len() < MIN_REFERENCES {
            return Err(AnalysisError::InsufficientReferences {
                required: MIN_REFERENCES,
                found: self.references.len(),
            });
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AnalysisError> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidShape(format!("{field} must be a non-empty string")));
    }
    Ok(())
}

/// Removes a wrapping Markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}

/// Strips fences, parses, deserializes and validates completion output.
///
/// The typed shape is only a check: the object is returned exactly as the
/// model produced it, unknown keys and `null`s included.
pub fn parse_analysis<T: ValidatedAnalysis>(content: &str) -> Result<Value, AnalysisError> {
    let value: Value = serde_json::from_str(strip_code_fences(content))?;

    if !value.is_object() {
        return Err(AnalysisError::InvalidShape("expected a JSON object".to_string()));
    }

    let analysis = T::deserialize(&value).map_err(|e| AnalysisError::InvalidShape(e.to_string()))?;
    analysis.validate()?;

    Ok(value)
}
