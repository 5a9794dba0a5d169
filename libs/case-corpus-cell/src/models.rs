use serde::{Deserialize, Serialize};

/// One prior case recovered from an uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastCase {
    pub date: String,
    pub diagnosis: Vec<String>,
    pub treatment: Vec<String>,
    pub outcome: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseSegmentation {
    pub cases: Vec<PastCase>,
    /// Non-blank lines that could not be attached to any case field.
    pub unattributed_lines: usize,
    /// Dated records dropped because they never received a diagnosis.
    pub incomplete_records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub file_size: usize,
    pub cases_loaded: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseListResponse {
    pub count: usize,
    pub cases: Vec<PastCase>,
}
