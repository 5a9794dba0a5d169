// =====================================================================================
// HEALTH ANALYSIS WIRE MODELS
// =====================================================================================
//
// Shared between the analysis endpoint and its client. Check-in and analysis
// shapes use camelCase on the wire, the clinician visit summary uses snake_case.
//
// =====================================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Discriminator value selecting the clinical (v1) analysis path.
pub const CLINICAL_ANALYSIS: &str = "clinical_analysis";
/// Discriminator value selecting the comprehensive (v2) analysis path.
pub const COMPREHENSIVE_ANALYSIS: &str = "comprehensive_analysis";

// =====================================================================================
// SHARED ENUMS
// =====================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Soon,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Routine, Urgency::Soon, Urgency::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Soon => "soon",
            Urgency::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =====================================================================================
// CHECK-IN
// =====================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub date: String,
    pub mood: u8,
    pub energy: u8,
    #[serde(alias = "sleep")]
    pub sleep_hours: f64,
    #[serde(default)]
    pub symptoms: BTreeSet<String>,
    #[serde(default)]
    pub user_profile: Option<UserProfileSnapshot>,
}

/// Profile fields attached to a check-in, already split into lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileSnapshot {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub lifestyle: Lifestyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub smoking: String,
    #[serde(default)]
    pub alcohol: String,
    #[serde(default)]
    pub exercise: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInAnalysis {
    pub summary: String,
    pub concerns: Vec<String>,
    pub tips: Vec<String>,
    pub doctor_recommendation: DoctorRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecommendation {
    pub needed: bool,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// =====================================================================================
// VISIT SUMMARY
// =====================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    pub biodata: Biodata,
    pub chief_complaint: String,
    pub history_present_illness: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_of_systems: Option<String>,
    pub physical_examination: PhysicalExamination,
    #[serde(default)]
    pub investigations: Vec<Investigation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biodata {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    pub residence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalExamination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vital_signs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_examination: Option<String>,
    pub systemic_examination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_examinations: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestigationType {
    Laboratory,
    Imaging,
    Histology,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investigation {
    #[serde(rename = "type")]
    pub kind: InvestigationType,
    pub name: String,
    pub results: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_values: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

// =====================================================================================
// CLINICAL (v1) AND COMPREHENSIVE (v2) ANALYSES
// =====================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAnalysis {
    pub diagnosis: Vec<String>,
    pub differential_diagnosis: Vec<String>,
    pub recommended_tests: Vec<String>,
    pub treatment_plan: Vec<String>,
    pub follow_up_recommendations: Vec<String>,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    pub analysis: String,
    pub comparison: String,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub diagnosis: DiagnosisGuidance,
    pub prognosis: Prognosis,
    pub final_recommendation: String,
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisGuidance {
    pub guidelines: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prognosis {
    pub research_based: String,
    pub visit_based: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub journal: String,
    pub title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    pub url: String,
}

// Models emit publication years as either `2021` or `"2021"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a year as string or number",
        )),
    }
}

// =====================================================================================
// DISCRIMINATED REQUEST / RESPONSE
// =====================================================================================

/// Body of `POST /api/health/analyze`.
///
/// The `type` field selects the variant. A missing or unrecognised `type`
/// routes to the check-in path.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    CheckIn(CheckInRequest),
    Clinical(VisitSummary),
    Comprehensive(VisitSummary),
}

#[derive(Serialize)]
struct VisitEnvelopeRef<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    visit_summary: &'a VisitSummary,
}

#[derive(Deserialize)]
struct VisitEnvelope {
    visit_summary: VisitSummary,
}

impl AnalysisRequest {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value.get("type").and_then(Value::as_str) {
            Some(CLINICAL_ANALYSIS) => {
                let envelope: VisitEnvelope = serde_json::from_value(value)?;
                Ok(AnalysisRequest::Clinical(envelope.visit_summary))
            }
            Some(COMPREHENSIVE_ANALYSIS) => {
                let envelope: VisitEnvelope = serde_json::from_value(value)?;
                Ok(AnalysisRequest::Comprehensive(envelope.visit_summary))
            }
            _ => Ok(AnalysisRequest::CheckIn(serde_json::from_value(value)?)),
        }
    }

    /// True when the body's `type` names one of the visit analyses.
    pub fn names_visit_analysis(value: &Value) -> bool {
        matches!(
            value.get("type").and_then(Value::as_str),
            Some(CLINICAL_ANALYSIS | COMPREHENSIVE_ANALYSIS)
        )
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisRequest::CheckIn(_) => "check_in",
            AnalysisRequest::Clinical(_) => CLINICAL_ANALYSIS,
            AnalysisRequest::Comprehensive(_) => COMPREHENSIVE_ANALYSIS,
        }
    }
}

impl Serialize for AnalysisRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnalysisRequest::CheckIn(check_in) => check_in.serialize(serializer),
            AnalysisRequest::Clinical(visit_summary) => VisitEnvelopeRef {
                kind: CLINICAL_ANALYSIS,
                visit_summary,
            }
            .serialize(serializer),
            AnalysisRequest::Comprehensive(visit_summary) => VisitEnvelopeRef {
                kind: COMPREHENSIVE_ANALYSIS,
                visit_summary,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AnalysisRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AnalysisRequest::from_value(value).map_err(de::Error::custom)
    }
}

/// Receipt returned by `POST /api/health/load-cases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLoadReceipt {
    pub message: String,
    pub file_size: usize,
    #[serde(default)]
    pub cases_loaded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn visit_json() -> Value {
        json!({
            "biodata": {
                "name": "Mr. Mutuma Mwani",
                "age": 72,
                "gender": "male",
                "residence": "Mwiki"
            },
            "chief_complaint": "Difficulty in urination for 6 months",
            "history_present_illness": "Gradual onset, worsening stream",
            "physical_examination": {
                "systemic_examination": "Bladder not palpable"
            },
            "investigations": [
                { "type": "laboratory", "name": "PSA", "results": "55 ng/mL" }
            ]
        })
    }

    #[test]
    fn test_missing_type_routes_to_check_in() {
        let request = AnalysisRequest::from_value(json!({
            "date": "2024-03-01T08:00:00Z",
            "mood": 3,
            "energy": 50,
            "sleep": 7.5,
            "symptoms": ["Headache"],
            "userProfile": null
        }))
        .unwrap();

        match request {
            AnalysisRequest::CheckIn(check_in) => {
                assert_eq!(check_in.sleep_hours, 7.5);
                assert!(check_in.symptoms.contains("Headache"));
                assert!(check_in.user_profile.is_none());
            }
            other => panic!("expected check-in, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_clinical_discriminator() {
        let mut body = json!({ "type": "clinical_analysis" });
        body["visit_summary"] = visit_json();

        let request = AnalysisRequest::from_value(body).unwrap();
        assert_eq!(request.kind(), CLINICAL_ANALYSIS);

        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(serialized["type"], "clinical_analysis");
        assert_eq!(serialized["visit_summary"]["biodata"]["age"], 72);
        assert_eq!(serialized["visit_summary"]["investigations"][0]["type"], "laboratory");
    }

    #[test]
    fn test_comprehensive_discriminator() {
        let mut body = json!({ "type": "comprehensive_analysis" });
        body["visit_summary"] = visit_json();

        let request: AnalysisRequest = serde_json::from_value(body).unwrap();
        assert!(matches!(request, AnalysisRequest::Comprehensive(_)));
    }

    #[test]
    fn test_clinical_without_visit_summary_is_rejected() {
        let body = json!({ "type": "clinical_analysis" });
        assert!(AnalysisRequest::names_visit_analysis(&body));
        assert!(AnalysisRequest::from_value(body).is_err());
    }

    #[test]
    fn test_names_visit_analysis() {
        assert!(AnalysisRequest::names_visit_analysis(&json!({ "type": "comprehensive_analysis" })));
        assert!(!AnalysisRequest::names_visit_analysis(&json!({ "type": "check_in" })));
        assert!(!AnalysisRequest::names_visit_analysis(&json!({ "mood": 3 })));
        assert!(!AnalysisRequest::names_visit_analysis(&json!([1, 2])));
    }

    #[test]
    fn test_urgency_rejects_unknown_literal() {
        assert!(serde_json::from_value::<Urgency>(json!("critical")).is_err());
        assert!(serde_json::from_value::<Urgency>(json!("Routine")).is_err());
        assert_eq!(serde_json::from_value::<Urgency>(json!("soon")).unwrap(), Urgency::Soon);
    }

    #[test]
    fn test_reference_year_accepts_number_or_string() {
        let numeric: Reference = serde_json::from_value(json!({
            "journal": "NEJM", "title": "t", "year": 2021, "url": "https://example.org"
        }))
        .unwrap();
        let text: Reference = serde_json::from_value(json!({
            "journal": "NEJM", "title": "t", "year": "2021", "url": "https://example.org"
        }))
        .unwrap();
        assert_eq!(numeric.year, "2021");
        assert_eq!(numeric, text);
    }
}
