//! Prompt templates for the three analysis variants.
//!
//! Each template embeds the request payload as pretty-printed JSON, spells out
//! the exact output object, pins `urgency` to its literal set where present,
//! and asks for the JSON object alone.

use serde::Serialize;

use case_corpus_cell::PastCase;

use crate::error::AnalysisError;

pub const SYSTEM_INSTRUCTION: &str = "You are a knowledgeable healthcare assistant. Provide clear, professional analysis while being mindful of medical ethics and privacy. Never make definitive medical diagnoses. Always return valid JSON matching the exact structure requested.";

pub const CLINICAL_SYSTEM_INSTRUCTION: &str = "You are a clinical decision-support assistant helping a licensed clinician review a patient encounter. Offer structured, evidence-informed suggestions rather than definitive diagnoses, treat all patient details as confidential, keep a professional tone, and always return valid JSON matching the exact structure requested.";

const CHECK_IN_SCHEMA: &str = r#"{
  "summary": "A brief summary of their health status",
  "concerns": ["List of potential health concerns"],
  "tips": ["List of 2-3 personalized wellness tips"],
  "doctorRecommendation": {
    "needed": true/false,
    "urgency": "routine" or "soon" or "urgent",
    "specialistType": "Type of specialist if needed",
    "reason": "Reason for recommendation"
  }
}"#;

const CLINICAL_SCHEMA: &str = r#"{
  "diagnosis": ["Most likely diagnoses"],
  "differentialDiagnosis": ["Alternative diagnoses to consider"],
  "recommendedTests": ["Further investigations to order"],
  "treatmentPlan": ["Management steps"],
  "followUpRecommendations": ["Follow-up actions and intervals"],
  "urgency": "routine" or "soon" or "urgent"
}"#;

const COMPREHENSIVE_SCHEMA: &str = r#"{
  "analysis": "Overall clinical analysis of the visit",
  "comparison": "How this visit compares with the past cases provided",
  "riskFactors": ["Relevant risk factors"],
  "recommendations": ["Actionable recommendations"],
  "diagnosis": {
    "guidelines": ["Clinical guidelines that apply"],
    "nextSteps": ["Diagnostic next steps"]
  },
  "prognosis": {
    "researchBased": "Prognosis according to published research",
    "visitBased": "Prognosis according to this visit's findings"
  },
  "finalRecommendation": "Single concluding recommendation",
  "references": [
    { "journal": "Journal name", "title": "Article title", "year": "Publication year", "url": "Link to the article" }
  ]
}"#;

fn pretty<T: Serialize>(payload: &T) -> Result<String, AnalysisError> {
    serde_json::to_string_pretty(payload).map_err(|e| AnalysisError::Payload(e.to_string()))
}

pub fn check_in_prompt<T: Serialize>(payload: &T) -> Result<String, AnalysisError> {
    Ok(format!(
        "You are a helpful virtual health assistant. Analyze this patient's self-reported health data:

{payload}

Provide your analysis in the following EXACT JSON format:
{CHECK_IN_SCHEMA}

Make sure to:
1. Include ALL fields exactly as shown
2. Use arrays for concerns and tips
3. Use the exact urgency values: \"routine\", \"soon\", or \"urgent\"
4. Return ONLY the JSON object, no other text",
        payload = pretty(payload)?,
    ))
}

pub fn clinical_prompt<T: Serialize>(payload: &T) -> Result<String, AnalysisError> {
    Ok(format!(
        "Review the following clinical visit summary, including biodata, history, examination findings and investigations:

{payload}

Provide your analysis in the following EXACT JSON format:
{CLINICAL_SCHEMA}

Make sure to:
1. Include ALL six fields exactly as shown
2. Use arrays for diagnosis, differentialDiagnosis, recommendedTests, treatmentPlan and followUpRecommendations
3. Use the exact urgency values: \"routine\", \"soon\", or \"urgent\"
4. Return ONLY the JSON object, no other text",
        payload = pretty(payload)?,
    ))
}

pub fn comprehensive_prompt<T: Serialize>(
    payload: &T,
    past_cases: &[PastCase],
) -> Result<String, AnalysisError> {
    let past_cases = if past_cases.is_empty() {
        "No past cases have been loaded. Base the comparison on published research only.".to_string()
    } else {
        pretty(&past_cases)?
    };

    Ok(format!(
        "Review the following clinical visit summary:

{payload}

Past cases from this practice, for comparison:

{past_cases}

Provide your analysis in the following EXACT JSON format:
{COMPREHENSIVE_SCHEMA}

Make sure to:
1. Include ALL fields exactly as shown, including both diagnosis and prognosis sub-objects
2. Use arrays for riskFactors, recommendations, diagnosis.guidelines and diagnosis.nextSteps
3. Cite AT LEAST 3 peer-reviewed references, each with journal, title, year and url
4. Return ONLY the JSON object, no other text",
        payload = pretty(payload)?,
    ))
}
