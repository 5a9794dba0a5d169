use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::analysis::{
    Biodata, CheckInRequest, Investigation, InvestigationType, Lifestyle, PhysicalExamination,
    UserProfileSnapshot, VisitSummary,
};

pub struct TestConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            openai_api_key: "sk-test-key".to_string(),
            openai_base_url: "http://localhost:54321/v1".to_string(),
            openai_model: "gpt-4-turbo-preview".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the completion client at a mock server, e.g. `MockServer::uri()`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            openai_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            openai_api_key: self.openai_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            openai_model: self.openai_model.clone(),
            openai_timeout_secs: 5,
            ..AppConfig::default()
        }
    }
}

pub struct CompletionFixtures;

impl CompletionFixtures {
    /// A chat-completions response whose first choice carries `content`.
    pub fn with_content(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4-turbo-preview",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    /// Same as `with_content` with the JSON value serialized as the content.
    pub fn with_json(content: &Value) -> Value {
        Self::with_content(&content.to_string())
    }

    pub fn without_content() -> Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": null },
                "finish_reason": "stop"
            }]
        })
    }

    pub fn check_in_analysis() -> Value {
        json!({
            "summary": "Mood and energy are steady; sleep is slightly short.",
            "concerns": ["Recurring headaches"],
            "tips": ["Aim for 8 hours of sleep", "Stay hydrated", "Take short screen breaks"],
            "doctorRecommendation": {
                "needed": true,
                "urgency": "soon",
                "specialistType": "Neurologist",
                "reason": "Headaches reported on several days"
            }
        })
    }

    pub fn clinical_analysis() -> Value {
        json!({
            "diagnosis": ["Metastatic prostate adenocarcinoma"],
            "differentialDiagnosis": ["Benign prostatic hyperplasia", "Chronic prostatitis"],
            "recommendedTests": ["CT chest/abdomen", "Serum testosterone"],
            "treatmentPlan": ["Androgen deprivation therapy", "Oncology referral"],
            "followUpRecommendations": ["PSA every 3 months"],
            "urgency": "urgent"
        })
    }

    pub fn comprehensive_analysis() -> Value {
        json!({
            "analysis": "High-grade prostate cancer with skeletal metastases.",
            "comparison": "Matches prior cases of advanced disease managed with ADT.",
            "riskFactors": ["Age over 70", "Family history"],
            "recommendations": ["Start ADT", "Bone protection"],
            "diagnosis": {
                "guidelines": ["EAU prostate cancer guideline"],
                "nextSteps": ["Staging CT", "Multidisciplinary review"]
            },
            "prognosis": {
                "researchBased": "Median survival several years with modern therapy.",
                "visitBased": "Guarded given metastatic burden."
            },
            "finalRecommendation": "Urgent oncology referral.",
            "references": [
                { "journal": "NEJM", "title": "Abiraterone in metastatic prostate cancer", "year": 2017, "url": "https://www.nejm.org/doi/10.1056/NEJMoa1704174" },
                { "journal": "Lancet", "title": "Docetaxel in hormone-sensitive disease", "year": 2016, "url": "https://www.thelancet.com/article/S0140-6736(15)01037-5" },
                { "journal": "J Clin Oncol", "title": "Enzalutamide in mHSPC", "year": "2019", "url": "https://ascopubs.org/doi/10.1200/JCO.19.00799" }
            ]
        })
    }
}

pub struct RequestFixtures;

impl RequestFixtures {
    pub fn check_in() -> CheckInRequest {
        CheckInRequest {
            date: Utc
                .with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
                .single()
                .map(|date| date.to_rfc3339())
                .unwrap_or_default(),
            mood: 3,
            energy: 55,
            sleep_hours: 6.5,
            symptoms: BTreeSet::from(["Headache".to_string(), "Fatigue".to_string()]),
            user_profile: Some(UserProfileSnapshot {
                age: Some(34),
                gender: "female".to_string(),
                conditions: vec!["Migraine".to_string()],
                medications: vec!["Ibuprofen".to_string()],
                allergies: vec![],
                lifestyle: Lifestyle {
                    smoking: "never".to_string(),
                    alcohol: "occasional".to_string(),
                    exercise: "moderate".to_string(),
                },
            }),
        }
    }

    pub fn visit_summary() -> VisitSummary {
        VisitSummary {
            patient_id: Some("patient-001".to_string()),
            visit_date: Some("2024-03-01T09:30:00Z".to_string()),
            biodata: Biodata {
                name: "Mr. Mutuma Mwani".to_string(),
                age: 72,
                gender: "male".to_string(),
                occupation: Some("Retired teacher".to_string()),
                marital_status: Some("Married".to_string()),
                residence: "Mwiki".to_string(),
            },
            chief_complaint: "Difficulty in urination for 6 months".to_string(),
            history_present_illness: "Gradual onset. Worsening stream, nocturia 3-4 times per night. Weight loss ~5 kg in 3 months.".to_string(),
            past_medical_history: Some("Hypertension for 10 years, well controlled.".to_string()),
            family_history: Some("Father died of 'prostate problems' in his 80s.".to_string()),
            social_history: Some("Non-smoker, moderate alcohol intake.".to_string()),
            review_of_systems: Some("No lower limb weakness or numbness.".to_string()),
            physical_examination: PhysicalExamination {
                vital_signs: Some("BP 135/85 mmHg, HR 78 bpm, afebrile".to_string()),
                general_examination: Some("Appears elderly, mildly cachectic".to_string()),
                systemic_examination: "Abdomen: no masses. Bladder not palpable.".to_string(),
                special_examinations: Some("DRE: hard, irregular prostate, median sulcus obliterated.".to_string()),
            },
            investigations: vec![
                Investigation {
                    kind: InvestigationType::Laboratory,
                    name: "PSA (Prostate Specific Antigen)".to_string(),
                    results: "55 ng/mL".to_string(),
                    reference_values: Some("normal < 4 ng/mL".to_string()),
                    interpretation: Some("Significantly elevated".to_string()),
                },
                Investigation {
                    kind: InvestigationType::Imaging,
                    name: "Bone Scan".to_string(),
                    results: "Multiple sclerotic lesions in the lumbar spine and pelvis".to_string(),
                    reference_values: None,
                    interpretation: Some("Metastatic disease".to_string()),
                },
                Investigation {
                    kind: InvestigationType::Histology,
                    name: "Prostate Biopsy".to_string(),
                    results: "Adenocarcinoma, Gleason score 8 (4+4)".to_string(),
                    reference_values: None,
                    interpretation: Some("High-grade prostate cancer".to_string()),
                },
            ],
            clinical_notes: None,
            assessment_plan: None,
            user_id: Some("user-1".to_string()),
        }
    }
}
