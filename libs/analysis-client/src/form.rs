use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::analysis::{CheckInRequest, Lifestyle, UserProfileSnapshot};

use crate::error::ClientError;

/// Five-point mood scale; the check-in `mood` is an index into it.
pub const MOOD_SCALE: [&str; 5] = ["😞", "😟", "😐", "🙂", "😄"];

pub const COMMON_SYMPTOMS: [&str; 8] = [
    "Headache",
    "Fatigue",
    "Nausea",
    "Dizziness",
    "Joint pain",
    "Muscle soreness",
    "Cough",
    "Sore throat",
];

pub const MAX_ENERGY: u8 = 100;
pub const MAX_SLEEP_HOURS: f64 = 12.0;

/// The onboarding profile as kept in client storage: free text throughout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredProfile {
    pub age: String,
    pub gender: String,
    pub race: String,
    pub height: String,
    pub weight: String,
    pub location: String,
    pub recent_illness: String,
    pub current_conditions: String,
    pub allergies: String,
    pub medications: String,
    pub family_history: String,
    pub lifestyle: Lifestyle,
}

impl StoredProfile {
    pub fn to_snapshot(&self) -> UserProfileSnapshot {
        UserProfileSnapshot {
            age: self.age.trim().parse().ok(),
            gender: self.gender.clone(),
            conditions: split_list(&self.current_conditions),
            medications: split_list(&self.medications),
            allergies: split_list(&self.allergies),
            lifestyle: self.lifestyle.clone(),
        }
    }
}

/// Splits a comma-separated free-text field, dropping blank entries.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckInForm {
    pub mood: u8,
    pub energy: u8,
    pub sleep_hours: f64,
    pub symptoms: BTreeSet<String>,
}

impl Default for CheckInForm {
    fn default() -> Self {
        Self {
            mood: 3,
            energy: 50,
            sleep_hours: 7.0,
            symptoms: BTreeSet::new(),
        }
    }
}

impl CheckInForm {
    /// Adds the symptom if absent, removes it if present.
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if !self.symptoms.remove(symptom) {
            self.symptoms.insert(symptom.to_string());
        }
    }

    pub fn mood_emoji(&self) -> Option<&'static str> {
        MOOD_SCALE.get(usize::from(self.mood)).copied()
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if usize::from(self.mood) >= MOOD_SCALE.len() {
            return Err(ClientError::InvalidForm(format!(
                "mood must be between 0 and {}",
                MOOD_SCALE.len() - 1
            )));
        }
        if self.energy > MAX_ENERGY {
            return Err(ClientError::InvalidForm(format!("energy must be between 0 and {MAX_ENERGY}")));
        }
        let half_hours = self.sleep_hours * 2.0;
        if !(0.0..=MAX_SLEEP_HOURS).contains(&self.sleep_hours) || half_hours.fract() != 0.0 {
            return Err(ClientError::InvalidForm(format!(
                "sleep must be between 0 and {MAX_SLEEP_HOURS} hours in half-hour steps"
            )));
        }
        Ok(())
    }

    pub fn to_request(
        &self,
        profile: Option<&StoredProfile>,
        date: DateTime<Utc>,
    ) -> Result<CheckInRequest, ClientError> {
        self.validate()?;

        Ok(CheckInRequest {
            date: date.to_rfc3339(),
            mood: self.mood,
            energy: self.energy,
            sleep_hours: self.sleep_hours,
            symptoms: self.symptoms.clone(),
            user_profile: profile.map(StoredProfile::to_snapshot),
        })
    }
}
