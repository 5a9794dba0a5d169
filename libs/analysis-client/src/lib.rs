//! Typed client for the health analysis API.
//!
//! Builds check-in requests from form state and the locally stored profile,
//! then dispatches them (or a clinician's visit summary) to
//! `POST /api/health/analyze`.

pub mod client;
pub mod error;
pub mod form;

pub use client::HealthAnalysisClient;
pub use error::ClientError;
pub use form::{CheckInForm, StoredProfile, COMMON_SYMPTOMS, MOOD_SCALE};
