/// Endpoint smoke tests against a running API server.
///
/// Set `API_BASE_URL` to target something other than a local server. Checks
/// that need a live completion API are reported as skipped when the server
/// answers with the check-in fallback.

use std::time::Duration;
use reqwest::{multipart, Client, Response, StatusCode};
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const FALLBACK_SUMMARY: &str = "Unable to analyze health data at this time.";

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder().timeout(Duration::from_secs(120)).build()?;
        let base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self.client.get(format!("{}{}", self.base_url, path)).send().await?)
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Response, Box<dyn std::error::Error>> {
        self.post_raw(path, &body.to_string()).await
    }

    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);

        Ok(self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?)
    }
}

#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        println!("✅ {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: &str) {
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("❌ {}: {}", test_name, error);
    }

    pub fn skip(&mut self, test_name: &str, reason: &str) {
        self.skipped += 1;
        println!("⚠️ {} (skipped: {})", test_name, reason);
    }

    pub fn summary(&self) {
        println!("\n📊 Test Summary:");
        println!("✅ Passed: {}", self.passed);
        println!("❌ Failed: {}", self.failed);
        println!("⚠️ Skipped: {}", self.skipped);

        if !self.failures.is_empty() {
            println!("\n🔍 Failures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }

    fn expect_status(&mut self, test_name: &str, outcome: Result<Response, Box<dyn std::error::Error>>, expected: StatusCode) -> Option<Response> {
        match outcome {
            Ok(response) if response.status() == expected => {
                self.pass(test_name);
                Some(response)
            }
            Ok(response) => {
                self.fail(test_name, &format!("Status: {}", response.status()));
                None
            }
            Err(e) => {
                self.fail(test_name, &e.to_string());
                None
            }
        }
    }
}

fn check_in_body() -> Value {
    json!({
        "date": "2024-03-01T08:00:00Z",
        "mood": 2,
        "energy": 40,
        "sleep": 6.5,
        "symptoms": ["Headache", "Fatigue"],
        "userProfile": {
            "age": 34,
            "gender": "female",
            "conditions": ["Migraine"],
            "medications": [],
            "allergies": [],
            "lifestyle": { "smoking": "never", "alcohol": "occasional", "exercise": "moderate" }
        }
    })
}

fn visit_body(kind: &str) -> Value {
    json!({
        "type": kind,
        "visit_summary": {
            "biodata": {
                "name": "Mr. Mutuma Mwani",
                "age": 72,
                "gender": "male",
                "residence": "Mwiki"
            },
            "chief_complaint": "Difficulty in urination for 6 months",
            "history_present_illness": "Worsening stream, nocturia, weight loss.",
            "physical_examination": {
                "systemic_examination": "DRE: hard, irregular prostate."
            },
            "investigations": [
                { "type": "laboratory", "name": "PSA", "results": "55 ng/mL" }
            ]
        }
    })
}

pub async fn run_endpoint_tests() -> Result<TestResults, Box<dyn std::error::Error>> {
    let client = ApiTestClient::new()?;
    let mut results = TestResults::default();

    println!("🚀 Starting Endpoint Smoke Tests");
    println!("📍 Base URL: {}", client.base_url);

    println!("\n💓 Liveness");
    results.expect_status("Root responds", client.get("/").await, StatusCode::OK);

    println!("\n🧪 Request validation");
    for (name, body) in [("Empty body", ""), ("Null body", "null")] {
        if let Some(response) = results.expect_status(name, client.post_raw("/api/health/analyze", body).await, StatusCode::BAD_REQUEST) {
            let json: Value = response.json().await?;
            if json["error"] != "No data provided" {
                results.fail(&format!("{} error message", name), &json.to_string());
            }
        }
    }
    results.expect_status(
        "Malformed JSON",
        client.post_raw("/api/health/analyze", "{not json").await,
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    println!("\n📄 Past-case corpus");
    results.expect_status(
        "Non-PDF upload rejected",
        client.upload("/api/health/load-cases", "notes.txt", "text/plain", b"Date: 01/01/2024".to_vec()).await,
        StatusCode::BAD_REQUEST,
    );
    results.expect_status("Case listing", client.get("/api/health/cases").await, StatusCode::OK);

    println!("\n🩺 Analysis");
    if let Some(response) = results.expect_status(
        "Daily check-in",
        client.post("/api/health/analyze", check_in_body()).await,
        StatusCode::OK,
    ) {
        let json: Value = response.json().await?;
        if json["summary"] == FALLBACK_SUMMARY {
            results.skip("Check-in model output", "server returned the fallback analysis");
        } else if json["doctorRecommendation"]["urgency"].is_string() {
            results.pass("Check-in model output");
        } else {
            results.fail("Check-in model output", &json.to_string());
        }
    }

    match client.post("/api/health/analyze", visit_body("clinical_analysis")).await {
        Ok(response) if response.status() == StatusCode::OK => {
            let json: Value = response.json().await?;
            if json["diagnosis"].is_array() {
                results.pass("Clinical analysis");
            } else {
                results.fail("Clinical analysis", &json.to_string());
            }
        }
        Ok(response) if response.status() == StatusCode::INTERNAL_SERVER_ERROR => {
            results.skip("Clinical analysis", "completion API unavailable");
        }
        Ok(response) => results.fail("Clinical analysis", &format!("Status: {}", response.status())),
        Err(e) => results.fail("Clinical analysis", &e.to_string()),
    }

    Ok(results)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let results = run_endpoint_tests().await?;
    results.summary();

    if results.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires a running API server"]
    async fn test_endpoint_smoke() {
        let results = run_endpoint_tests().await.expect("Test execution failed");
        assert_eq!(results.failed, 0, "{:?}", results.failures);
    }

    #[test]
    fn test_visit_body_envelope() {
        let body = visit_body("comprehensive_analysis");
        assert_eq!(body["type"], "comprehensive_analysis");
        assert_eq!(body["visit_summary"]["biodata"]["age"], 72);
    }
}
