use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub server_port: u16,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_org_id: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_timeout_secs: DEFAULT_OPENAI_TIMEOUT_SECS,
            server_port: DEFAULT_SERVER_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("OPENAI_API_KEY not set, using empty value");
                    String::new()
                }),
            openai_org_id: env::var("OPENAI_ORG_ID")
                .ok()
                .filter(|org| !org.trim().is_empty()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_timeout_secs: parse_or_default("OPENAI_TIMEOUT_SECS", DEFAULT_OPENAI_TIMEOUT_SECS),
            server_port: parse_or_default("SERVER_PORT", DEFAULT_SERVER_PORT),
            max_upload_bytes: parse_or_default("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - health analysis calls will fail upstream");
        }

        config
    }

    /// True once a completion API key is available.
    pub fn is_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_not_configured() {
        let config = AppConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_configured_with_api_key() {
        let config = AppConfig {
            openai_api_key: "sk-test".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_parse_or_default_falls_back_on_garbage() {
        env::set_var("HQ_TEST_BAD_PORT", "not-a-port");
        assert_eq!(parse_or_default("HQ_TEST_BAD_PORT", 8080u16), 8080);
        env::set_var("HQ_TEST_GOOD_PORT", " 9090 ");
        assert_eq!(parse_or_default("HQ_TEST_GOOD_PORT", 8080u16), 9090);
    }
}
