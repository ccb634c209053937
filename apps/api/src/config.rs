use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::interview::session::{DEFAULT_MAX_SESSIONS, DEFAULT_MAX_SESSION_MESSAGES};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Everything has a default except the LLM key, which is optional:
/// without it the guidance endpoints that need a model answer 503.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub companies_path: PathBuf,
    pub curriculum_path: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub llm_timeout_secs: u64,
    /// Total attempts per LLM call. 1 means no retry.
    pub llm_max_attempts: u32,
    pub max_upload_bytes: usize,
    /// Live interview sessions kept in memory; the oldest is evicted beyond this.
    pub interview_max_sessions: usize,
    /// Stored messages per interview session (user and interviewer combined).
    pub interview_max_messages: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            companies_path: path_env("COMPANIES_PATH", "companies.json"),
            curriculum_path: path_env("CURRICULUM_PATH", "curriculum.json"),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            llm_max_attempts: parse_env::<u32>("LLM_MAX_ATTEMPTS", 1)?.max(1),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            interview_max_sessions: parse_env::<usize>("INTERVIEW_MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?
                .max(1),
            interview_max_messages: parse_env::<usize>(
                "INTERVIEW_MAX_MESSAGES",
                DEFAULT_MAX_SESSION_MESSAGES,
            )?
            .max(2),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            companies_path: default_data_path("companies.json"),
            curriculum_path: default_data_path("curriculum.json"),
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 60,
            llm_max_attempts: 1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            interview_max_sessions: DEFAULT_MAX_SESSIONS,
            interview_max_messages: DEFAULT_MAX_SESSION_MESSAGES,
        }
    }
}

/// Shipped data files, located from the crate root so the working directory does not matter.
fn default_data_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn path_env(key: &str, default_file: &str) -> PathBuf {
    std::env::var_os(key)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_data_path(default_file))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("PLACEMENT_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(value, 9000);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PLACEMENT_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("PLACEMENT_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
        std::env::remove_var("PLACEMENT_TEST_BAD_PORT");
    }

    #[test]
    fn test_default_data_paths_point_at_shipped_files() {
        let config = Config::default();
        assert!(config.companies_path.is_file(), "{}", config.companies_path.display());
        assert!(config.curriculum_path.is_file(), "{}", config.curriculum_path.display());
    }

    #[test]
    fn test_default_config_has_single_llm_attempt() {
        let config = Config::default();
        assert_eq!(config.llm_max_attempts, 1);
        assert!(config.gemini_api_key.is_none());
    }
}
