use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SOURCE_URL: &str = "https://www.coursera.org/articles/high-income-skills";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub source_url: String,
    pub user_agent: String,
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            source_url: std::env::var("SKILLS_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            user_agent: std::env::var("SKILLS_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            fetch_timeout: Duration::from_secs(parse_env("SKILLS_FETCH_TIMEOUT_SECS", 10)?),
            cache_ttl: Duration::from_secs(parse_env("SKILLS_CACHE_TTL_SECS", 3600)?),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u64 = parse_env("SKILLSCOPE_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SKILLSCOPE_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("SKILLSCOPE_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("SKILLSCOPE_TEST_BAD_PORT"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("SKILLSCOPE_TEST_TTL", "120");
        let value: u64 = parse_env("SKILLSCOPE_TEST_TTL", 3600).unwrap();
        assert_eq!(value, 120);
    }
}
