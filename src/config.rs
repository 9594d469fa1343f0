use std::env;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;

use crate::error::AppError;
use crate::profile::Region;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub default_region: Region,
    pub request_timeout: Duration,
    pub ddragon_version: String,
    pub log_dir: String,
    pub log_max_files: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_API_BASE_URL: &str = "https://lol-profile-backend.onrender.com";
        const DEFAULT_REGION: &str = "las";
        const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
        const DEFAULT_DDRAGON_VERSION: &str = "16.1.1";
        const DEFAULT_LOG_DIR: &str = "logs";

        let api_base_url = parse_base_url(
            &env::var("PROFILE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
        )?;

        let default_region =
            Region::from_str(&env::var("DEFAULT_REGION").unwrap_or_else(|_| DEFAULT_REGION.into()))?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.into());

        let log_max_files = env::var("LOG_MAX_FILES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        Ok(Self {
            api_base_url,
            default_region,
            request_timeout: Duration::from_secs(request_timeout_secs),
            ddragon_version,
            log_dir,
            log_max_files,
        })
    }
}

/// Validate the profile service base URL and strip any trailing slash so
/// paths can be appended verbatim.
fn parse_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let url = Url::parse(trimmed)
        .map_err(|e| AppError::Config(format!("PROFILE_API_BASE_URL is invalid: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "PROFILE_API_BASE_URL must use http or https, got {}",
            url.scheme()
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        assert_eq!(
            parse_base_url("https://profiles.example.com/").unwrap(),
            "https://profiles.example.com"
        );
        assert_eq!(
            parse_base_url("  http://localhost:8080  ").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn base_url_must_be_absolute_http() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            parse_base_url("ftp://profiles.example.com"),
            Err(AppError::Config(_))
        ));
    }
}
