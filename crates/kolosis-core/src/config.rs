use crate::app_config::{AppConfig, Credentials};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here so tests can drive them from a plain
/// `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let account = require("KOLOSIS_ACCOUNT")?;
    let password = require("KOLOSIS_PASSWORD")?;

    let log_level = or_default("KOLOSIS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("KOLOSIS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("KOLOSIS_USER_AGENT", "kolosis/0.1 (syllabus-catalog)");
    let detail_concurrency = parse_usize("KOLOSIS_DETAIL_CONCURRENCY", "1")?;
    let max_retries = parse_u32("KOLOSIS_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("KOLOSIS_RETRY_BACKOFF_BASE_MS", "500")?;

    if detail_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "KOLOSIS_DETAIL_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "KOLOSIS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        credentials: Credentials { account, password },
        log_level,
        request_timeout_secs,
        user_agent,
        detail_concurrency,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
