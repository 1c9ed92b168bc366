use std::env;

use crate::config::dto::{AppConfig, OpenAiConfig};
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 30;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    config_from_env(|key| env::var(key).ok())
}

pub fn config_from_env<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("PORT") {
        Some(value) => value
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?,
        None => DEFAULT_PORT,
    };

    let api_key = lookup("OPENAI_API_KEY")
        .or_else(|| lookup("openapi"))
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::configuration("OPENAI_API_KEY is required".to_string()))?;

    let base_url = lookup("OPENAI_BASE_URL")
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

    let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

    let timeout_secs = match lookup("OPENAI_TIMEOUT_SECS") {
        Some(value) => parse_timeout_secs(&value)?,
        None => DEFAULT_OPENAI_TIMEOUT_SECS,
    };
    let disable_proxy = parse_bool(&lookup, "DISABLE_PROXY", false);

    Ok(AppConfig {
        port,
        disable_proxy,
        openai: OpenAiConfig {
            api_key,
            base_url,
            model,
            timeout_secs,
        },
    })
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn parse_timeout_secs(value: &str) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(0) => Err(AppError::configuration(
            "OPENAI_TIMEOUT_SECS must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(err) => Err(AppError::configuration(format!(
            "invalid OPENAI_TIMEOUT_SECS: {err}"
        ))),
    }
}
