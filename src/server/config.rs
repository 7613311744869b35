use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4000";
const DEFAULT_ALLOWED_ORIGINS: &str = "https://storygenerator30.netlify.app,http://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub llm_api_url: Url,
    pub llm_api_key: Option<String>,
    pub llm_model: Option<String>,

    pub bind_address: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let llm_api_url = required("LLM_API_URL")?;
        let llm_api_url = Url::parse(&llm_api_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "LLM_API_URL".to_string(),
            reason: e.to_string(),
        })?;

        let allowed_origins = optional("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            llm_api_url,
            llm_api_key: optional("LLM_API_KEY"),
            llm_model: optional("LLM_MODEL"),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origins: split_origins(&allowed_origins),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
