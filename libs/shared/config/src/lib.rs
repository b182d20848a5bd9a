use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_AI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
}

impl FromStr for AppEnvironment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnvironment::Development),
            "production" | "prod" => Ok(AppEnvironment::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

/// How new record identifiers are synthesized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<Prefix>_<32 hex chars>` from a random v4 UUID.
    #[default]
    Random,
    /// `<Prefix>_SIM_<last 5 digits of the epoch millisecond clock>`.
    /// Kept for compatibility with existing sample data; may collide.
    Timestamp,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" | "uuid" => Ok(IdStrategy::Random),
            "timestamp" | "legacy" => Ok(IdStrategy::Timestamp),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Random => write!(f, "random"),
            IdStrategy::Timestamp => write!(f, "timestamp"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: AppEnvironment,
    pub ai_api_key: String,
    pub ai_base_url: String,
    pub ai_model: String,
    pub id_strategy: IdStrategy,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so callers can
    /// feed values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| {
                warn!("HOST not set, using default");
                "0.0.0.0".to_string()
            }),
            port: match lookup("PORT").map(|p| p.parse::<u16>()) {
                Some(Ok(port)) => port,
                Some(Err(_)) => {
                    warn!("PORT is not a valid port number, using default");
                    3000
                }
                None => {
                    warn!("PORT not set, using default");
                    3000
                }
            },
            environment: parse_or_default(&lookup, "APP_ENV", AppEnvironment::Production),
            ai_api_key: lookup("AI_API_KEY").unwrap_or_else(|| {
                warn!("AI_API_KEY not set, appointment suggestions will be unavailable");
                String::new()
            }),
            ai_base_url: lookup("AI_BASE_URL").unwrap_or_else(|| {
                warn!("AI_BASE_URL not set, using default");
                DEFAULT_AI_BASE_URL.to_string()
            }),
            ai_model: lookup("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            id_strategy: parse_or_default(&lookup, "MEDITRACK_ID_STRATEGY", IdStrategy::Random),
            seed_sample_data: lookup("MEDITRACK_SEED_SAMPLE_DATA")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        };

        if !config.is_ai_configured() {
            warn!("AI collaborator not configured - missing AI_API_KEY");
        }

        config
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.ai_api_key.is_empty() && !self.ai_base_url.is_empty()
    }

    pub fn is_development(&self) -> bool {
        self.environment == AppEnvironment::Development
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = String> + fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e: String| {
            warn!("{}: {}, using {:?}", key, e, default);
            default
        }),
        None => default,
    }
}
