use crate::modules::estimates::core::estimate::{DEFAULT_VALIDITY_DAYS, default_valid_until};
use crate::modules::estimates::core::status::TransitionPolicy;
use anyhow::Context;
use chrono::Utc;

/// Business settings shared by the use case handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateSettings {
    /// Caller identity used when a request carries no `x-user-id` header.
    pub default_user_id: String,
    pub validity_days: i64,
    pub transition_policy: TransitionPolicy,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            default_user_id: "anonymous".to_string(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            transition_policy: TransitionPolicy::Permissive,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// | Env Var                  | Default                 |
/// |--------------------------|-------------------------|
/// | `HOST`                   | `0.0.0.0`               |
/// | `PORT`                   | `8080`                  |
/// | `CORS_ORIGINS`           | `http://localhost:3000` |
/// | `DEFAULT_USER_ID`        | `anonymous`             |
/// | `ESTIMATE_VALIDITY_DAYS` | `30`                    |
/// | `ESTIMATE_STATUS_POLICY` | `permissive`            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub estimates: EstimateSettings,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = EstimateSettings::default();

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got '{raw}'"))?,
            None => 8080,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let default_user_id = lookup("DEFAULT_USER_ID")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_user_id);

        let validity_days = match lookup("ESTIMATE_VALIDITY_DAYS") {
            Some(raw) => {
                let days = raw.trim().parse::<i64>().with_context(|| {
                    format!("ESTIMATE_VALIDITY_DAYS must be an integer, got '{raw}'")
                })?;
                anyhow::ensure!(days > 0, "ESTIMATE_VALIDITY_DAYS must be positive, got {days}");
                default_valid_until(Utc::now().timestamp_millis(), days).with_context(|| {
                    format!("ESTIMATE_VALIDITY_DAYS is out of range, got {days}")
                })?;
                days
            }
            None => defaults.validity_days,
        };

        let transition_policy = match lookup("ESTIMATE_STATUS_POLICY") {
            Some(raw) => raw.parse::<TransitionPolicy>()?,
            None => defaults.transition_policy,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            estimates: EstimateSettings {
                default_user_id,
                validity_days,
                transition_policy,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
