use anyhow::{Context, Result};

pub const DEFAULT_RECOMMENDER_URL: &str = "http://localhost:5000/recommend_jobs";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub recommender_url: String,
    /// Outbound call timeout. Unset means the client never times out.
    pub recommender_timeout_secs: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            recommender_url: env_or("RECOMMENDER_URL", DEFAULT_RECOMMENDER_URL),
            recommender_timeout_secs: lookup("RECOMMENDER_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RECOMMENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.recommender_url, DEFAULT_RECOMMENDER_URL);
        assert_eq!(config.recommender_timeout_secs, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_timeout_only_when_set() {
        let config = config_from(&[("RECOMMENDER_TIMEOUT_SECS", "15")]).unwrap();
        assert_eq!(config.recommender_timeout_secs, Some(15));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config_from(&[("RECOMMENDER_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("PORT", "99999")]).is_err());
    }
}
