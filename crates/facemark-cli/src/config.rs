use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set (export it or add it to .env)")]
    Missing(&'static str),
}

/// Detection service settings, loaded from environment variables.
pub struct Config {
    /// Subscription key sent with every detection request.
    pub api_key: String,
    /// Full URL of the detection endpoint, query string included.
    pub endpoint: String,
}

impl Config {
    /// Load `API_KEY` and `ENDPOINT` from the process environment.
    ///
    /// Call after `.env` has been merged in; both variables are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            api_key: required("API_KEY")?,
            endpoint: required("ENDPOINT")?,
        })
    }
}
