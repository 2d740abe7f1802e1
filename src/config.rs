use crate::api::endpoints::DEFAULT_BASE_URL;
use crate::error::AppError;
use std::env;

/// Client configuration. Owns the API key; there is no process-wide copy.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::ConfigError("base URL is empty".to_string()));
        }

        Ok(Config {
            api_key: None,
            base_url,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Reads `TRN_API_KEY` and `PUBG_TRACKER_BASE_URL`, honouring a `.env` file.
    /// A missing key is fine here; it is reported when a request needs it.
    /// `base_url` takes precedence over the environment when given.
    pub fn from_env(base_url: Option<String>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_url = match base_url {
            Some(url) => url,
            None => env::var("PUBG_TRACKER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };
        let mut config = Config::new(base_url)?;
        config.api_key = env::var("TRN_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = Config::new("http://127.0.0.1:1234/").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(Config::new("/"), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn default_points_at_public_api_without_key() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pubgtracker.com/api");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn explicit_base_url_overrides_environment() {
        env::set_var("PUBG_TRACKER_BASE_URL", "");
        assert!(matches!(Config::from_env(None), Err(AppError::ConfigError(_))));

        let config = Config::from_env(Some("http://127.0.0.1:8080".to_string())).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        env::remove_var("PUBG_TRACKER_BASE_URL");
    }

    #[test]
    fn with_api_key_sets_key() {
        let config = Config::default().with_api_key("abc-123");
        assert_eq!(config.api_key.as_deref(), Some("abc-123"));
    }
}
