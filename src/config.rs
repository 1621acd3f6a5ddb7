use tracing::info;

/// Catalog host used when nothing overrides it
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

/// Application configuration
/// In debug builds: loads from .env file
/// In release builds: built-in defaults
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the product catalog API (no trailing slash)
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using defaults");
            }

            Self::from_env()
        }

        #[cfg(not(debug_assertions))]
        {
            info!("Release mode - using built-in catalog endpoint");
            Self::default()
        }
    }

    /// Load configuration from environment variables (dev mode)
    #[cfg(debug_assertions)]
    fn from_env() -> Self {
        let config = Self::from_base_url(std::env::var("SHOWCASE_API_BASE_URL").ok());
        info!("Catalog API base URL: {}", config.api_base_url);
        config
    }

    /// Build a config from an optional override, falling back to the default host
    pub fn from_base_url(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self {
                api_base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_dummyjson() {
        assert_eq!(Config::default().api_base_url, "https://dummyjson.com");
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = Config::from_base_url(Some("http://127.0.0.1:8080/".to_string()));
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(Config::from_base_url(Some("   ".to_string())), Config::default());
        assert_eq!(Config::from_base_url(None), Config::default());
    }

    fn assert_root_context<T: Clone + Send + Sync + 'static>() {}

    #[test]
    fn test_config_can_be_launch_context() {
        // LaunchBuilder::with_context requires these bounds
        assert_root_context::<Config>();
    }
}
