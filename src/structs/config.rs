use serde::{Deserialize, Serialize};

/// Base URL used when neither the client options nor the app config provide one.
pub const DEFAULT_BASE_URL: &str = "https://your-backend-url.com/api";

pub const DEFAULT_APP_NAME: &str = "Dribbling";
pub const DEFAULT_CITY: &str = "Пенджикент";
pub const DEFAULT_LAT: f64 = 39.4952;
pub const DEFAULT_LON: f64 = 67.6093;

/// App-wide settings shared by the mini app screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend location. `None` lets the client use [`DEFAULT_BASE_URL`].
    pub api_base_url: Option<String>,
    pub app_name: String,
    /// City preselected when creating or filtering matches.
    pub default_city: String,
    pub default_lat: f64,
    pub default_lon: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Some(DEFAULT_BASE_URL.to_string()),
            app_name: DEFAULT_APP_NAME.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            default_lat: DEFAULT_LAT,
            default_lon: DEFAULT_LON,
        }
    }
}

/// Picks the base URL: explicit value, then the app config, then [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(explicit: Option<&str>, config: Option<&AppConfig>) -> String {
    explicit
        .filter(|url| !url.is_empty())
        .or_else(|| {
            config
                .and_then(|config| config.api_base_url.as_deref())
                .filter(|url| !url.is_empty())
        })
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_wins() {
        let config = AppConfig {
            api_base_url: Some("http://localhost:8000/api".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_base_url(Some("https://api.example.com"), Some(&config)),
            "https://api.example.com"
        );
    }

    #[test]
    fn config_then_default() {
        let config = AppConfig {
            api_base_url: Some("http://localhost:8000/api".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_base_url(None, Some(&config)),
            "http://localhost:8000/api"
        );

        let without_url = AppConfig {
            api_base_url: None,
            ..AppConfig::default()
        };
        assert_eq!(resolve_base_url(None, Some(&without_url)), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }
}
