use chrono_tz::Tz;
use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Public origin used for absolute links (sitemap, calendar export).
    pub site_url: Url,
    pub studio_name: String,
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
    /// Studio timezone, e.g. `America/Chicago`.
    pub timezone: Tz,
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
    pub stagger_ms: u64,
    /// Restart the stagger every this many items; `0` never restarts.
    pub stagger_wrap: Option<usize>,
    pub reveal_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_url: Url::parse(DEFAULT_SITE_URL).expect("default site url parses"),
            studio_name: DEFAULT_STUDIO_NAME.to_string(),
            debug: false,
            enable_swagger: true,
            port: 8080,
            timezone: chrono_tz::America::Chicago,
            submit_delay_ms: 1500,
            reset_delay_ms: 3000,
            stagger_ms: 100,
            stagger_wrap: Some(6),
            reveal_duration_ms: 600,
        }
    }
}

const DEFAULT_SITE_URL: &str = "https://www.riverbenddance.org";
const DEFAULT_STUDIO_NAME: &str = "Riverbend Community Dance";

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_app_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with("APP_") {
                // SAFETY: tests touching the environment are serialized.
                unsafe { std::env::remove_var(key) };
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_empty() {
        clear_app_env();
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.submit_delay_ms, 1500);
        assert_eq!(settings.reset_delay_ms, 3000);
        assert_eq!(settings.stagger_wrap, Some(6));
        assert_eq!(settings.timezone, chrono_tz::America::Chicago);
        assert_eq!(settings.site_url.as_str(), "https://www.riverbenddance.org/");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_app_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("APP_PORT", "9090");
            std::env::set_var("APP_TIMEZONE", "Europe/Warsaw");
            std::env::set_var("APP_SUBMIT_DELAY_MS", "10");
        }
        let settings = Settings::from_env().unwrap();
        clear_app_env();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.timezone, chrono_tz::Europe::Warsaw);
        assert_eq!(settings.submit_delay_ms, 10);
    }

    #[test]
    #[serial]
    fn test_defaults_match_default_impl() {
        clear_app_env();
        let from_env = Settings::from_env().unwrap();
        let default = Settings::default();
        assert_eq!(from_env.site_url, default.site_url);
        assert_eq!(from_env.studio_name, default.studio_name);
        assert_eq!(from_env.enable_swagger, default.enable_swagger);
        assert_eq!(from_env.stagger_ms, default.stagger_ms);
        assert_eq!(from_env.reveal_duration_ms, default.reveal_duration_ms);
    }

    #[test]
    #[serial]
    fn test_stagger_wrap_zero_never_restarts() {
        clear_app_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::set_var("APP_STAGGER_WRAP", "0") };
        let settings = Settings::from_env().unwrap();
        clear_app_env();
        assert_eq!(settings.stagger_wrap, Some(0));
        let site = crate::pages::Site::from_settings(&settings);
        assert_eq!(site.stagger.delay(7), std::time::Duration::from_millis(700));
    }

    #[test]
    #[serial]
    fn test_rejects_unknown_timezone() {
        clear_app_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::set_var("APP_TIMEZONE", "Mars/Olympus") };
        let result = Settings::from_env();
        clear_app_env();
        assert!(result.is_err());
    }
}
