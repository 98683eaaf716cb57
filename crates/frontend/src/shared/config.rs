//! Frontend configuration.
//!
//! Defaults are embedded in the bundle. A deployment can override them with a
//! TOML block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/toml">
//! [api]
//! base_url = "https://api.institute.example"
//! </script>
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;

use contracts::shared::localized::Locale;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub i18n: I18nConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API origin. Empty means "page host on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct I18nConfig {
    pub default_locale: String,
    pub supported: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub toast_success_ms: u32,
    pub toast_error_ms: u32,
    pub log_level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
prefix = "/api"

[i18n]
default_locale = "en"
supported = ["en", "ar"]

[ui]
toast_success_ms = 3000
toast_error_ms = 6000
log_level = "debug"
"#;

const CONFIG_ELEMENT_ID: &str = "app-config";

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Process-wide configuration, loaded on first use.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Load configuration
///
/// Search order:
/// 1. `<script id="app-config">` block in the host page
/// 2. Falls back to the embedded default config
fn load_config() -> AppConfig {
    if let Some(source) = page_config_block() {
        match parse_config(&source) {
            Ok(config) => {
                log::info!("Loaded config from #{CONFIG_ELEMENT_ID}");
                return config;
            }
            Err(e) => log::error!("Invalid #{CONFIG_ELEMENT_ID} block, using defaults: {e}"),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid: {e}");
            AppConfig::builtin()
        }
    }
}

fn page_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

impl AppConfig {
    fn builtin() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
                prefix: "/api".into(),
            },
            i18n: I18nConfig {
                default_locale: "en".into(),
                supported: vec!["en".into(), "ar".into()],
            },
            ui: UiConfig {
                toast_success_ms: 3000,
                toast_error_ms: 6000,
                log_level: "debug".into(),
            },
        }
    }

    /// Default locale, `en` when the configured code is unknown.
    pub fn default_locale(&self) -> Locale {
        Locale::from_code(&self.i18n.default_locale).unwrap_or_default()
    }

    /// Resolve a locale code from the URL against the supported set.
    pub fn locale_for(&self, code: &str) -> Locale {
        let supported = self.i18n.supported.iter().any(|s| s.eq_ignore_ascii_case(code));
        match Locale::from_code(code) {
            Some(locale) if supported => locale,
            _ => self.default_locale(),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.ui.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Get the base URL for API requests
///
/// Uses `api.base_url` when set, otherwise the page's protocol and host on
/// `api.port`. Empty string if window is not available.
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a resource path such as `/events/42`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), &config().api.prefix, path)
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let path = path.trim_start_matches('/');
    match prefix.is_empty() {
        true => format!("{}/{}", base, path),
        false => format!("{}/{}/{}", base, prefix, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.i18n.supported, vec!["en", "ar"]);
        assert_eq!(config, AppConfig::builtin());
    }

    #[test]
    fn test_override_block() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.example.org"
            port = 443
            prefix = "v1"

            [i18n]
            default_locale = "ar"
            supported = ["ar"]

            [ui]
            toast_success_ms = 1000
            toast_error_ms = 2000
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_locale(), Locale::Ar);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.locale_for("en"), Locale::Ar);
    }

    #[test]
    fn test_locale_for_falls_back_to_default() {
        let config = AppConfig::builtin();
        assert_eq!(config.locale_for("ar"), Locale::Ar);
        assert_eq!(config.locale_for("fr"), Locale::En);
        assert_eq!(config.locale_for(""), Locale::En);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "/api", "/events"), "http://h:3000/api/events");
        assert_eq!(join_url("http://h", "", "events/1"), "http://h/events/1");
        assert_eq!(join_url("http://h", "api/", "/users"), "http://h/api/users");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nport = 1\nprefix = \"\"").is_err());
    }
}
