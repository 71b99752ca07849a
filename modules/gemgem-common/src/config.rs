use std::env;
use std::path::PathBuf;

use crate::error::SiteError;
use crate::locale::{Locale, LocaleSet};
use crate::resolver::LocaleResolver;

/// Both stores currently point at the pre-launch survey.
const SURVEY_URL: &str = "https://walla.my/survey/ejueqpRkF9kQt9eA8JU9";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLinks {
    pub ios: String,
    pub android: String,
}

impl Default for StoreLinks {
    fn default() -> Self {
        Self {
            ios: SURVEY_URL.to_string(),
            android: SURVEY_URL.to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,
    /// Root of the static asset tree; `images/` under it is served at `/images`.
    pub static_dir: PathBuf,

    // Locales
    pub locales: LocaleSet,
    pub strict_locales: bool,

    // Outbound links
    pub store_links: StoreLinks,
}

impl Config {
    pub fn web_from_env() -> Result<Self, SiteError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let web_port: u16 = match lookup("WEB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| SiteError::Config(format!("WEB_PORT must be a number, got '{raw}'")))?,
            None => 3000,
        };

        let supported = match lookup("SUPPORTED_LOCALES") {
            Some(raw) => parse_locale_list(&raw)?,
            None => LocaleSet::default().supported().to_vec(),
        };
        let default = match lookup("DEFAULT_LOCALE") {
            Some(raw) => parse_locale("DEFAULT_LOCALE", raw.trim())?,
            None => Locale::Ko,
        };

        let strict_locales = match lookup("STRICT_LOCALES") {
            Some(raw) => parse_flag("STRICT_LOCALES", &raw)?,
            None => false,
        };

        let defaults = StoreLinks::default();
        Ok(Self {
            web_host: lookup("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            locales: LocaleSet::new(supported, default)?,
            strict_locales,
            store_links: StoreLinks {
                ios: lookup("IOS_STORE_URL").unwrap_or(defaults.ios),
                android: lookup("ANDROID_STORE_URL").unwrap_or(defaults.android),
            },
        })
    }

    pub fn resolver(&self) -> LocaleResolver {
        LocaleResolver::new(self.locales.clone()).strict(self.strict_locales)
    }
}

fn parse_locale(key: &str, raw: &str) -> Result<Locale, SiteError> {
    raw.parse()
        .map_err(|_| SiteError::Config(format!("{key}: unknown locale '{raw}'")))
}

fn parse_locale_list(raw: &str) -> Result<Vec<Locale>, SiteError> {
    let locales = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|code| parse_locale("SUPPORTED_LOCALES", code))
        .collect::<Result<Vec<_>, _>>()?;
    if locales.is_empty() {
        return Err(SiteError::Config("SUPPORTED_LOCALES is empty".to_string()));
    }
    Ok(locales)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, SiteError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SiteError::Config(format!("{key} must be a boolean, got '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, SiteError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.web_host, "0.0.0.0");
        assert_eq!(config.web_port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.locales, LocaleSet::default());
        assert!(!config.strict_locales);
        assert_eq!(config.store_links, StoreLinks::default());
    }

    #[test]
    fn enables_japanese() {
        let config = config(&[("SUPPORTED_LOCALES", "ko, en, jp"), ("STRICT_LOCALES", "true")]).unwrap();
        assert_eq!(config.locales.supported(), &[Locale::Ko, Locale::En, Locale::Jp]);
        assert!(config.strict_locales);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(matches!(config(&[("WEB_PORT", "http")]), Err(SiteError::Config(_))));
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = config(&[("SUPPORTED_LOCALES", "ko,fr")]).unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn rejects_default_outside_supported() {
        let err = config(&[("SUPPORTED_LOCALES", "en"), ("DEFAULT_LOCALE", "ko")]).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn rejects_empty_locale_list() {
        assert!(config(&[("SUPPORTED_LOCALES", " , ")]).is_err());
    }

    #[test]
    fn store_links_override() {
        let config = config(&[("IOS_STORE_URL", "https://apps.apple.com/app/id1")]).unwrap();
        assert_eq!(config.store_links.ios, "https://apps.apple.com/app/id1");
        assert_eq!(config.store_links.android, SURVEY_URL);
    }
}
