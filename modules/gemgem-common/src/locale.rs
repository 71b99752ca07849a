use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// A language the site can be displayed in. The code doubles as the first
/// path segment of every localized route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    Ko,
    En,
    /// Partial translation; missing strings fall back to the default locale.
    Jp,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ko, Locale::En, Locale::Jp];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Jp => "jp",
        }
    }

    /// BCP 47 language tag for `lang`, `hreflang` and `Content-Language`.
    /// Differs from the route code for Japanese.
    pub fn lang_tag(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Jp => "ja",
        }
    }

    /// Short label shown on the locale switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Ko => "KR",
            Locale::En => "EN",
            Locale::Jp => "JP",
        }
    }

    pub fn logo(&self) -> &'static str {
        match self {
            Locale::Ko => "/images/gemgem-logo-ko.png",
            Locale::En | Locale::Jp => "/images/gemgem-logo.png",
        }
    }

    pub fn favicon(&self) -> &'static str {
        match self {
            Locale::Ko => "/images/favicon/GemGem400_logo_KR/favicon.ico",
            Locale::En | Locale::Jp => "/images/favicon/GemGem400_logo_EN/favicon.ico",
        }
    }

    pub fn document_title(&self) -> &'static str {
        match self {
            Locale::Ko => "잼잼400 - 즐거운 재활 운동 게임",
            Locale::En | Locale::Jp => "GemGem400 - Fun Rehabilitation Exercise Game",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    /// Exact, case-sensitive match on the locale code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| SiteError::UnsupportedLocale(s.to_string()))
    }
}

/// The locales a deployment serves, plus the one used when a path names none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    supported: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    pub fn new(supported: Vec<Locale>, default: Locale) -> Result<Self, SiteError> {
        if !supported.contains(&default) {
            return Err(SiteError::Config(format!(
                "default locale '{default}' is not in the supported set"
            )));
        }
        let mut deduped: Vec<Locale> = Vec::with_capacity(supported.len());
        for locale in supported {
            if !deduped.contains(&locale) {
                deduped.push(locale);
            }
        }
        Ok(Self {
            supported: deduped,
            default,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    /// Look up a path segment among the supported codes.
    pub fn lookup(&self, code: &str) -> Option<Locale> {
        self.supported.iter().copied().find(|l| l.code() == code)
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            supported: vec![Locale::Ko, Locale::En],
            default: Locale::Ko,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_codes() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Ko);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("jp".parse::<Locale>().unwrap(), Locale::Jp);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(matches!(
            "KO".parse::<Locale>(),
            Err(SiteError::UnsupportedLocale(code)) if code == "KO"
        ));
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Jp).unwrap(), "\"jp\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }

    #[test]
    fn default_set_is_korean_and_english() {
        let set = LocaleSet::default();
        assert_eq!(set.supported(), &[Locale::Ko, Locale::En]);
        assert_eq!(set.default_locale(), Locale::Ko);
        assert_eq!(set.lookup("jp"), None);
    }

    #[test]
    fn default_must_be_supported() {
        let err = LocaleSet::new(vec![Locale::En], Locale::Ko).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn duplicates_are_dropped() {
        let set = LocaleSet::new(vec![Locale::Ko, Locale::Jp, Locale::Ko], Locale::Ko).unwrap();
        assert_eq!(set.supported(), &[Locale::Ko, Locale::Jp]);
    }

    #[test]
    fn japanese_tag_differs_from_route_code() {
        assert_eq!(Locale::Jp.code(), "jp");
        assert_eq!(Locale::Jp.lang_tag(), "ja");
        assert_eq!(Locale::Ko.lang_tag(), Locale::Ko.code());
    }

    #[test]
    fn korean_has_its_own_logo() {
        assert_ne!(Locale::Ko.logo(), Locale::En.logo());
        assert_eq!(Locale::En.logo(), Locale::Jp.logo());
    }
}
