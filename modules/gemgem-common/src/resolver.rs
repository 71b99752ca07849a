use tracing::{debug, warn};

use crate::locale::{Locale, LocaleSet};
use crate::route::RoutePath;

/// Derives the active locale from a route and builds localized routes.
///
/// Every operation is pure and total: a missing or unsupported locale
/// segment falls back to the default locale instead of failing. With
/// `strict` enabled the fallback is still applied but logged.
#[derive(Debug, Clone, Default)]
pub struct LocaleResolver {
    locales: LocaleSet,
    strict: bool,
}

impl LocaleResolver {
    pub fn new(locales: LocaleSet) -> Self {
        Self {
            locales,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn default_locale(&self) -> Locale {
        self.locales.default_locale()
    }

    pub fn resolve_locale(&self, path: &RoutePath) -> Locale {
        match path.first() {
            Some(code) => match self.locales.lookup(code) {
                Some(locale) => locale,
                None => {
                    self.report_fallback(code);
                    self.default_locale()
                }
            },
            None => self.default_locale(),
        }
    }

    /// The rewritten route for an unlocalized path, or `None` when the path
    /// already names a supported locale. The bare root is accepted as an
    /// implicit selection of the default locale.
    pub fn needs_redirect(&self, path: &RoutePath) -> Option<RoutePath> {
        if path.is_root() {
            return None;
        }
        if path.first().and_then(|code| self.locales.lookup(code)).is_some() {
            return None;
        }
        if let Some(code) = path.first() {
            self.report_fallback(code);
        }
        let target = self.localize(path, self.default_locale());
        debug!(from = %path.path(), to = %target.path(), "Redirecting unlocalized path");
        Some(target)
    }

    /// Prefix a bare path with the locale code.
    pub fn localize(&self, path: &RoutePath, locale: Locale) -> RoutePath {
        path.with_prefix(locale.code())
    }

    /// Swap the locale segment of an already-localized path.
    pub fn switch_locale(&self, path: &RoutePath, locale: Locale) -> RoutePath {
        path.with_first(locale.code())
    }

    fn report_fallback(&self, code: &str) {
        if self.strict {
            warn!(
                code,
                default = %self.default_locale(),
                "Unsupported locale segment, falling back to default"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_PATHS: &[&str] = &["/", "/gemgem400", "/content", "/for-parents", "/about", "/about/?x=1"];

    fn resolver() -> LocaleResolver {
        LocaleResolver::default()
    }

    fn with_japanese() -> LocaleResolver {
        LocaleResolver::new(
            LocaleSet::new(vec![Locale::Ko, Locale::En, Locale::Jp], Locale::Ko).unwrap(),
        )
    }

    #[test]
    fn localize_then_resolve_is_identity() {
        let r = with_japanese();
        for locale in Locale::ALL {
            for bare in BARE_PATHS {
                let localized = r.localize(&RoutePath::parse(bare), locale);
                assert_eq!(r.resolve_locale(&localized), locale, "{localized}");
            }
        }
    }

    #[test]
    fn unsupported_codes_resolve_to_default() {
        let r = resolver();
        for code in ["jp", "fr", "KO", "english", "gemgem400"] {
            for bare in BARE_PATHS {
                let path = RoutePath::parse(&format!("/{code}{bare}"));
                assert_eq!(r.resolve_locale(&path), Locale::Ko, "{path}");
            }
        }
    }

    #[test]
    fn root_resolves_to_default_without_redirect() {
        let r = resolver();
        let root = RoutePath::parse("/");
        assert_eq!(r.resolve_locale(&root), Locale::Ko);
        assert_eq!(r.needs_redirect(&root), None);
        assert_eq!(r.needs_redirect(&RoutePath::parse("/?utm=x")), None);
    }

    #[test]
    fn bare_page_gets_default_prefix() {
        let r = resolver();
        let target = r.needs_redirect(&RoutePath::parse("/about")).unwrap();
        assert_eq!(target.to_string(), "/ko/about");
    }

    #[test]
    fn redirect_keeps_slash_and_query() {
        let r = resolver();
        let target = r.needs_redirect(&RoutePath::parse("/content/?page=2")).unwrap();
        assert_eq!(target.to_string(), "/ko/content/?page=2");
    }

    #[test]
    fn unsupported_prefix_is_kept_behind_default() {
        let r = resolver();
        let target = r.needs_redirect(&RoutePath::parse("/fr/about")).unwrap();
        assert_eq!(target.to_string(), "/ko/fr/about");
    }

    #[test]
    fn localized_paths_need_no_redirect() {
        let r = resolver();
        assert_eq!(r.needs_redirect(&RoutePath::parse("/en")), None);
        assert_eq!(r.needs_redirect(&RoutePath::parse("/ko/for-parents")), None);
    }

    #[test]
    fn localize_root_has_no_trailing_slash() {
        assert_eq!(resolver().localize(&RoutePath::parse("/"), Locale::En).to_string(), "/en");
    }

    #[test]
    fn switch_replaces_first_segment() {
        let r = resolver();
        let switched = r.switch_locale(&RoutePath::parse("/ko/content"), Locale::En);
        assert_eq!(switched.to_string(), "/en/content");
    }

    #[test]
    fn switch_keeps_rest_and_query() {
        let r = resolver();
        let switched = r.switch_locale(&RoutePath::parse("/en/about/team/?tab=2"), Locale::Ko);
        assert_eq!(switched.to_string(), "/ko/about/team/?tab=2");
    }

    #[test]
    fn switch_on_root_prepends() {
        let switched = resolver().switch_locale(&RoutePath::parse("/"), Locale::En);
        assert_eq!(switched.to_string(), "/en");
    }

    #[test]
    fn custom_default_locale() {
        let r = LocaleResolver::new(LocaleSet::new(vec![Locale::Ko, Locale::En], Locale::En).unwrap())
            .strict(true);
        assert_eq!(r.resolve_locale(&RoutePath::parse("/xx/about")), Locale::En);
        assert_eq!(
            r.needs_redirect(&RoutePath::parse("/about")).unwrap().to_string(),
            "/en/about"
        );
    }

    /// Collects formatted log lines so tests can assert on emitted events.
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logs_while(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn strict_mode_warns_on_unsupported_segment() {
        let strict = resolver().strict(true);
        let logs = logs_while(|| {
            assert_eq!(strict.resolve_locale(&RoutePath::parse("/fr/about")), Locale::Ko);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Unsupported locale segment, falling back to default"));
        assert!(logs.contains("code=") && logs.contains("fr"));
    }

    #[test]
    fn lenient_mode_falls_back_silently() {
        let lenient = resolver();
        let logs = logs_while(|| {
            assert_eq!(lenient.resolve_locale(&RoutePath::parse("/fr/about")), Locale::Ko);
            assert!(lenient.needs_redirect(&RoutePath::parse("/fr/about")).is_some());
        });
        assert!(!logs.contains("Unsupported locale segment"));
    }
}
