use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::StoreLinks;
use crate::i18n;
use crate::locale::Locale;
use crate::nav::{Page, NAV_ITEMS};
use crate::resolver::LocaleResolver;
use crate::route::RoutePath;

static IOS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)iphone|ipad|ipod").unwrap());
static ANDROID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)android").unwrap());

/// Open/closed state of a header widget. Closed is the resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

impl Toggle {
    pub fn toggled(self) -> Self {
        match self {
            Toggle::Closed => Toggle::Open,
            Toggle::Open => Toggle::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Toggle::Open
    }
}

/// Client platform, detected once from the user agent. Only used to pick an
/// app-store link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    /// Inconclusive or absent user agents count as desktop.
    pub fn detect(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if IOS_RE.is_match(ua) => Platform::Ios,
            Some(ua) if ANDROID_RE.is_match(ua) => Platform::Android,
            _ => Platform::Desktop,
        }
    }

    pub fn is_mobile(self) -> bool {
        !matches!(self, Platform::Desktop)
    }
}

/// A navigation request handed to the routing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub to: RoutePath,
    pub scroll_to_top: bool,
}

/// Emitted on every route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ScrollToTop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChoice {
    pub locale: Locale,
    pub href: String,
    pub active: bool,
}

/// State behind the persistent site header.
///
/// The active locale is always recomputed from the current route. The
/// mobile menu and the locale dropdown are independent toggles.
#[derive(Debug, Clone)]
pub struct NavigationShell<'r> {
    resolver: &'r LocaleResolver,
    route: RoutePath,
    locale: Locale,
    platform: Platform,
    menu: Toggle,
    locale_dropdown: Toggle,
}

impl<'r> NavigationShell<'r> {
    pub fn new(resolver: &'r LocaleResolver, route: RoutePath, user_agent: Option<&str>) -> Self {
        let platform = Platform::detect(user_agent);
        debug!(?platform, "Detected client platform");
        let locale = resolver.resolve_locale(&route);
        Self {
            resolver,
            route,
            locale,
            platform,
            menu: Toggle::Closed,
            locale_dropdown: Toggle::Closed,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn route(&self) -> &RoutePath {
        &self.route
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn menu(&self) -> Toggle {
        self.menu
    }

    pub fn locale_dropdown(&self) -> Toggle {
        self.locale_dropdown
    }

    pub fn logo(&self) -> &'static str {
        self.locale.logo()
    }

    /// Look up a string in the active locale, falling back to the default locale.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        i18n::translate(self.locale, self.resolver.default_locale(), key)
    }

    pub fn store_url<'a>(&self, links: &'a StoreLinks) -> &'a str {
        match self.platform {
            Platform::Ios => &links.ios,
            Platform::Android | Platform::Desktop => &links.android,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    pub fn dismiss_menu(&mut self) {
        self.menu = Toggle::Closed;
    }

    pub fn toggle_locale_dropdown(&mut self) {
        self.locale_dropdown = self.locale_dropdown.toggled();
    }

    pub fn dismiss_locale_dropdown(&mut self) {
        self.locale_dropdown = Toggle::Closed;
    }

    pub fn on_route_change(&mut self, route: RoutePath) -> ScrollToTop {
        self.locale = self.resolver.resolve_locale(&route);
        self.route = route;
        ScrollToTop
    }

    pub fn on_select_locale(&mut self, locale: Locale) -> Navigation {
        let to = self.resolver.switch_locale(&self.route, locale);
        self.dismiss_locale_dropdown();
        Navigation {
            to,
            scroll_to_top: false,
        }
    }

    /// Follow a navigation item under the active locale.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let to = self.resolver.localize(&RoutePath::parse(path), self.locale);
        self.dismiss_menu();
        Navigation {
            to,
            scroll_to_top: true,
        }
    }

    pub fn is_active(&self, path: &str) -> bool {
        let localized = self.resolver.localize(&RoutePath::parse(path), self.locale);
        localized.same_route(&self.effective_route())
    }

    pub fn links(&self) -> Vec<NavLink> {
        NAV_ITEMS
            .iter()
            .map(|item| NavLink {
                page: item.page,
                label: item.label,
                href: self
                    .resolver
                    .localize(&RoutePath::parse(item.path), self.locale)
                    .to_string(),
                active: self.is_active(item.path),
            })
            .collect()
    }

    /// Every supported locale with the route it switches to.
    pub fn locale_choices(&self) -> Vec<LocaleChoice> {
        self.resolver
            .locales()
            .supported()
            .iter()
            .map(|&locale| LocaleChoice {
                locale,
                href: self.resolver.switch_locale(&self.route, locale).to_string(),
                active: locale == self.locale,
            })
            .collect()
    }

    /// Locales offered by the desktop dropdown: all but the active one.
    pub fn dropdown_choices(&self) -> Vec<LocaleChoice> {
        self.locale_choices()
            .into_iter()
            .filter(|c| !c.active)
            .collect()
    }

    // The bare root stands for the home page of the default locale.
    fn effective_route(&self) -> RoutePath {
        if self.route.is_root() {
            self.resolver.localize(&self.route, self.locale)
        } else {
            self.route.clone()
        }
    }
}
