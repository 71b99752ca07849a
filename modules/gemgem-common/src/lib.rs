pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod nav;
pub mod resolver;
pub mod route;
pub mod shell;

pub use config::{Config, StoreLinks};
pub use error::SiteError;
pub use i18n::translate;
pub use locale::{Locale, LocaleSet};
pub use nav::{NavItem, Page, NAV_ITEMS};
pub use resolver::LocaleResolver;
pub use route::RoutePath;
pub use shell::{LocaleChoice, NavLink, Navigation, NavigationShell, Platform, ScrollToTop, Toggle};
