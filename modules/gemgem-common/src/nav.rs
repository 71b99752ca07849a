use crate::route::RoutePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    GemGem400,
    Content,
    ForParents,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::GemGem400,
        Page::Content,
        Page::ForParents,
        Page::About,
    ];

    /// The segment after the locale; empty for the home page.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::GemGem400 => "gemgem400",
            Page::Content => "content",
            Page::ForParents => "for-parents",
            Page::About => "about",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Page addressed by a localized route: `/<locale>` is home,
    /// `/<locale>/<slug>` is the page with that slug. Deeper paths match nothing.
    pub fn from_localized(route: &RoutePath) -> Option<Page> {
        match route.segments() {
            [_] => Some(Page::Home),
            [_, slug] => Page::from_slug(slug),
            _ => None,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "page.home.title",
            Page::GemGem400 => "page.gemgem400.title",
            Page::Content => "page.content.title",
            Page::ForParents => "page.for_parents.title",
            Page::About => "page.about.title",
        }
    }

    pub fn body_key(&self) -> &'static str {
        match self {
            Page::Home => "page.home.body",
            Page::GemGem400 => "page.gemgem400.body",
            Page::Content => "page.content.body",
            Page::ForParents => "page.for_parents.body",
            Page::About => "page.about.body",
        }
    }
}

pub struct NavItem {
    pub page: Page,
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { page: Page::Home, path: "/", label: "Home" },
    NavItem { page: Page::GemGem400, path: "/gemgem400", label: "GemGem400" },
    NavItem { page: Page::Content, path: "/content", label: "Content" },
    NavItem { page: Page::ForParents, path: "/for-parents", label: "For parents" },
    NavItem { page: Page::About, path: "/about", label: "About" },
];
