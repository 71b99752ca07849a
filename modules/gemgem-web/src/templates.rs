use gemgem_common::{NavigationShell, Page};

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("Kakao", "https://pf.kakao.com/_xhXQFG", "/images/nav/kakao.png"),
    ("Instagram", "https://www.instagram.com/gemgem_400", "/images/nav/instagram.png"),
    ("Youtube", "https://youtube.com/@gemgem400", "/images/nav/youtube.png"),
    ("LinkedIn", "https://www.linkedin.com/company/gemgemthera/", "/images/nav/linkedin.png"),
];

/// Render one of the five site pages.
pub fn render_page(shell: &NavigationShell, page: Page, store_url: &str) -> String {
    let content = format!(
        r#"<section class="page page-{slug}">
    <h1>{title}</h1>
    <p>{body}</p>
</section>"#,
        slug = if page.slug().is_empty() { "home" } else { page.slug() },
        title = html_escape(shell.translate(page.title_key())),
        body = html_escape(shell.translate(page.body_key())),
    );

    build_page(shell, store_url, &content)
}

/// Render the not-found page for a localized path with no matching page.
pub fn render_not_found(shell: &NavigationShell, store_url: &str) -> String {
    let home = shell
        .links()
        .into_iter()
        .find(|l| l.page == Page::Home)
        .map(|l| l.href)
        .unwrap_or_else(|| "/".to_string());
    let content = format!(
        r#"<section class="page page-not-found">
    <h1>{title}</h1>
    <p>{body}</p>
    <a href="{home}">{back}</a>
</section>"#,
        title = html_escape(shell.translate("not_found.title")),
        body = html_escape(shell.translate("not_found.body")),
        home = html_escape(&home),
        back = html_escape(shell.translate("not_found.home")),
    );

    build_page(shell, store_url, &content)
}

// --- Navigation shell ---

fn render_nav(shell: &NavigationShell, store_url: &str) -> String {
    let locale = shell.locale();
    let links = shell.links();
    let home_href = links
        .iter()
        .find(|l| l.page == Page::Home)
        .map(|l| l.href.as_str())
        .unwrap_or("/");

    let desktop_links: String = links
        .iter()
        .map(|l| {
            let class = if l.active { r#" class="active""# } else { "" };
            format!(
                r#"<li><a href="{}"{class}>{}</a></li>"#,
                html_escape(&l.href),
                html_escape(l.label)
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let dropdown: String = shell
        .dropdown_choices()
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" hreflang="{}">{}</a>"#,
                html_escape(&c.href),
                c.locale.lang_tag(),
                c.locale.label()
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let mobile_locales: String = shell
        .locale_choices()
        .iter()
        .map(|c| {
            let class = if c.active { r#" class="active""# } else { "" };
            format!(
                r#"<a href="{}" hreflang="{}"{class}>{}</a>"#,
                html_escape(&c.href),
                c.locale.lang_tag(),
                c.locale.label()
            )
        })
        .collect::<Vec<_>>()
        .join("<span>|</span>");

    let social: String = SOCIAL_LINKS
        .iter()
        .map(|(name, href, icon)| {
            format!(
                r#"<a href="{href}" target="_blank" rel="noopener noreferrer"><img src="{icon}" alt="{name}"></a>"#
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let open_attr = |open: bool| if open { " open" } else { "" };

    format!(
        r#"<nav class="navbar">
    <a class="logo" href="{home}"><img src="{logo}" alt="GemGem400 Logo"></a>
    <ul class="nav-links">{desktop_links}</ul>
    <div class="nav-actions">
        <a class="start-btn" href="{store}" target="_blank" rel="noopener">{start}</a>
        <details class="locale-dropdown"{dropdown_open}>
            <summary>{label}</summary>
            <div class="locale-options">{dropdown}</div>
        </details>
    </div>
    <details class="mobile-menu"{menu_open}>
        <summary aria-label="Menu">&#9776;</summary>
        <div class="mobile-panel">
            <img src="{logo}" alt="Logo">
            <div class="mobile-locales">{mobile_locales}</div>
            <ul class="mobile-links">{desktop_links}</ul>
            <div class="social">{social}</div>
            <a class="download-btn" href="{store}" target="_blank" rel="noopener">{download}</a>
        </div>
    </details>
</nav>"#,
        home = html_escape(home_href),
        logo = shell.logo(),
        store = html_escape(store_url),
        start = html_escape(shell.translate("nav.start")),
        download = html_escape(shell.translate("nav.download")),
        label = locale.label(),
        dropdown_open = open_attr(shell.locale_dropdown().is_open()),
        menu_open = open_attr(shell.menu().is_open()),
    )
}

// --- Helpers ---

fn build_page(shell: &NavigationShell, store_url: &str, content: &str) -> String {
    let locale = shell.locale();
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="{favicon}">
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:Pretendard,-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;color:#1a1a1a;background:#fff;padding-top:64px;}}
.navbar{{position:fixed;top:0;left:0;width:100%;height:64px;background:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);display:flex;align-items:center;padding:0 32px;z-index:50;}}
.logo img{{height:40px;}}
.nav-links{{display:flex;gap:32px;list-style:none;margin:0 auto;}}
.nav-links a,.mobile-links a{{color:#374151;text-decoration:none;}}
.nav-links a.active,.mobile-links a.active,.mobile-locales a.active{{color:#1b8fd9;}}
.nav-actions{{display:flex;gap:24px;align-items:center;}}
.start-btn,.download-btn{{background:#1b8fd9;color:#fff;padding:10px 24px;border-radius:4px;text-decoration:none;font-size:14px;}}
.locale-dropdown summary{{background:#ddf4ff;padding:10px 18px;border-radius:4px;cursor:pointer;}}
.locale-options a{{display:block;padding:10px;text-align:center;background:#ddf4ff;}}
.mobile-menu{{display:none;}}
.page{{max-width:1440px;margin:0 auto;padding:48px 32px;}}
@media (max-width:1023px){{.nav-links,.nav-actions{{display:none;}}.mobile-menu{{display:block;margin-left:auto;}}}}
</style>
</head>
<body>
{nav}
<main>
{content}
</main>
</body>
</html>"#,
        lang = locale.lang_tag(),
        title = html_escape(locale.document_title()),
        favicon = html_escape(locale.favicon()),
        nav = render_nav(shell, store_url),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
