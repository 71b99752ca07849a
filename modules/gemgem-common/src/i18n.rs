//! Translation lookup as a pure function of (locale, key).
//!
//! The catalog only covers strings rendered by the navigation shell and the
//! page headings. Japanese is partial: missing keys fall back to the
//! deployment's default locale, and a key missing everywhere comes back
//! unchanged.

use crate::locale::Locale;

const KO: &[(&str, &str)] = &[
    ("nav.start", "시작하기"),
    ("nav.download", "잼잼400 다운로드"),
    ("page.home.title", "잼잼400"),
    ("page.home.body", "즐거운 재활 운동 게임, 잼잼400을 만나보세요."),
    ("page.gemgem400.title", "잼잼400 소개"),
    ("page.gemgem400.body", "손 재활 운동을 게임으로 즐겁게."),
    ("page.content.title", "콘텐츠"),
    ("page.content.body", "다양한 재활 운동 콘텐츠를 확인하세요."),
    ("page.for_parents.title", "부모님을 위한 안내"),
    ("page.for_parents.body", "아이의 재활 과정을 함께 지켜보세요."),
    ("page.about.title", "회사 소개"),
    ("page.about.body", "잼잼테라는 재활을 즐겁게 만듭니다."),
    ("not_found.title", "페이지를 찾을 수 없습니다"),
    ("not_found.body", "요청하신 페이지가 존재하지 않습니다."),
    ("not_found.home", "홈으로 돌아가기"),
];

const EN: &[(&str, &str)] = &[
    ("nav.start", "Get started"),
    ("nav.download", "Download GemGem400"),
    ("page.home.title", "GemGem400"),
    ("page.home.body", "Meet GemGem400, the fun rehabilitation exercise game."),
    ("page.gemgem400.title", "About GemGem400"),
    ("page.gemgem400.body", "Hand rehabilitation, played as a game."),
    ("page.content.title", "Content"),
    ("page.content.body", "Browse our rehabilitation exercise content."),
    ("page.for_parents.title", "For parents"),
    ("page.for_parents.body", "Follow your child's rehabilitation progress together."),
    ("page.about.title", "About us"),
    ("page.about.body", "GemGemThera makes rehabilitation fun."),
    ("not_found.title", "Page not found"),
    ("not_found.body", "The page you requested does not exist."),
    ("not_found.home", "Back to home"),
];

const JP: &[(&str, &str)] = &[
    ("nav.start", "はじめる"),
    ("nav.download", "ジェムジェム400をダウンロード"),
    ("page.home.title", "ジェムジェム400"),
    ("not_found.title", "ページが見つかりません"),
];

fn catalog(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Ko => KO,
        Locale::En => EN,
        Locale::Jp => JP,
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    catalog(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

pub fn translate<'a>(locale: Locale, fallback: Locale, key: &'a str) -> &'a str {
    lookup(locale, key)
        .or_else(|| lookup(fallback, key))
        .unwrap_or(key)
}
