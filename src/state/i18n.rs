//! Footer string tables.
//!
//! Lookup falls back to English, then to the key itself, so a missing entry
//! shows up as its key instead of an empty label.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Map a BCP 47 tag such as `zh-CN` or `en-US` to a supported locale.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("zh") { Self::Zh } else { Self::En }
    }

    /// Locale of the current browser, English on the server.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or(Self::En, |tag| Self::from_language_tag(&tag))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::En
        }
    }
}

/// Translation capability provided through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translations {
    pub locale: Locale,
}

impl Translations {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::En, key))
            .unwrap_or(key)
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let value = match (locale, key) {
        (Locale::En, "count.site_pv") => "Page views",
        (Locale::En, "count.site_uv") => "Visitors",
        (Locale::En, "footer.rss") => "Subscribe via feed",
        (Locale::En, "cdn_from_china") => "provides CDN acceleration in mainland China",
        (Locale::Zh, "count.site_pv") => "总访问量",
        (Locale::Zh, "count.site_uv") => "总访客数",
        (Locale::Zh, "footer.rss") => "订阅本站",
        (Locale::Zh, "cdn_from_china") => "提供中国大陆 CDN 加速",
        _ => return None,
    };
    Some(value)
}
