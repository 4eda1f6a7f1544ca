//! Static site identity and feed endpoints.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Display name used for feed titles. Set `SITE_NAME` at build time to override.
pub const SITE_NAME: &str = match option_env!("SITE_NAME") {
    Some(name) => name,
    None => "Rin",
};

/// One syndication feed published by the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedLink {
    /// User-facing anchor text.
    pub label: &'static str,
    pub href: &'static str,
    /// MIME type for the `<link rel="alternate">` declaration.
    pub mime: &'static str,
}

pub static FEEDS: [FeedLink; 3] = [
    FeedLink { label: "RSS", href: "/sub/rss.xml", mime: "application/rss+xml" },
    FeedLink { label: "Atom", href: "/sub/atom.xml", mime: "application/atom+xml" },
    FeedLink { label: "JSON", href: "/sub/rss.json", mime: "application/json" },
];
