use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use super::templates::{absolute_url, escape_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

/// Static marketing pages advertised to crawlers.
pub const SITEMAP_ENTRIES: &[(&str, ChangeFrequency, f32)] = &[
    ("/", ChangeFrequency::Yearly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/blog", ChangeFrequency::Weekly, 0.5),
];

pub fn sitemap_xml(origin: &Url, last_modified: DateTime<Utc>) -> String {
    let lastmod = last_modified.to_rfc3339_opts(SecondsFormat::Secs, true);
    let urls: String = SITEMAP_ENTRIES
        .iter()
        .map(|(path, freq, priority)| {
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{freq}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>\n",
                loc = escape_html(&absolute_url(origin, path)),
                freq = freq.as_str(),
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}
