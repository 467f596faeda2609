//! `sitemap.xml` generation.
//!
//! Entries come straight from [`routes::all_pages`](crate::routes::all_pages).
//! Priority and change frequency depend only on how deep a path is: the home
//! page is crawled daily at top priority, section pages weekly at 0.8 and
//! everything below them weekly at 0.6.

use maud::{PreEscaped, html};
use url::Url;

use crate::routes::{PageLink, depth};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: Url,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub fn crawl_hints(path: &str) -> (ChangeFreq, f32) {
    match depth(path) {
        0 => (ChangeFreq::Daily, 1.0),
        1 => (ChangeFreq::Weekly, 0.8),
        _ => (ChangeFreq::Weekly, 0.6),
    }
}

pub fn entries(base: &Url, pages: &[PageLink]) -> Result<Vec<SitemapEntry>, url::ParseError> {
    pages
        .iter()
        .map(|page| {
            let (changefreq, priority) = crawl_hints(&page.path);
            Ok(SitemapEntry {
                loc: base.join(page.path.trim_start_matches('/'))?,
                changefreq,
                priority,
            })
        })
        .collect()
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let document = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NS) {
            @for entry in entries {
                url {
                    loc { (entry.loc.as_str()) }
                    changefreq { (entry.changefreq.as_str()) }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    };
    document.into_string()
}
