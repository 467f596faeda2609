//! Every page the site serves, as one table.
//!
//! The router, the sitemap and the HTML sitemap page all read from here, so a
//! page added to the table shows up everywhere at once.

use crate::catalog::Catalog;
use crate::models::{Choice, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub title: &'static str,
}

const fn route(path: &'static str, title: &'static str) -> Route {
    Route { path, title }
}

pub const STATIC_ROUTES: &[Route] = &[
    route("/", "Home"),
    route("/about", "About Us"),
    route("/about/team", "Our Team"),
    route("/about/mission", "Our Mission"),
    route("/classes", "Classes"),
    route("/classes/schedule", "Class Schedule"),
    route("/classes/pricing", "Pricing"),
    route("/classes/register", "Register"),
    route("/studio", "The Studio"),
    route("/shows", "Shows"),
    route("/shows/archive", "Past Productions"),
    route("/shows/workshops", "Workshops"),
    route("/gallery", "Gallery"),
    route("/news", "News"),
    route("/contact", "Contact"),
    route("/privacy-policy", "Privacy Policy"),
    route("/terms", "Terms of Service"),
    route("/sitemap", "Sitemap"),
];

/// Top navigation, in display order.
pub const NAV: &[Route] = &[
    route("/about", "About"),
    route("/classes", "Classes"),
    route("/classes/schedule", "Schedule"),
    route("/shows", "Shows"),
    route("/gallery", "Gallery"),
    route("/news", "News"),
    route("/contact", "Contact"),
];

/// A path with the page title it renders under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub path: String,
    pub title: String,
}

pub fn style_path(style: Style) -> String {
    format!("/classes/{}", style.slug())
}

/// Static pages followed by the pages generated from catalog content.
pub fn all_pages(catalog: &Catalog) -> Vec<PageLink> {
    let mut pages: Vec<PageLink> = STATIC_ROUTES
        .iter()
        .map(|r| PageLink {
            path: r.path.to_string(),
            title: r.title.to_string(),
        })
        .collect();

    pages.extend(Style::ALL.iter().map(|style| PageLink {
        path: style_path(*style),
        title: format!("{} Classes", style.label()),
    }));
    pages.extend(catalog.shows.iter().map(|show| PageLink {
        path: format!("/shows/{}", show.slug),
        title: show.title.to_string(),
    }));
    pages.extend(catalog.posts.iter().map(|post| PageLink {
        path: format!("/news/{}", post.slug),
        title: post.title.to_string(),
    }));
    pages
}

/// Number of path segments; the home page is depth 0.
pub fn depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// First path segment, or `""` for the home page.
pub fn section(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or("")
}

/// Whether a nav entry should be marked current for `path`.
pub fn is_current(nav_path: &str, path: &str) -> bool {
    if nav_path == path {
        return true;
    }
    // /classes/schedule has its own entry
    let owned_elsewhere = NAV.iter().any(|r| r.path != nav_path && r.path == path);
    !owned_elsewhere && path.starts_with(nav_path) && path[nav_path.len()..].starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_and_section() {
        assert_eq!(depth("/"), 0);
        assert_eq!(depth("/classes"), 1);
        assert_eq!(depth("/classes/schedule"), 2);
        assert_eq!(section("/classes/schedule"), "classes");
        assert_eq!(section("/"), "");
    }

    #[test]
    fn test_all_pages_includes_generated_paths() {
        let pages = all_pages(Catalog::studio());
        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert!(paths.contains(&"/"));
        assert!(paths.contains(&"/classes/tap"));
        assert!(paths.contains(&"/shows/winter-dreams"));
        assert!(paths.contains(&"/news/welcome-priya"));
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_is_current() {
        assert!(is_current("/classes", "/classes"));
        assert!(is_current("/classes", "/classes/ballet"));
        assert!(!is_current("/classes", "/classes/schedule"));
        assert!(is_current("/classes/schedule", "/classes/schedule"));
        assert!(!is_current("/about", "/aboutface"));
    }
}
