//! HTML pages, rendered with maud.
//!
//! Every page goes through [`layout`], which adds the header, footer, styles
//! and the reveal script. Listings use [`chips`] for their filters and
//! [`crate::reveal::staggered`] for their cards.

pub mod classes;
pub mod forms;
pub mod gallery;
pub mod home;
pub mod info;
pub mod news;
pub mod schedule;
pub mod shows;

use std::time::Duration;

use axum::http::StatusCode;
use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::filter::{Axis, Selection};
use crate::models::Choice;
use crate::reveal::{REVEAL_SCRIPT, Reveal, Stagger, VIEWPORT_THRESHOLD};
use crate::routes::{self, NAV};
use crate::settings::Settings;

const CSS: &str = include_str!("../../static/site.css");

/// Rendering context shared by all pages.
#[derive(Debug, Clone)]
pub struct Site {
    pub studio_name: String,
    pub stagger: Stagger,
    pub reveal: Reveal,
    pub reset_after: Duration,
}

impl Site {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            studio_name: settings.studio_name.clone(),
            stagger: Stagger::new(
                Duration::from_millis(settings.stagger_ms),
                settings.stagger_wrap,
            ),
            reveal: Reveal {
                duration: Duration::from_millis(settings.reveal_duration_ms),
                ..Reveal::default()
            },
            reset_after: Duration::from_millis(settings.reset_delay_ms),
        }
    }
}

pub fn layout(site: &Site, path: &str, title: &str, content: Markup) -> Markup {
    let full_title = if path == "/" {
        site.studio_name.clone()
    } else {
        format!("{title} | {}", site.studio_name)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                style { (PreEscaped(CSS)) }
                noscript {
                    style { ".reveal { opacity: 1; transform: none; }" }
                }
            }
            body data-reveal-threshold=(VIEWPORT_THRESHOLD.to_string()) {
                (site_header(site, path))
                main { (content) }
                (site_footer(site))
                script { (PreEscaped(REVEAL_SCRIPT)) }
                script { (PreEscaped(forms::FORM_SCRIPT)) }
            }
        }
    }
}

fn site_header(site: &Site, path: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (site.studio_name) }
            nav.site-nav aria-label="Main" {
                ul {
                    @for item in NAV {
                        li class=[routes::is_current(item.path, path).then_some("current")] {
                            a href=(item.path) { (item.title) }
                        }
                    }
                    li { a.chip href="/classes/register" { "Register" } }
                }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (site.studio_name) ". Dance is for every body." }
            p {
                a href="/studio" { "Visit the studio" } " · "
                a href="/privacy-policy" { "Privacy" } " · "
                a href="/terms" { "Terms" } " · "
                a href="/sitemap" { "Sitemap" }
            }
        }
    }
}

pub fn page_header(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        header.page-header {
            h1 { (title) }
            @if let Some(subtitle) = subtitle {
                p.subtitle { (subtitle) }
            }
        }
    }
}

/// One row of filter buttons for a single axis.
///
/// Each button links to the page with that value toggled, so clicking the
/// active button clears the axis. "All" always clears it.
pub fn chips<S: Selection, V: Choice>(
    base: &str,
    heading: &str,
    selection: &S,
    axis: fn(&mut S) -> &mut Axis<V>,
) -> Markup {
    let mut unset = selection.clone();
    let active = axis(&mut unset).clone();
    *axis(&mut unset) = Axis::Any;
    let cleared = unset.query_string();

    html! {
        div.filters role="group" aria-label=(heading) {
            span.filter-label { (heading) ":" }
            a.chip.active[!active.is_set()] href={ (base) (cleared) } { "All" }
            @for value in V::ALL {
                @let on = active.selected() == Some(*value);
                a.chip.active[on]
                    href={ (base) (selection.toggled(axis, *value).query_string()) }
                    aria-pressed=(if on { "true" } else { "false" }) {
                    (value.label())
                }
            }
        }
    }
}

/// "Clear filters" link, shown only while something is selected.
pub fn clear_filters<S: Selection>(base: &str, selection: &S) -> Markup {
    html! {
        @if selection.is_active() {
            a.clear-filters href=(base) { "Clear filters" }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p.empty-state { (message) }
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Standalone page for errors, independent of site settings.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let heading = status.canonical_reason().unwrap_or("Error");
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (heading) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main.error-page {
                    h1 { (status.as_u16()) " · " (heading) }
                    p { (message) }
                    p { a href="/" { "Back to the home page" } }
                }
            }
        }
    }
}
