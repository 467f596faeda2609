use maud::{Markup, html};

use crate::models::{PastProduction, Show, Workshop};
use crate::pages::{Site, empty_state, layout, long_date, page_header};
use crate::reveal::{Direction, reveal, staggered};

pub fn render_index(site: &Site, shows: &[Show]) -> Markup {
    let content = html! {
        (page_header("Shows & Performances", Some("Our dancers take the stage twice a year, and you are invited.")))
        @if shows.is_empty() {
            (empty_state("No upcoming shows are scheduled."))
        } @else {
            div.grid {
                (staggered(shows, &site.stagger, site.reveal, |show| html! {
                    article.card.show-card {
                        h2 { a href={ "/shows/" (show.slug) } { (show.title) } }
                        p.meta { (long_date(show.date)) " · " (show.time) " · " (show.venue) }
                        p { (show.description) }
                    }
                }))
            }
        }
        p {
            a href="/shows/archive" { "Past productions" } " · "
            a href="/shows/workshops" { "Workshops" }
        }
    };
    layout(site, "/shows", "Shows", content)
}

pub fn render_show(site: &Site, show: &Show) -> Markup {
    let path = format!("/shows/{}", show.slug);
    let content = html! {
        (page_header(show.title, Some(show.venue)))
        (reveal(&site.reveal.direction(Direction::Left), html! {
            dl.show-facts {
                dt { "Date" } dd { (long_date(show.date)) }
                dt { "Time" } dd { (show.time) }
                dt { "Venue" } dd { (show.venue) }
                dt { "Tickets" } dd { (show.ticket_price) }
            }
            p { (show.description) }
            p { a href="/contact" { "Questions about tickets? Contact us." } }
        }))
    };
    layout(site, &path, show.title, content)
}

pub fn render_archive(site: &Site, productions: &[PastProduction]) -> Markup {
    let content = html! {
        (page_header("Past Productions", None))
        div.grid {
            (staggered(productions, &site.stagger, site.reveal, |production| html! {
                article.card {
                    img src=(production.image) alt=(production.title) loading="lazy";
                    h2 { (production.title) " (" (production.year) ")" }
                    p.meta { (production.date) " · " (production.venue) }
                    p { (production.description) }
                }
            }))
        }
    };
    layout(site, "/shows/archive", "Past Productions", content)
}

pub fn render_workshops(site: &Site, workshops: &[Workshop]) -> Markup {
    let content = html! {
        (page_header("Workshops", Some("Short courses with guest artists and our own faculty.")))
        @if workshops.is_empty() {
            (empty_state("No workshops are planned right now."))
        }
        (staggered(workshops, &site.stagger, site.reveal.direction(Direction::Right), |w| html! {
            article.card.workshop {
                h2 { (w.title) }
                p.meta { (long_date(w.date)) " · " (w.time) " · " (w.location) }
                p { (w.description) }
                p { "With " (w.instructor) " · " strong { (w.price) } }
            }
        }))
        p { a href="/contact" { "Ask about a workshop" } }
    };
    layout(site, "/shows/workshops", "Workshops", content)
}
