use maud::{Markup, html};

use crate::catalog::Catalog;
use crate::models::Choice;
use crate::pages::{Site, layout, long_date};
use crate::reveal::{Direction, reveal, staggered};

pub fn render(site: &Site, catalog: &Catalog) -> Markup {
    let featured: Vec<_> = catalog.classes.iter().step_by(3).take(3).collect();
    let latest: Vec<_> = catalog.posts.iter().take(3).collect();

    let content = html! {
        section.hero {
            (reveal(&site.reveal.direction(Direction::Down), html! {
                h1 { "Dance is for every body." }
                p.subtitle {
                    (site.studio_name) " offers ballet, contemporary, jazz, tap and more for ages three to ninety-three."
                }
                p {
                    a.chip.active href="/classes/register" { "Try a free class" }
                    " "
                    a.chip href="/classes/schedule" { "View the schedule" }
                }
            }))
        }
        section.featured {
            h2 { "Featured classes" }
            div.grid {
                (staggered(&featured, &site.stagger, site.reveal, |class| html! {
                    article.card {
                        h3 { (class.name) }
                        p.meta { (class.level.label()) " · " (class.ages) }
                        p { (class.description) }
                    }
                }))
            }
            p { a href="/classes" { "Browse all classes" } }
        }
        @if let Some(show) = catalog.shows.first() {
            section.upcoming {
                (reveal(&site.reveal.direction(Direction::Right), html! {
                    h2 { "Coming up: " (show.title) }
                    p { (long_date(show.date)) " at " (show.venue) }
                    a href={ "/shows/" (show.slug) } { "Show details" }
                }))
            }
        }
        section.latest-news {
            h2 { "From the studio" }
            div.grid {
                (staggered(&latest, &site.stagger, site.reveal, |post| html! {
                    article.card {
                        p.meta { (long_date(post.date)) }
                        h3 { a href={ "/news/" (post.slug) } { (post.title) } }
                        p { (post.excerpt) }
                    }
                }))
            }
        }
    };

    layout(site, "/", "Home", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_home_page() {
        let site = Site::from_settings(&Settings::default());
        let html = render(&site, Catalog::studio()).into_string();
        assert!(html.contains("<title>Riverbend Community Dance</title>"));
        assert!(html.contains("Coming up: Winter Dreams"));
        assert!(html.contains("Fall Registration Is Open"));
        assert!(html.contains("All Levels · All ages"));
        assert_eq!(html.matches(r#"class="reveal""#).count(), 1 + 3 + 1 + 3);
    }
}
