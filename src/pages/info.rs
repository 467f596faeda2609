//! Mostly static pages: about, team, mission, the studio, legal, sitemap.

use std::collections::BTreeMap;

use maud::{Markup, html};

use crate::models::TeamMember;
use crate::pages::{Site, layout, page_header};
use crate::reveal::{Direction, reveal, staggered};
use crate::routes::{PageLink, section};

pub fn render_about(site: &Site) -> Markup {
    let content = html! {
        (page_header("About Us", Some("A neighborhood studio since 2009.")))
        (reveal(&site.reveal, html! {
            p {
                (site.studio_name) " began in a church basement with twelve students and one very old piano. "
                "Today we teach more than four hundred dancers a week in two bright studios, "
                "but the idea is the same: everyone deserves a place to dance."
            }
        }))
        div.grid {
            (staggered(&[
                ("/about/team", "Meet the team", "The teachers and staff who make it all happen."),
                ("/about/mission", "Our mission", "Why we do what we do, and who we do it for."),
                ("/studio", "The studio", "Sprung floors, big windows and a very busy lobby."),
            ], &site.stagger, site.reveal, |(href, title, text)| html! {
                a.card href=(href) {
                    h2 { (title) }
                    p { (text) }
                }
            }))
        }
    };
    layout(site, "/about", "About Us", content)
}

pub fn render_team(site: &Site, team: &[TeamMember]) -> Markup {
    let content = html! {
        (page_header("Our Team", None))
        div.grid {
            (staggered(team, &site.stagger, site.reveal, |member| html! {
                article.card.team-member {
                    h2 { (member.name) }
                    p.meta { (member.role) }
                    p { (member.bio) }
                }
            }))
        }
    };
    layout(site, "/about/team", "Our Team", content)
}

pub fn render_mission(site: &Site) -> Markup {
    let values = [
        ("Access", "Sliding-scale tuition and scholarships mean cost is never the reason someone stops dancing."),
        ("Joy", "We take technique seriously and ourselves a lot less so."),
        ("Community", "Our shows, open houses and street fair sets bring the whole neighborhood in."),
    ];
    let content = html! {
        (page_header("Our Mission", Some("To share the joy of dance with every body in our community.")))
        (staggered(&values, &site.stagger, site.reveal.direction(Direction::Left), |(name, text)| html! {
            section.value {
                h2 { (name) }
                p { (text) }
            }
        }))
    };
    layout(site, "/about/mission", "Our Mission", content)
}

pub fn render_studio(site: &Site) -> Markup {
    let content = html! {
        (page_header("The Studio", Some("214 Mill Street, second floor")))
        (reveal(&site.reveal, html! {
            ul {
                li { "Studio A: 1,800 sq ft sprung floor, full mirrors, grand piano" }
                li { "Studio B: 1,200 sq ft, portable barres, sound system" }
                li { "Lobby with viewing window, cubbies and a costume wall" }
                li { "Street parking and bike racks out front" }
            }
            p { "Studio rentals are available on weekends. " a href="/contact" { "Ask us about availability." } }
        }))
    };
    layout(site, "/studio", "The Studio", content)
}

pub fn render_privacy(site: &Site) -> Markup {
    let content = html! {
        (page_header("Privacy Policy", None))
        p { "We collect only the information you give us through our contact and registration forms, and we use it only to reply to you and manage your enrollment." }
        p { "We never sell or share personal information with third parties." }
        p { "To ask what we hold about you, or to have it removed, " a href="/contact" { "contact us" } "." }
    };
    layout(site, "/privacy-policy", "Privacy Policy", content)
}

pub fn render_terms(site: &Site) -> Markup {
    let content = html! {
        (page_header("Terms of Service", None))
        p { "Tuition is due on the first of each month. Missed classes may be made up within the same term." }
        p { "Students participate at their own risk and should let their teacher know about any injuries." }
        p { "Photos taken at studio events may appear on this site unless you ask us not to use them." }
    };
    layout(site, "/terms", "Terms of Service", content)
}

/// Human-readable sitemap, grouped by top-level section.
pub fn render_sitemap(site: &Site, pages: &[PageLink]) -> Markup {
    let mut sections: BTreeMap<&str, Vec<&PageLink>> = BTreeMap::new();
    for page in pages {
        sections.entry(section(&page.path)).or_default().push(page);
    }

    let content = html! {
        (page_header("Sitemap", None))
        @for (name, links) in &sections {
            section.sitemap-section {
                h2 { @if name.is_empty() { "Home" } @else { (title_case(name)) } }
                ul {
                    @for link in links {
                        li { a href=(link.path) { (link.title) } }
                    }
                }
            }
        }
    };
    layout(site, "/sitemap", "Sitemap", content)
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::routes::all_pages;
    use crate::settings::Settings;

    fn site() -> Site {
        Site::from_settings(&Settings::default())
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("privacy-policy"), "Privacy Policy");
        assert_eq!(title_case("news"), "News");
    }

    #[test]
    fn test_sitemap_groups_sections() {
        let html = render_sitemap(&site(), &all_pages(Catalog::studio())).into_string();
        assert!(html.contains("<h2>Classes</h2>"));
        assert!(html.contains("<h2>Privacy Policy</h2>"));
        assert!(html.contains(r#"<a href="/shows/winter-dreams">Winter Dreams</a>"#));
    }

    #[test]
    fn test_team_page_lists_everyone() {
        let catalog = Catalog::studio();
        let html = render_team(&site(), &catalog.team).into_string();
        assert_eq!(html.matches("team-member").count(), catalog.team.len());
    }

    #[test]
    fn test_static_pages_render() {
        let site = site();
        for html in [
            render_about(&site),
            render_mission(&site),
            render_studio(&site),
            render_privacy(&site),
            render_terms(&site),
        ] {
            assert!(html.into_string().contains("</main>"));
        }
    }
}
