use maud::{Markup, html};

use crate::filter::{ClassFilter, DayBucket};
use crate::models::{Choice, ClassOffering, PricingTier, Style};
use crate::pages::{Site, chips, clear_filters, empty_state, layout, page_header};
use crate::reveal::{Direction, reveal, staggered};
use crate::routes::style_path;

pub const PATH: &str = "/classes";

fn blurb(style: Style) -> &'static str {
    match style {
        Style::Ballet => "The foundation of it all: grace, strength and classical technique.",
        Style::Contemporary => "Expressive, grounded movement that blends modern, ballet and improvisation.",
        Style::Jazz => "High-energy choreography with turns, kicks and plenty of personality.",
        Style::Tap => "Make music with your feet in a class built on rhythm and play.",
        Style::Creative => "Our youngest dancers explore music, space and imagination.",
        Style::Fitness => "Dance-based workouts for adults who want to move and sweat.",
    }
}

pub fn render_index(site: &Site, classes: &[&ClassOffering], filter: &ClassFilter) -> Markup {
    let content = html! {
        (page_header("Our Classes", Some("From first steps to pre-professional training, there is a place for you here.")))
        section.styles {
            div.grid {
                (staggered(Style::ALL, &site.stagger, site.reveal, |style| html! {
                    a.card.style-card href=(style_path(*style)) {
                        h2 { (style.label()) }
                        p { (blurb(*style)) }
                    }
                }))
            }
        }
        section.class-list {
            h2 { "Find a class" }
            (chips(PATH, "Style", filter, |f| &mut f.style))
            (chips(PATH, "Level", filter, |f| &mut f.level))
            (clear_filters(PATH, filter))
            @if classes.is_empty() {
                (empty_state("No classes match those filters."))
            } @else {
                div.grid {
                    (staggered(classes, &site.stagger, site.reveal, |class| card(class)))
                }
            }
        }
    };
    layout(site, PATH, "Classes", content)
}

fn card(class: &ClassOffering) -> Markup {
    html! {
        article.card.class-card {
            img src=(class.image) alt="" loading="lazy";
            h3 { (class.name) }
            p.meta { (class.style.label()) " · " (class.level.label()) " · " (class.ages) }
            p { (class.description) }
            ul.slots {
                @for slot in class.schedule_slots {
                    li { (slot) }
                }
            }
            a href={ "/classes/register?class=" (class.slug) } { "Register" }
        }
    }
}

pub fn render_style(
    site: &Site,
    style: Style,
    classes: &[&ClassOffering],
    week: &[DayBucket<'_>],
) -> Markup {
    let path = style_path(style);
    let title = format!("{} Classes", style.label());
    let content = html! {
        (page_header(&title, Some(blurb(style))))
        @if classes.is_empty() {
            (empty_state("No classes in this style right now."))
        } @else {
            div.grid {
                (staggered(classes, &site.stagger, site.reveal, |class| card(class)))
            }
        }
        section.style-times {
            h2 { "When it runs" }
            ul {
                @for bucket in week.iter().filter(|b| !b.is_empty()) {
                    @for entry in &bucket.entries {
                        li {
                            (bucket.day.label()) " "
                            (entry.time.format("%-I:%M %p").to_string())
                            " · " (entry.name) " with " (entry.instructor)
                        }
                    }
                }
            }
            a href={ "/classes/schedule?style=" (style.slug()) } { "See the full schedule" }
        }
    };
    layout(site, &path, &title, content)
}

pub fn render_pricing(site: &Site, tiers: &[PricingTier]) -> Markup {
    let content = html! {
        (page_header("Pricing", Some("Simple plans, no registration fee, and your first class is free.")))
        div.grid.pricing {
            @for (i, tier) in tiers.iter().enumerate() {
                (reveal(&site.stagger.reveal(site.reveal.direction(Direction::Up), i), html! {
                    article.card.tier.highlighted[tier.highlighted] {
                        h2 { (tier.name) }
                        p.price { (tier.price) " " span.period { (tier.period) } }
                        ul {
                            @for feature in tier.features {
                                li { (feature) }
                            }
                        }
                        a.chip href="/classes/register" { "Get started" }
                    }
                }))
            }
        }
        p.note { "Sibling and family discounts are available. Ask at the front desk or " a href="/contact" { "get in touch" } "." }
    };
    layout(site, "/classes/pricing", "Pricing", content)
}
