use maud::{Markup, html};

use crate::filter::{DayBucket, ScheduleFilter, Selection};
use crate::models::{Choice, ScheduleEntry};
use crate::pages::{Site, chips, clear_filters, empty_state, layout, page_header};
use crate::reveal::{Direction, reveal, staggered};

pub const PATH: &str = "/classes/schedule";

pub fn render(site: &Site, week: &[DayBucket<'_>], filter: &ScheduleFilter) -> Markup {
    // the calendar feed follows style/level but always covers the whole week
    let feed_filter = ScheduleFilter {
        day: Default::default(),
        ..filter.clone()
    };

    let content = html! {
        (page_header("Class Schedule", Some("Find a class that fits your week. Your first class is always free.")))
        section.schedule-filters {
            (chips(PATH, "Day", filter, |f| &mut f.day))
            (chips(PATH, "Style", filter, |f| &mut f.style))
            (chips(PATH, "Level", filter, |f| &mut f.level))
            (clear_filters(PATH, filter))
            a.calendar-link href={ (PATH) ".ics" (feed_filter.query_string()) } { "Add to calendar" }
        }
        @if week.is_empty() {
            (empty_state("No classes found for that day."))
        }
        @for (i, bucket) in week.iter().enumerate() {
            (reveal(&site.stagger.reveal(site.reveal.direction(Direction::Left), i), day_section(site, bucket)))
        }
    };

    layout(site, PATH, "Class Schedule", content)
}

fn day_section(site: &Site, bucket: &DayBucket<'_>) -> Markup {
    html! {
        section.schedule-day id=(bucket.day.slug()) {
            h2 { (bucket.day.to_string()) }
            @if bucket.is_empty() {
                (empty_state("No classes scheduled"))
            } @else {
                div.schedule-rows {
                    (staggered(&bucket.entries, &site.stagger, site.reveal, |entry| row(entry)))
                }
            }
        }
    }
}

fn row(entry: &ScheduleEntry) -> Markup {
    html! {
        article.card.schedule-row {
            div.time {
                (entry.time.format("%-I:%M %p").to_string())
                " – "
                (entry.ends_at().format("%-I:%M %p").to_string())
            }
            div.details {
                h3 { a href=(entry.link) { (entry.name) } }
                p.meta {
                    span.style { (entry.style.to_string()) }
                    " · "
                    span.level { (entry.level.to_string()) }
                    " · "
                    (entry.duration_min) " min"
                }
                p.meta { (entry.instructor) " · " (entry.room) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::filter_week;
    use crate::settings::Settings;

    fn render_with(filter: ScheduleFilter) -> String {
        let site = Site::from_settings(&Settings::default());
        let catalog = Catalog::studio();
        let week = filter_week(&catalog.schedule, &filter);
        render(&site, &week, &filter).into_string()
    }

    #[test]
    fn test_sunday_shows_header_and_empty_message() {
        let html = render_with(ScheduleFilter::parse(Some("sunday"), None, None));
        assert!(html.contains("<h2>Sunday</h2>"));
        assert!(html.contains("No classes scheduled"));
        assert!(!html.contains("<h2>Monday</h2>"));
    }

    #[test]
    fn test_unfiltered_lists_all_days() {
        let html = render_with(ScheduleFilter::default());
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"] {
            assert!(html.contains(&format!("<h2>{day}</h2>")), "{day}");
        }
        assert!(html.contains("Contemporary Flow"));
        assert!(html.contains("6:30 PM – 7:45 PM"));
    }

    #[test]
    fn test_calendar_link_drops_day() {
        let html = render_with(ScheduleFilter::parse(Some("monday"), Some("ballet"), None));
        assert!(html.contains(r#"href="/classes/schedule.ics?style=ballet""#));
    }

    #[test]
    fn test_unknown_day_shows_nothing_found() {
        let html = render_with(ScheduleFilter::parse(Some("caturday"), None, None));
        assert!(html.contains("No classes found for that day."));
    }
}
