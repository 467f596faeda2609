use chrono::{Duration, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};
use url::Url;

use crate::filter::DayBucket;
use crate::models::{Choice, Day};

/// Weekly timetable as an iCalendar feed of recurring events.
#[derive(Clone)]
pub struct ScheduleExporter {
    studio_name: String,
    calendar_name: String,
    timezone: Tz,
    site_url: Url,
}

fn byday(day: Day) -> &'static str {
    match day {
        Day::Monday => "MO",
        Day::Tuesday => "TU",
        Day::Wednesday => "WE",
        Day::Thursday => "TH",
        Day::Friday => "FR",
        Day::Saturday => "SA",
        Day::Sunday => "SU",
    }
}

impl ScheduleExporter {
    pub fn new(studio_name: &str, timezone: Tz, site_url: Url) -> Self {
        Self {
            studio_name: studio_name.to_string(),
            calendar_name: format!("{studio_name} Class Schedule"),
            timezone,
            site_url,
        }
    }

    /// Events start in the week beginning `week_of` (a Monday) and repeat weekly.
    pub fn generate(&self, week: &[DayBucket<'_>], week_of: NaiveDate) -> Vec<u8> {
        if week.iter().all(DayBucket::is_empty) {
            return Vec::new();
        }

        let mut calendar = Calendar::new();
        calendar.name(&self.calendar_name);

        for bucket in week {
            let date = week_of + Duration::days(bucket.day.index() as i64);
            for entry in &bucket.entries {
                let start = NaiveDateTime::new(date, entry.time);
                let end = start + Duration::minutes(i64::from(entry.duration_min));

                let mut event = Event::new();
                event.summary(entry.name);
                event.starts(self.local(start));
                event.ends(self.local(end));
                event.location(&format!("{}, {}", entry.room, self.studio_name));
                event.description(&format!(
                    "{} · {}\nInstructor: {}",
                    entry.style, entry.level, entry.instructor
                ));
                event.add_property("RRULE", &format!("FREQ=WEEKLY;BYDAY={}", byday(bucket.day)));
                if let Ok(link) = self.site_url.join(entry.link.trim_start_matches('/')) {
                    event.add_property("URL", link.as_str());
                }
                event.uid(&format!(
                    "{}-{}-{}@{}",
                    bucket.day.slug(),
                    entry.time.format("%H%M"),
                    entry.name.to_lowercase().replace(' ', "-"),
                    self.site_url.host_str().unwrap_or("localhost")
                ));
                calendar.push(event);
            }
        }

        calendar.to_string().into_bytes()
    }

    fn local(&self, date_time: NaiveDateTime) -> CalendarDateTime {
        CalendarDateTime::WithTimezone {
            date_time,
            tzid: self.timezone.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::models::{Level, ScheduleEntry, Style};

    fn exporter() -> ScheduleExporter {
        ScheduleExporter::new(
            "Riverbend Community Dance",
            chrono_tz::America::Chicago,
            Url::parse("https://dance.example.org").unwrap(),
        )
    }

    #[test]
    fn test_generate_recurring_event() {
        let entry = ScheduleEntry {
            day: Day::Wednesday,
            name: "Tap Together",
            style: Style::Tap,
            level: Level::AllLevels,
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            duration_min: 60,
            instructor: "James Okafor",
            room: "Studio B",
            link: "/classes/tap",
        };
        let week = vec![DayBucket {
            day: Day::Wednesday,
            entries: vec![&entry],
        }];
        let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        let body = String::from_utf8(exporter().generate(&week, monday)).unwrap();
        assert!(body.contains("BEGIN:VEVENT"));
        assert!(body.contains("SUMMARY:Tap Together"));
        assert!(body.contains("RRULE:FREQ=WEEKLY;BYDAY=WE"));
        assert!(body.contains("TZID=America/Chicago:20250910T180000"));
        assert!(body.contains("20250910T190000"));
        assert!(body.contains("https://dance.example.org/classes/tap"));
    }

    #[test]
    fn test_generate_empty() {
        let week = vec![DayBucket {
            day: Day::Sunday,
            entries: vec![],
        }];
        let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        assert!(exporter().generate(&week, monday).is_empty());
    }
}
