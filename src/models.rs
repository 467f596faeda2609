use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a known {kind}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

/// Behaviour shared by the small closed sets that content is tagged with.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Every member, in display order.
    const ALL: &'static [Self];
    const KIND: &'static str;

    fn slug(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($slug:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $slug)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const KIND: &'static str = $kind;

            fn slug(self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let value = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| {
                        c.slug().eq_ignore_ascii_case(value)
                            || c.label().eq_ignore_ascii_case(value)
                    })
                    .ok_or_else(|| UnknownChoice {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

closed_set! {
    Day, "day" {
        Monday => ("monday", "Monday"),
        Tuesday => ("tuesday", "Tuesday"),
        Wednesday => ("wednesday", "Wednesday"),
        Thursday => ("thursday", "Thursday"),
        Friday => ("friday", "Friday"),
        Saturday => ("saturday", "Saturday"),
        Sunday => ("sunday", "Sunday"),
    }
}

closed_set! {
    Style, "style" {
        Ballet => ("ballet", "Ballet"),
        Contemporary => ("contemporary", "Contemporary"),
        Jazz => ("jazz", "Jazz"),
        Tap => ("tap", "Tap"),
        Creative => ("creative", "Creative Movement"),
        Fitness => ("fitness", "Dance Fitness"),
    }
}

closed_set! {
    Level, "level" {
        AllLevels => ("all-levels", "All Levels"),
        Beginner => ("beginner", "Beginner"),
        Intermediate => ("intermediate", "Intermediate"),
        Advanced => ("advanced", "Advanced"),
    }
}

closed_set! {
    GalleryCategory, "gallery category" {
        Performances => ("performances", "Performances"),
        Classes => ("classes", "Classes"),
        Studio => ("studio", "Studio"),
        Events => ("events", "Events"),
    }
}

closed_set! {
    PostCategory, "post category" {
        StudioNews => ("studio-news", "Studio News"),
        Performances => ("performances", "Performances"),
        Workshops => ("workshops", "Workshops"),
        Community => ("community", "Community"),
    }
}

impl Day {
    pub fn to_weekday(self) -> chrono::Weekday {
        match self {
            Day::Monday => chrono::Weekday::Mon,
            Day::Tuesday => chrono::Weekday::Tue,
            Day::Wednesday => chrono::Weekday::Wed,
            Day::Thursday => chrono::Weekday::Thu,
            Day::Friday => chrono::Weekday::Fri,
            Day::Saturday => chrono::Weekday::Sat,
            Day::Sunday => chrono::Weekday::Sun,
        }
    }

    /// Position in a Monday-first week.
    pub fn index(self) -> usize {
        self.to_weekday().num_days_from_monday() as usize
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct ClassOffering {
    pub slug: &'static str,
    pub name: &'static str,
    pub style: Style,
    pub level: Level,
    pub ages: &'static str,
    #[schema(value_type = Vec<String>)]
    pub schedule_slots: &'static [&'static str],
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct ScheduleEntry {
    pub day: Day,
    pub name: &'static str,
    pub style: Style,
    pub level: Level,
    #[schema(value_type = String, example = "17:30:00")]
    pub time: NaiveTime,
    pub duration_min: u32,
    pub instructor: &'static str,
    pub room: &'static str,
    pub link: &'static str,
}

impl ScheduleEntry {
    pub fn ends_at(&self) -> NaiveTime {
        self.time + chrono::Duration::minutes(i64::from(self.duration_min))
    }
}

/// Weekly timetable keyed by day, Monday first. Every day has a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSchedule {
    days: [Vec<ScheduleEntry>; 7],
}

impl WeekSchedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        let mut days: [Vec<ScheduleEntry>; 7] = Default::default();
        for entry in entries {
            days[entry.day.index()].push(entry);
        }
        Self { days }
    }

    pub fn day(&self, day: Day) -> &[ScheduleEntry] {
        &self.days[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &[ScheduleEntry])> {
        Day::ALL.iter().map(|&day| (day, self.day(day)))
    }

    pub fn entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.days.iter().flatten()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: GalleryCategory,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    #[schema(value_type = String, format = "date", example = "2025-09-02")]
    pub date: NaiveDate,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub category: PostCategory,
    pub slug: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Workshop {
    pub title: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub instructor: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PastProduction {
    pub title: &'static str,
    pub year: i32,
    pub date: &'static str,
    pub venue: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Show {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub venue: &'static str,
    pub description: &'static str,
    pub ticket_price: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parses_slug_and_label() {
        assert_eq!("ballet".parse::<Style>().unwrap(), Style::Ballet);
        assert_eq!("Creative Movement".parse::<Style>().unwrap(), Style::Creative);
        assert_eq!("ALL-LEVELS".parse::<Level>().unwrap(), Level::AllLevels);
        assert_eq!(" sunday ".parse::<Day>().unwrap(), Day::Sunday);
    }

    #[test]
    fn test_choice_rejects_unknown() {
        let err = "salsa".parse::<Style>().unwrap_err();
        assert_eq!(err.kind, "style");
        assert_eq!(err.to_string(), "`salsa` is not a known style");
    }

    #[test]
    fn test_day_index_is_monday_first() {
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Sunday.index(), 6);
        assert_eq!(Day::ALL.len(), 7);
    }

    #[test]
    fn test_week_schedule_groups_by_day() {
        let entry = |day| ScheduleEntry {
            day,
            name: "Test",
            style: Style::Tap,
            level: Level::Beginner,
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            duration_min: 45,
            instructor: "A",
            room: "B",
            link: "/classes/tap",
        };
        let week = WeekSchedule::new(vec![entry(Day::Friday), entry(Day::Monday)]);
        assert_eq!(week.day(Day::Friday).len(), 1);
        assert_eq!(week.day(Day::Monday).len(), 1);
        assert!(week.day(Day::Sunday).is_empty());
        assert_eq!(week.iter().count(), 7);
        assert_eq!(week.day(Day::Friday)[0].ends_at(), NaiveTime::from_hms_opt(18, 45, 0).unwrap());
    }

    #[test]
    fn test_serde_uses_slugs() {
        assert_eq!(serde_json::to_string(&Level::AllLevels).unwrap(), r#""all-levels""#);
        assert_eq!(serde_json::to_string(&PostCategory::StudioNews).unwrap(), r#""studio-news""#);
    }
}
