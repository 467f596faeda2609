//! Narrowing catalog content down to what a visitor asked to see.
//!
//! Each page keeps one [`Axis`] per thing it can filter on. An axis is either
//! unset or holds exactly one value; selecting the value it already holds
//! clears it again. Items survive a filter only when every set axis matches.

use serde::Serialize;
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::models::{
    BlogPost, Choice, ClassOffering, Day, GalleryCategory, GalleryImage, Level, PostCategory,
    ScheduleEntry, Style, WeekSchedule,
};

/// A single-select filter over one closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axis<V> {
    Any,
    Is(V),
    /// A requested value that names nothing in the set. Matches no item.
    Unknown(String),
}

impl<V> Default for Axis<V> {
    fn default() -> Self {
        Axis::Any
    }
}

impl<V: Choice + std::str::FromStr> Axis<V> {
    /// Builds an axis from a raw query value. Missing, blank and `all` are unset.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Axis::Any,
            Some(value) if value.eq_ignore_ascii_case("all") => Axis::Any,
            Some(value) => value
                .parse::<V>()
                .map(Axis::Is)
                .unwrap_or_else(|_| Axis::Unknown(value.to_string())),
        }
    }
}

impl<V: Choice> Axis<V> {
    pub fn matches(&self, value: V) -> bool {
        match self {
            Axis::Any => true,
            Axis::Is(selected) => *selected == value,
            Axis::Unknown(_) => false,
        }
    }

    pub fn toggle(&mut self, value: V) {
        *self = match self {
            Axis::Is(current) if *current == value => Axis::Any,
            _ => Axis::Is(value),
        };
    }

    pub fn selected(&self) -> Option<V> {
        match self {
            Axis::Is(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Axis::Any)
    }

    /// The value as it appears in a query string.
    pub fn query_value(&self) -> Option<&str> {
        match self {
            Axis::Any => None,
            Axis::Is(value) => Some(value.slug()),
            Axis::Unknown(raw) => Some(raw),
        }
    }
}

pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Items accepted by `filter`, in their original order.
pub fn apply<'a, T, F: Filter<T>>(items: &'a [T], filter: &F) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Per-page filter state that can be written back into a link.
pub trait Selection: Clone + Default {
    fn query_pairs(&self) -> Vec<(&'static str, &str)>;

    /// `?key=value&...`, or an empty string when nothing is selected.
    fn query_string(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("?{encoded}")
    }

    fn is_active(&self) -> bool {
        !self.query_pairs().is_empty()
    }

    /// A copy of this selection with one axis toggled.
    fn toggled<V: Choice>(&self, axis: impl FnOnce(&mut Self) -> &mut Axis<V>, value: V) -> Self {
        let mut next = self.clone();
        axis(&mut next).toggle(value);
        next
    }
}

fn push_axis<'a, V: Choice>(
    pairs: &mut Vec<(&'static str, &'a str)>,
    key: &'static str,
    axis: &'a Axis<V>,
) {
    if let Some(value) = axis.query_value() {
        pairs.push((key, value));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub day: Axis<Day>,
    pub style: Axis<Style>,
    pub level: Axis<Level>,
}

impl ScheduleFilter {
    pub fn parse(day: Option<&str>, style: Option<&str>, level: Option<&str>) -> Self {
        Self {
            day: Axis::parse(day),
            style: Axis::parse(style),
            level: Axis::parse(level),
        }
    }
}

impl Filter<ScheduleEntry> for ScheduleFilter {
    fn matches(&self, entry: &ScheduleEntry) -> bool {
        self.day.matches(entry.day)
            && self.style.matches(entry.style)
            && self.level.matches(entry.level)
    }
}

impl Selection for ScheduleFilter {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        push_axis(&mut pairs, "day", &self.day);
        push_axis(&mut pairs, "style", &self.style);
        push_axis(&mut pairs, "level", &self.level);
        pairs
    }
}

/// One day of the filtered timetable.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct DayBucket<'a> {
    pub day: Day,
    #[schema(value_type = Vec<ScheduleEntry>)]
    pub entries: Vec<&'a ScheduleEntry>,
}

impl DayBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filters the week day by day.
///
/// With a day selected only that day comes back, even when nothing in it
/// matches. Without one, all seven days come back in order and days with no
/// matching class are kept as empty buckets.
pub fn filter_week<'a>(week: &'a WeekSchedule, filter: &ScheduleFilter) -> Vec<DayBucket<'a>> {
    let days: Vec<Day> = match &filter.day {
        Axis::Any => Day::ALL.to_vec(),
        Axis::Is(day) => vec![*day],
        Axis::Unknown(_) => Vec::new(),
    };

    days.into_iter()
        .map(|day| DayBucket {
            day,
            entries: apply(week.day(day), filter),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassFilter {
    pub style: Axis<Style>,
    pub level: Axis<Level>,
}

impl ClassFilter {
    pub fn parse(style: Option<&str>, level: Option<&str>) -> Self {
        Self {
            style: Axis::parse(style),
            level: Axis::parse(level),
        }
    }
}

impl Filter<ClassOffering> for ClassFilter {
    fn matches(&self, class: &ClassOffering) -> bool {
        self.style.matches(class.style) && self.level.matches(class.level)
    }
}

impl Selection for ClassFilter {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        push_axis(&mut pairs, "style", &self.style);
        push_axis(&mut pairs, "level", &self.level);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFilter {
    pub category: Axis<GalleryCategory>,
}

impl GalleryFilter {
    pub fn parse(category: Option<&str>) -> Self {
        Self {
            category: Axis::parse(category),
        }
    }
}

impl Filter<GalleryImage> for GalleryFilter {
    fn matches(&self, image: &GalleryImage) -> bool {
        self.category.matches(image.category)
    }
}

impl Selection for GalleryFilter {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        push_axis(&mut pairs, "category", &self.category);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub category: Axis<PostCategory>,
    pub query: String,
}

impl NewsFilter {
    pub fn parse(category: Option<&str>, query: Option<&str>) -> Self {
        Self {
            category: Axis::parse(category),
            query: query.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    /// Case-insensitive substring match on title and excerpt. The body is not searched.
    pub fn matches_text(&self, post: &BlogPost) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle)
    }
}

impl Filter<BlogPost> for NewsFilter {
    fn matches(&self, post: &BlogPost) -> bool {
        self.category.matches(post.category) && self.matches_text(post)
    }
}

impl Selection for NewsFilter {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        push_axis(&mut pairs, "category", &self.category);
        if !self.query.is_empty() {
            pairs.push(("q", self.query.as_str()));
        }
        pairs
    }
}
