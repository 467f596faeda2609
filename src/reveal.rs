//! Fade/slide-in wrapper used by every listing on the site.
//!
//! Wrapped content is always rendered into the page; only its opacity and
//! offset animate. The embedded script reveals each wrapper the first time a
//! fifth of it scrolls into view and never hides it again.

use std::time::Duration;

use maud::{Markup, html};

/// Client-side half of the reveal: observes `.reveal` elements once.
pub const REVEAL_SCRIPT: &str = include_str!("../static/reveal.js");

/// Share of an element that must be visible before it animates in.
pub const VIEWPORT_THRESHOLD: f32 = 0.2;

const OFFSET_PX: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting offset `(x, y)` in pixels; the element animates to `(0, 0)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, OFFSET_PX),
            Direction::Down => (0, -OFFSET_PX),
            Direction::Left => (OFFSET_PX, 0),
            Direction::Right => (-OFFSET_PX, 0),
            Direction::None => (0, 0),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub direction: Direction,
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            delay: Duration::ZERO,
            duration: Duration::from_millis(600),
        }
    }
}

impl Reveal {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Per-index delay for items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub increment: Duration,
    /// Restart the stagger every `wrap` items so long lists stay snappy.
    pub wrap: Option<usize>,
}

impl Stagger {
    pub fn new(increment: Duration, wrap: Option<usize>) -> Self {
        Self { increment, wrap }
    }

    pub fn delay(&self, index: usize) -> Duration {
        let step = match self.wrap {
            Some(wrap) if wrap > 0 => index % wrap,
            _ => index,
        };
        self.increment * step as u32
    }

    /// The reveal for item `index`, starting from `base`.
    pub fn reveal(&self, base: Reveal, index: usize) -> Reveal {
        base.delay(base.delay + self.delay(index))
    }
}

pub fn reveal(settings: &Reveal, content: Markup) -> Markup {
    let (x, y) = settings.direction.offset();
    let style = format!(
        "--reveal-x: {x}px; --reveal-y: {y}px; transition-duration: {}ms; transition-delay: {}ms",
        settings.duration.as_millis(),
        settings.delay.as_millis()
    );
    html! {
        div.reveal
            data-reveal=(settings.direction.as_str())
            data-delay-ms=(settings.delay.as_millis().to_string())
            data-duration-ms=(settings.duration.as_millis().to_string())
            style=(style) {
            (content)
        }
    }
}

/// Renders `items` in order, each wrapped in a staggered reveal.
pub fn staggered<T>(
    items: &[T],
    stagger: &Stagger,
    base: Reveal,
    mut card: impl FnMut(&T) -> Markup,
) -> Markup {
    html! {
        @for (index, item) in items.iter().enumerate() {
            (reveal(&stagger.reveal(base, index), card(item)))
        }
    }
}
