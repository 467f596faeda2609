//! Studio content: classes, timetable, gallery, news, shows.
//!
//! Everything here is literal data assembled once per process and shared
//! read-only by every request.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{
    BlogPost, ClassOffering, Day, GalleryCategory, GalleryImage, Level, PastProduction,
    PostCategory, PricingTier, ScheduleEntry, Show, Style, TeamMember, WeekSchedule, Workshop,
};

#[derive(Debug)]
pub struct Catalog {
    pub classes: Vec<ClassOffering>,
    pub schedule: WeekSchedule,
    pub gallery: Vec<GalleryImage>,
    pub posts: Vec<BlogPost>,
    pub workshops: Vec<Workshop>,
    pub productions: Vec<PastProduction>,
    pub shows: Vec<Show>,
    pub team: Vec<TeamMember>,
    pub pricing: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("gallery id {0} is used more than once")]
    DuplicateGalleryId(u32),
    #[error("gallery image at position {position} has id {id}")]
    GalleryIdOutOfSequence { position: usize, id: u32 },
    #[error("{kind} slug `{slug}` is used more than once")]
    DuplicateSlug { kind: &'static str, slug: &'static str },
    #[error("schedule entry `{name}` links to missing page {link}")]
    DeadScheduleLink { name: &'static str, link: &'static str },
}

static STUDIO: Lazy<Catalog> = Lazy::new(build_studio_catalog);

impl Catalog {
    pub fn studio() -> &'static Catalog {
        &STUDIO
    }

    pub fn class_by_slug(&self, slug: &str) -> Option<&ClassOffering> {
        self.classes.iter().find(|c| c.slug == slug)
    }

    pub fn show_by_slug(&self, slug: &str) -> Option<&Show> {
        self.shows.iter().find(|s| s.slug == slug)
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn classes_in_style(&self, style: Style) -> impl Iterator<Item = &ClassOffering> {
        self.classes.iter().filter(move |c| c.style == style)
    }

    /// Integrity problems in the content. Empty for well-formed data.
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen_ids = HashSet::new();
        for (position, image) in self.gallery.iter().enumerate() {
            if !seen_ids.insert(image.id) {
                issues.push(CatalogIssue::DuplicateGalleryId(image.id));
            } else if image.id as usize != position + 1 {
                issues.push(CatalogIssue::GalleryIdOutOfSequence {
                    position,
                    id: image.id,
                });
            }
        }

        duplicate_slugs("class", self.classes.iter().map(|c| c.slug), &mut issues);
        duplicate_slugs("post", self.posts.iter().map(|p| p.slug), &mut issues);
        duplicate_slugs("show", self.shows.iter().map(|s| s.slug), &mut issues);

        for entry in self.schedule.entries() {
            let target = entry
                .link
                .strip_prefix("/classes/")
                .and_then(|rest| rest.parse::<Style>().ok());
            if target.is_none() {
                issues.push(CatalogIssue::DeadScheduleLink {
                    name: entry.name,
                    link: entry.link,
                });
            }
        }

        issues
    }
}

fn duplicate_slugs(
    kind: &'static str,
    slugs: impl Iterator<Item = &'static str>,
    issues: &mut Vec<CatalogIssue>,
) {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            issues.push(CatalogIssue::DuplicateSlug { kind, slug });
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("catalog dates are valid")
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("catalog times are valid")
}

fn build_studio_catalog() -> Catalog {
    Catalog {
        classes: classes(),
        schedule: WeekSchedule::new(schedule_entries()),
        gallery: gallery(),
        posts: posts(),
        workshops: workshops(),
        productions: productions(),
        shows: shows(),
        team: team(),
        pricing: pricing(),
    }
}

fn classes() -> Vec<ClassOffering> {
    vec![
        ClassOffering {
            slug: "ballet-foundations",
            name: "Ballet Foundations",
            style: Style::Ballet,
            level: Level::Beginner,
            ages: "Ages 7-12",
            schedule_slots: &["Monday 4:30 PM", "Wednesday 4:30 PM"],
            description: "Barre work, posture and the first positions, taught with patience and a lot of fun.",
            image: "/images/classes/ballet-foundations.jpg",
        },
        ClassOffering {
            slug: "adult-ballet",
            name: "Adult Ballet",
            style: Style::Ballet,
            level: Level::AllLevels,
            ages: "Adults 16+",
            schedule_slots: &["Tuesday 7:00 PM", "Saturday 10:00 AM"],
            description: "Classical technique for grown-ups, whether you trained as a child or never set foot in a studio.",
            image: "/images/classes/adult-ballet.jpg",
        },
        ClassOffering {
            slug: "pointe-prep",
            name: "Pointe Preparation",
            style: Style::Ballet,
            level: Level::Advanced,
            ages: "Ages 12+",
            schedule_slots: &["Thursday 6:00 PM"],
            description: "Strength and placement work for dancers moving toward pointe, by teacher recommendation.",
            image: "/images/classes/pointe-prep.jpg",
        },
        ClassOffering {
            slug: "contemporary-flow",
            name: "Contemporary Flow",
            style: Style::Contemporary,
            level: Level::Intermediate,
            ages: "Teens & Adults",
            schedule_slots: &["Monday 6:30 PM", "Thursday 7:15 PM"],
            description: "Floor work, release technique and improvisation built around a new phrase each month.",
            image: "/images/classes/contemporary-flow.jpg",
        },
        ClassOffering {
            slug: "jazz-basics",
            name: "Jazz Basics",
            style: Style::Jazz,
            level: Level::Beginner,
            ages: "Ages 9-14",
            schedule_slots: &["Tuesday 5:00 PM"],
            description: "Isolations, turns and leaps set to music the kids actually want to dance to.",
            image: "/images/classes/jazz-basics.jpg",
        },
        ClassOffering {
            slug: "jazz-company",
            name: "Jazz Company",
            style: Style::Jazz,
            level: Level::Advanced,
            ages: "Ages 13+",
            schedule_slots: &["Friday 6:00 PM"],
            description: "Performance-focused choreography class for our competition and showcase team.",
            image: "/images/classes/jazz-company.jpg",
        },
        ClassOffering {
            slug: "tap-together",
            name: "Tap Together",
            style: Style::Tap,
            level: Level::AllLevels,
            ages: "All ages",
            schedule_slots: &["Wednesday 6:00 PM"],
            description: "Rhythm, shuffles and time steps for families and friends who want to make some noise.",
            image: "/images/classes/tap-together.jpg",
        },
        ClassOffering {
            slug: "creative-movement",
            name: "Creative Movement",
            style: Style::Creative,
            level: Level::AllLevels,
            ages: "Ages 3-6",
            schedule_slots: &["Saturday 9:00 AM", "Wednesday 3:45 PM"],
            description: "Imaginative play, rhythm games and simple steps for our youngest dancers.",
            image: "/images/classes/creative-movement.jpg",
        },
        ClassOffering {
            slug: "dance-cardio",
            name: "Dance Cardio",
            style: Style::Fitness,
            level: Level::AllLevels,
            ages: "Adults",
            schedule_slots: &["Monday 7:45 AM", "Friday 12:15 PM"],
            description: "A sweaty, joyful hour of easy-to-follow choreography. No experience needed.",
            image: "/images/classes/dance-cardio.jpg",
        },
        ClassOffering {
            slug: "barre-sculpt",
            name: "Barre Sculpt",
            style: Style::Fitness,
            level: Level::Intermediate,
            ages: "Adults",
            schedule_slots: &["Thursday 9:30 AM"],
            description: "Ballet-inspired conditioning with small, precise movements and lots of burn.",
            image: "/images/classes/barre-sculpt.jpg",
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn slot(
    day: Day,
    name: &'static str,
    style: Style,
    level: Level,
    time: NaiveTime,
    duration_min: u32,
    instructor: &'static str,
    room: &'static str,
) -> ScheduleEntry {
    let link = match style {
        Style::Ballet => "/classes/ballet",
        Style::Contemporary => "/classes/contemporary",
        Style::Jazz => "/classes/jazz",
        Style::Tap => "/classes/tap",
        Style::Creative => "/classes/creative",
        Style::Fitness => "/classes/fitness",
    };
    ScheduleEntry {
        day,
        name,
        style,
        level,
        time,
        duration_min,
        instructor,
        room,
        link,
    }
}

fn schedule_entries() -> Vec<ScheduleEntry> {
    use Day::*;

    vec![
        slot(
            Monday,
            "Dance Cardio",
            Style::Fitness,
            Level::AllLevels,
            at(7, 45),
            60,
            "Priya Natarajan",
            "Studio B",
        ),
        slot(
            Monday,
            "Ballet Foundations",
            Style::Ballet,
            Level::Beginner,
            at(16, 30),
            60,
            "Elena Morozova",
            "Studio A",
        ),
        slot(
            Monday,
            "Contemporary Flow",
            Style::Contemporary,
            Level::Intermediate,
            at(18, 30),
            75,
            "Marcus Bell",
            "Studio A",
        ),
        slot(
            Tuesday,
            "Jazz Basics",
            Style::Jazz,
            Level::Beginner,
            at(17, 0),
            60,
            "Dana Whitfield",
            "Studio B",
        ),
        slot(
            Tuesday,
            "Adult Ballet",
            Style::Ballet,
            Level::AllLevels,
            at(19, 0),
            75,
            "Elena Morozova",
            "Studio A",
        ),
        slot(
            Wednesday,
            "Creative Movement",
            Style::Creative,
            Level::AllLevels,
            at(15, 45),
            45,
            "Sofia Ruiz",
            "Studio B",
        ),
        slot(
            Wednesday,
            "Ballet Foundations",
            Style::Ballet,
            Level::Beginner,
            at(16, 30),
            60,
            "Elena Morozova",
            "Studio A",
        ),
        slot(
            Wednesday,
            "Tap Together",
            Style::Tap,
            Level::AllLevels,
            at(18, 0),
            60,
            "James Okafor",
            "Studio B",
        ),
        slot(
            Thursday,
            "Barre Sculpt",
            Style::Fitness,
            Level::Intermediate,
            at(9, 30),
            60,
            "Priya Natarajan",
            "Studio A",
        ),
        slot(
            Thursday,
            "Pointe Preparation",
            Style::Ballet,
            Level::Advanced,
            at(18, 0),
            60,
            "Elena Morozova",
            "Studio A",
        ),
        slot(
            Thursday,
            "Contemporary Flow",
            Style::Contemporary,
            Level::Intermediate,
            at(19, 15),
            75,
            "Marcus Bell",
            "Studio B",
        ),
        slot(
            Friday,
            "Dance Cardio",
            Style::Fitness,
            Level::AllLevels,
            at(12, 15),
            45,
            "Priya Natarajan",
            "Studio B",
        ),
        slot(
            Friday,
            "Jazz Company",
            Style::Jazz,
            Level::Advanced,
            at(18, 0),
            90,
            "Dana Whitfield",
            "Studio A",
        ),
        slot(
            Saturday,
            "Creative Movement",
            Style::Creative,
            Level::AllLevels,
            at(9, 0),
            45,
            "Sofia Ruiz",
            "Studio B",
        ),
        slot(
            Saturday,
            "Adult Ballet",
            Style::Ballet,
            Level::AllLevels,
            at(10, 0),
            75,
            "Elena Morozova",
            "Studio A",
        ),
        slot(
            Saturday,
            "Open Contemporary Lab",
            Style::Contemporary,
            Level::Advanced,
            at(11, 30),
            90,
            "Marcus Bell",
            "Studio A",
        ),
    ]
}

fn gallery() -> Vec<GalleryImage> {
    use GalleryCategory::*;

    let items: [(&str, &str, GalleryCategory); 12] = [
        (
            "/images/gallery/spring-showcase-1.jpg",
            "Dancers bowing at the spring showcase",
            Performances,
        ),
        ("/images/gallery/creative-movement.jpg", "Preschoolers spinning with scarves", Classes),
        ("/images/gallery/studio-a.jpg", "Studio A with sprung floor and mirrors", Studio),
        (
            "/images/gallery/nutcracker-snow.jpg",
            "Snow scene from the winter Nutcracker",
            Performances,
        ),
        ("/images/gallery/open-house.jpg", "Families at the autumn open house", Events),
        ("/images/gallery/tap-together.jpg", "Parents and kids in Tap Together", Classes),
        ("/images/gallery/lobby.jpg", "The front lobby and costume wall", Studio),
        ("/images/gallery/street-fair.jpg", "Jazz Company performing at the street fair", Events),
        ("/images/gallery/contemporary-duet.jpg", "A contemporary duet in rehearsal", Performances),
        ("/images/gallery/adult-ballet.jpg", "Adult ballet class at the barre", Classes),
        ("/images/gallery/studio-b.jpg", "Studio B set up for dance cardio", Studio),
        ("/images/gallery/fundraiser-gala.jpg", "Guests at the annual fundraiser gala", Events),
    ];

    items
        .into_iter()
        .enumerate()
        .map(|(i, (src, alt, category))| GalleryImage {
            id: i as u32 + 1,
            src,
            alt,
            category,
        })
        .collect()
}

fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Fall Registration Is Open",
            date: date(2025, 8, 4),
            excerpt: "Our fall term starts September 8th. Here is everything new on the timetable.",
            content: "We have added a second Creative Movement session on Wednesdays and a new Open Contemporary Lab on Saturday mornings. Returning families get priority placement until August 20th, after which registration opens to everyone. As always, your first class is free.",
            image: "/images/news/fall-registration.jpg",
            author: "Elena Morozova",
            category: PostCategory::StudioNews,
            slug: "fall-registration-open",
        },
        BlogPost {
            id: 2,
            title: "Behind the Scenes of Winter Dreams",
            date: date(2025, 7, 21),
            excerpt: "Costumes, cues and a very large paper moon: how our winter production comes together.",
            content: "Every December production starts in July with a stack of sketches. This year our costume volunteers are sewing forty snowflake skirts, and the Jazz Company is learning choreography set by guest artist Tomas Reyes. Tickets go on sale in October.",
            image: "/images/news/winter-dreams.jpg",
            author: "Marcus Bell",
            category: PostCategory::Performances,
            slug: "behind-the-scenes-winter-dreams",
        },
        BlogPost {
            id: 3,
            title: "Summer Intensive Recap",
            date: date(2025, 7, 2),
            excerpt: "Two weeks, sixty dancers and one unforgettable final sharing.",
            content: "Thank you to everyone who joined the summer intensive. Our dancers took daily technique, repertory and composition classes, finishing with a sharing for families in Studio A. Photos are now up in the gallery.",
            image: "/images/news/summer-intensive.jpg",
            author: "Dana Whitfield",
            category: PostCategory::Workshops,
            slug: "summer-intensive-recap",
        },
        BlogPost {
            id: 4,
            title: "Dancing at the Riverside Street Fair",
            date: date(2025, 6, 15),
            excerpt: "Catch the Jazz Company and Tap Together on the main stage this Saturday.",
            content: "We are back at the Riverside Street Fair with two sets on the main stage at 1 PM and 3 PM. Stop by our booth for free mini-lessons and a chance to win a month of classes.",
            image: "/images/news/street-fair.jpg",
            author: "James Okafor",
            category: PostCategory::Community,
            slug: "riverside-street-fair",
        },
        BlogPost {
            id: 5,
            title: "Welcome, Priya!",
            date: date(2025, 5, 30),
            excerpt: "Meet our new fitness instructor and the brains behind Barre Sculpt.",
            content: "Priya Natarajan joins us from Chicago, where she taught dance fitness for eight years. She will lead Dance Cardio and our brand new Barre Sculpt class. Say hello in the lobby!",
            image: "/images/news/welcome-priya.jpg",
            author: "Elena Morozova",
            category: PostCategory::StudioNews,
            slug: "welcome-priya",
        },
    ]
}

fn workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            title: "Musical Theatre Weekend",
            date: date(2025, 10, 11),
            time: "10:00 AM - 3:00 PM",
            instructor: "Tomas Reyes",
            location: "Studio A",
            description: "Two days of Broadway-style jazz, acting through song and audition tips.",
            price: "$85",
        },
        Workshop {
            title: "Partnering Basics for Adults",
            date: date(2025, 11, 8),
            time: "1:00 PM - 4:00 PM",
            instructor: "Marcus Bell",
            location: "Studio B",
            description: "Weight sharing, lifts and trust exercises in a relaxed, supportive room.",
            price: "$40",
        },
        Workshop {
            title: "Injury Prevention for Dancers",
            date: date(2026, 1, 17),
            time: "11:00 AM - 12:30 PM",
            instructor: "Dr. Hannah Lee",
            location: "Studio A",
            description: "A physiotherapist-led session on warm-ups, ankles and knees.",
            price: "Free",
        },
    ]
}

fn productions() -> Vec<PastProduction> {
    vec![
        PastProduction {
            title: "The Nutcracker",
            year: 2024,
            date: "December 13-15, 2024",
            venue: "Riverbend Community Theatre",
            description: "Our tenth Nutcracker, with more than ninety dancers aged four to seventy.",
            image: "/images/shows/nutcracker-2024.jpg",
        },
        PastProduction {
            title: "Spring Showcase: Colors",
            year: 2024,
            date: "May 18, 2024",
            venue: "Lincoln High School Auditorium",
            description: "Every class took the stage in a celebration of color and movement.",
            image: "/images/shows/colors-2024.jpg",
        },
        PastProduction {
            title: "Alice in Wonderland",
            year: 2023,
            date: "December 8-10, 2023",
            venue: "Riverbend Community Theatre",
            description: "A whimsical full-length ballet featuring our largest cast yet.",
            image: "/images/shows/alice-2023.jpg",
        },
    ]
}

fn shows() -> Vec<Show> {
    vec![
        Show {
            slug: "winter-dreams",
            title: "Winter Dreams",
            date: date(2025, 12, 12),
            time: "7:00 PM",
            venue: "Riverbend Community Theatre",
            description: "A holiday production of ballet, jazz and tap vignettes under a giant paper moon.",
            ticket_price: "$18 adults / $12 students",
        },
        Show {
            slug: "spring-showcase",
            title: "Spring Showcase",
            date: date(2026, 5, 16),
            time: "2:00 PM",
            venue: "Lincoln High School Auditorium",
            description: "Our end-of-year performance featuring every class in the studio.",
            ticket_price: "$10",
        },
    ]
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Elena Morozova",
            role: "Artistic Director, Ballet",
            bio: "Trained at the Perm State Choreographic School and danced with regional companies for twelve years before founding the studio.",
        },
        TeamMember {
            name: "Marcus Bell",
            role: "Contemporary",
            bio: "Choreographer and teaching artist whose work has been shown at festivals across the Midwest.",
        },
        TeamMember {
            name: "Dana Whitfield",
            role: "Jazz & Company Director",
            bio: "Former cruise-line and regional theatre performer who now coaches our Jazz Company.",
        },
        TeamMember {
            name: "James Okafor",
            role: "Tap",
            bio: "Rhythm tap dancer and drummer who believes everyone can learn a time step.",
        },
        TeamMember {
            name: "Sofia Ruiz",
            role: "Creative Movement",
            bio: "Early-childhood educator with a gift for turning a room of toddlers into a flock of butterflies.",
        },
        TeamMember {
            name: "Priya Natarajan",
            role: "Dance Fitness",
            bio: "Certified fitness instructor bringing high-energy, low-pressure cardio to the studio.",
        },
    ]
}

fn pricing() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Drop-In",
            price: "$18",
            period: "per class",
            features: &["Any open-level class", "No commitment", "Pay at the front desk"],
            highlighted: false,
        },
        PricingTier {
            name: "Monthly",
            price: "$65",
            period: "per month",
            features: &[
                "One class per week",
                "Recital participation",
                "10% off workshops",
            ],
            highlighted: true,
        },
        PricingTier {
            name: "Unlimited",
            price: "$140",
            period: "per month",
            features: &[
                "Unlimited classes",
                "Free workshops",
                "Priority show casting",
                "Family discount available",
            ],
            highlighted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    #[test]
    fn test_studio_catalog_is_consistent() {
        assert_eq!(Catalog::studio().check(), Vec::new());
    }

    #[test]
    fn test_sunday_is_empty() {
        let catalog = Catalog::studio();
        assert!(catalog.schedule.day(Day::Sunday).is_empty());
        for day in &Day::ALL[..6] {
            assert!(!catalog.schedule.day(*day).is_empty(), "{day} should have classes");
        }
    }

    #[test]
    fn test_every_style_has_a_class() {
        let catalog = Catalog::studio();
        for style in Style::ALL {
            assert!(catalog.classes_in_style(*style).next().is_some(), "{style}");
        }
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalog = Catalog::studio();
        assert_eq!(catalog.show_by_slug("winter-dreams").unwrap().title, "Winter Dreams");
        assert!(catalog.post_by_slug("welcome-priya").is_some());
        assert!(catalog.class_by_slug("jazz-company").is_some());
        assert!(catalog.show_by_slug("missing").is_none());
    }

    #[test]
    fn test_check_reports_problems() {
        let mut catalog = build_studio_catalog();
        catalog.gallery[3].id = 1;
        let dup = catalog.posts[0].clone();
        catalog.posts.push(dup);
        catalog.schedule = WeekSchedule::new(vec![ScheduleEntry {
            link: "/classes/salsa",
            ..catalog.schedule.day(Day::Monday)[0].clone()
        }]);

        let issues = catalog.check();
        assert!(issues.contains(&CatalogIssue::DuplicateGalleryId(1)));
        assert!(issues.contains(&CatalogIssue::DuplicateSlug {
            kind: "post",
            slug: "fall-registration-open",
        }));
        assert!(issues.contains(&CatalogIssue::DeadScheduleLink {
            name: "Dance Cardio",
            link: "/classes/salsa",
        }));
    }
}
