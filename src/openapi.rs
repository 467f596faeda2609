use utoipa::OpenApi;

use crate::filter::DayBucket;
use crate::models::{
    BlogPost, ClassOffering, Day, GalleryCategory, GalleryImage, Level, PostCategory,
    ScheduleEntry, Style,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::api_index,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::api_schedule,
        crate::handlers::api_classes,
        crate::handlers::api_gallery,
        crate::handlers::api_news,
        crate::handlers::schedule_ics
    ),
    components(schemas(
        DayBucket,
        ScheduleEntry,
        ClassOffering,
        GalleryImage,
        BlogPost,
        Day,
        Style,
        Level,
        GalleryCategory,
        PostCategory
    )),
    tags(
        (name = "site", description = "Service status"),
        (name = "schedule", description = "Weekly class timetable"),
        (name = "classes", description = "Class offerings"),
        (name = "gallery", description = "Studio photos"),
        (name = "news", description = "Studio news")
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_api_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/schedule",
            "/api/classes",
            "/api/gallery",
            "/api/news",
            "/classes/schedule.ics",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("DayBucket"));
    }
}
