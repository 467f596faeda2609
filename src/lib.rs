pub mod catalog;
pub mod error;
pub mod filter;
pub mod forms;
pub mod handlers;
pub mod ical;
pub mod models;
pub mod openapi;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod settings;
pub mod sitemap;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use handlers::{
    about, api_classes, api_gallery, api_index, api_news, api_schedule, archive, class_style,
    classes, contact_form, contact_submit, gallery, healthz_live, healthz_ready, home, mission,
    news, news_post, not_found, pricing, privacy, register_form, register_submit, schedule,
    schedule_ics, show, shows, sitemap_page, sitemap_xml, studio, team, terms, workshops,
};
use http::Method;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::Catalog;
use crate::forms::SimulatedSubmitter;
use crate::ical::ScheduleExporter;
use crate::openapi::ApiDoc;
use crate::pages::Site;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub site: Arc<Site>,
    pub catalog: &'static Catalog,
    pub submitter: Arc<SimulatedSubmitter>,
    pub exporter: Arc<ScheduleExporter>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            site: Arc::new(Site::from_settings(&settings)),
            catalog: Catalog::studio(),
            submitter: Arc::new(SimulatedSubmitter::new(Duration::from_millis(
                settings.submit_delay_ms,
            ))),
            exporter: Arc::new(ScheduleExporter::new(
                &settings.studio_name,
                settings.timezone,
                settings.site_url.clone(),
            )),
            settings,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState::new(settings);
    for issue in state.catalog.check() {
        warn!("catalog: {issue}");
    }

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting {} on {addr}", state.settings.studio_name);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let api = Router::new()
        .route("/api", get(api_index))
        .route("/api/schedule", get(api_schedule))
        .route("/api/classes", get(api_classes))
        .route("/api/gallery", get(api_gallery))
        .route("/api/news", get(api_news))
        .route("/classes/schedule.ics", get(schedule_ics))
        .layer(cors);

    let mut router = Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/about/team", get(team))
        .route("/about/mission", get(mission))
        .route("/classes", get(classes))
        .route("/classes/schedule", get(schedule))
        .route("/classes/pricing", get(pricing))
        .route("/classes/register", get(register_form).post(register_submit))
        .route("/classes/{style}", get(class_style))
        .route("/studio", get(studio))
        .route("/shows", get(shows))
        .route("/shows/archive", get(archive))
        .route("/shows/workshops", get(workshops))
        .route("/shows/{slug}", get(show))
        .route("/gallery", get(gallery))
        .route("/news", get(news))
        .route("/news/{slug}", get(news_post))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/privacy-policy", get(privacy))
        .route("/terms", get(terms))
        .route("/sitemap", get(sitemap_page))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .merge(api)
        .fallback(not_found)
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
