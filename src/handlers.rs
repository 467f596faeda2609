use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::{
    AppState,
    error::{ApiError, PageError},
    filter::{
        Axis, ClassFilter, DayBucket, GalleryFilter, NewsFilter, ScheduleFilter, apply,
        filter_week,
    },
    forms::{ContactForm, FormFields, FormFlow, FormPhase, FormTimings, RegistrationForm},
    models::{BlogPost, ClassOffering, GalleryImage, Style},
    pages::{self, forms::FormView},
    routes, sitemap,
    validation::{validate_search, validate_slug},
};

#[derive(Debug, Default, serde::Deserialize)]
pub struct ScheduleQuery {
    pub day: Option<String>,
    pub style: Option<String>,
    pub level: Option<String>,
}

impl ScheduleQuery {
    fn filter(&self) -> ScheduleFilter {
        ScheduleFilter::parse(self.day.as_deref(), self.style.as_deref(), self.level.as_deref())
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ClassQuery {
    pub style: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct RegisterQuery {
    pub class: Option<String>,
}

type Page = Html<String>;

fn page(markup: maud::Markup) -> Page {
    Html(markup.into_string())
}

/// Monday of the current week in the studio's timezone.
fn current_monday(state: &AppState) -> NaiveDate {
    let today = Utc::now().with_timezone(&state.settings.timezone).date_naive();
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

// Pages

pub async fn home(State(state): State<AppState>) -> Page {
    page(pages::home::render(&state.site, state.catalog))
}

pub async fn about(State(state): State<AppState>) -> Page {
    page(pages::info::render_about(&state.site))
}

pub async fn team(State(state): State<AppState>) -> Page {
    page(pages::info::render_team(&state.site, &state.catalog.team))
}

pub async fn mission(State(state): State<AppState>) -> Page {
    page(pages::info::render_mission(&state.site))
}

pub async fn studio(State(state): State<AppState>) -> Page {
    page(pages::info::render_studio(&state.site))
}

pub async fn privacy(State(state): State<AppState>) -> Page {
    page(pages::info::render_privacy(&state.site))
}

pub async fn terms(State(state): State<AppState>) -> Page {
    page(pages::info::render_terms(&state.site))
}

pub async fn classes(State(state): State<AppState>, Query(query): Query<ClassQuery>) -> Page {
    let filter = ClassFilter::parse(query.style.as_deref(), query.level.as_deref());
    let classes = apply(&state.catalog.classes, &filter);
    page(pages::classes::render_index(&state.site, &classes, &filter))
}

pub async fn class_style(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let slug = validate_slug(&slug)?;
    let style: Style = slug
        .parse()
        .map_err(|_| ApiError::NotFound(format!("We don't teach a style called `{slug}`.")))?;

    let classes: Vec<_> = state.catalog.classes_in_style(style).collect();
    let in_style = ScheduleFilter {
        style: Axis::Is(style),
        ..Default::default()
    };
    let week = filter_week(&state.catalog.schedule, &in_style);
    Ok(page(pages::classes::render_style(&state.site, style, &classes, &week)))
}

pub async fn pricing(State(state): State<AppState>) -> Page {
    page(pages::classes::render_pricing(&state.site, &state.catalog.pricing))
}

pub async fn schedule(State(state): State<AppState>, Query(query): Query<ScheduleQuery>) -> Page {
    let filter = query.filter();
    let week = filter_week(&state.catalog.schedule, &filter);
    page(pages::schedule::render(&state.site, &week, &filter))
}

pub async fn shows(State(state): State<AppState>) -> Page {
    page(pages::shows::render_index(&state.site, &state.catalog.shows))
}

pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let slug = validate_slug(&slug)?;
    let show = state
        .catalog
        .show_by_slug(slug)
        .ok_or_else(|| ApiError::NotFound(format!("There is no show called `{slug}`.")))?;
    Ok(page(pages::shows::render_show(&state.site, show)))
}

pub async fn archive(State(state): State<AppState>) -> Page {
    page(pages::shows::render_archive(&state.site, &state.catalog.productions))
}

pub async fn workshops(State(state): State<AppState>) -> Page {
    page(pages::shows::render_workshops(&state.site, &state.catalog.workshops))
}

pub async fn gallery(State(state): State<AppState>, Query(query): Query<GalleryQuery>) -> Page {
    let filter = GalleryFilter::parse(query.category.as_deref());
    let images = apply(&state.catalog.gallery, &filter);
    page(pages::gallery::render(&state.site, &images, &filter))
}

pub async fn news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Page, PageError> {
    let q = validate_search(query.q.as_deref())?;
    let filter = NewsFilter::parse(query.category.as_deref(), q);
    let posts = apply(&state.catalog.posts, &filter);
    Ok(page(pages::news::render(&state.site, &posts, &filter)))
}

pub async fn news_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Page, PageError> {
    let slug = validate_slug(&slug)?;
    let post = state
        .catalog
        .post_by_slug(slug)
        .ok_or_else(|| ApiError::NotFound(format!("There is no story called `{slug}`.")))?;
    Ok(page(pages::news::render_post(&state.site, post)))
}

pub async fn sitemap_page(State(state): State<AppState>) -> Page {
    let links = routes::all_pages(state.catalog);
    page(pages::info::render_sitemap(&state.site, &links))
}

pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let links = routes::all_pages(state.catalog);
    let entries = sitemap::entries(&state.settings.site_url, &links).map_err(|err| {
        warn!("could not build sitemap urls: {err}");
        ApiError::Internal("Sitemap unavailable".into())
    })?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::to_xml(&entries),
    ))
}

pub async fn not_found() -> PageError {
    PageError(ApiError::NotFound(
        "We couldn't find that page. It may have moved.".into(),
    ))
}

// Forms

struct Outcome<F> {
    status: StatusCode,
    fields: F,
    phase: FormPhase,
    problem: Option<String>,
}

/// Runs one submission. The form comes back with the values it was sent
/// with; on success the page clears them together with the banner once the
/// reset delay passes.
async fn run_form<F: FormFields>(state: &AppState, fields: F) -> Outcome<F> {
    let timings = FormTimings {
        reset_delay: state.site.reset_after,
    };
    let mut flow = FormFlow::new(fields.clone(), timings);

    match flow.submit(state.submitter.as_ref()).await {
        Ok(_) => Outcome {
            status: StatusCode::OK,
            fields: flow.fields(),
            phase: flow.phase(),
            problem: None,
        },
        Err(err) => {
            debug!(form = F::NAME, "rejected: {err}");
            let phase = flow.phase();
            let err = ApiError::from(err);
            Outcome {
                status: err.status(),
                fields,
                problem: (phase == FormPhase::Idle).then(|| err.message().to_string()),
                phase,
            }
        }
    }
}

pub async fn contact_form(State(state): State<AppState>) -> Page {
    let fields = ContactForm::default();
    page(pages::forms::render_contact(
        &state.site,
        &FormView::new(&fields, &FormPhase::Idle),
    ))
}

pub async fn contact_submit(
    State(state): State<AppState>,
    Form(fields): Form<ContactForm>,
) -> impl IntoResponse {
    let outcome = run_form(&state, fields).await;
    let view = FormView {
        fields: &outcome.fields,
        phase: &outcome.phase,
        problem: outcome.problem.clone(),
    };
    (outcome.status, page(pages::forms::render_contact(&state.site, &view)))
}

pub async fn register_form(
    State(state): State<AppState>,
    Query(query): Query<RegisterQuery>,
) -> Page {
    let mut fields = RegistrationForm::default();
    if let Some(class) = query
        .class
        .as_deref()
        .and_then(|slug| state.catalog.class_by_slug(slug))
    {
        fields.class_slug = class.slug.to_string();
    }
    page(pages::forms::render_registration(
        &state.site,
        &FormView::new(&fields, &FormPhase::Idle),
        &state.catalog.classes,
    ))
}

pub async fn register_submit(
    State(state): State<AppState>,
    Form(fields): Form<RegistrationForm>,
) -> impl IntoResponse {
    let outcome = run_form(&state, fields).await;
    let view = FormView {
        fields: &outcome.fields,
        phase: &outcome.phase,
        problem: outcome.problem.clone(),
    };
    (
        outcome.status,
        page(pages::forms::render_registration(
            &state.site,
            &view,
            &state.catalog.classes,
        )),
    )
}

// Calendar

#[utoipa::path(
    get,
    path = "/classes/schedule.ics",
    params(
        ("style" = Option<String>, Query, description = "Dance style slug, e.g. `ballet`"),
        ("level" = Option<String>, Query, description = "Level slug, e.g. `beginner`")
    ),
    responses(
        (status = 200, description = "Weekly class schedule as recurring events", content_type = "text/calendar"),
        (status = 404, description = "No classes match the filter")
    ),
    tag = "schedule"
)]
pub async fn schedule_ics(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = ScheduleQuery {
        day: None,
        ..query
    }
    .filter();
    let week = filter_week(&state.catalog.schedule, &filter);

    let body = state.exporter.generate(&week, current_monday(&state));
    if body.is_empty() {
        return Err(ApiError::NotFound("No classes found".into()));
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=class_schedule.ics",
            ),
        ],
        body,
    ))
}

// JSON API

#[utoipa::path(get, path = "/api", tag = "site")]
pub async fn api_index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Studio site API",
        "endpoints": {
            "/api/schedule": "Weekly timetable grouped by day",
            "/api/classes": "Class offerings",
            "/api/gallery": "Gallery images",
            "/api/news": "News posts",
            "/classes/schedule.ics": "Weekly timetable as an iCalendar feed"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "site")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "site")]
pub async fn healthz_ready(State(state): State<AppState>) -> impl IntoResponse {
    let issues = state.catalog.check();
    if issues.is_empty() {
        (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
    } else {
        let issues: Vec<String> = issues.iter().map(ToString::to_string).collect();
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"status": "degraded", "issues": issues})),
        )
    }
}

#[utoipa::path(
    get,
    path = "/api/schedule",
    params(
        ("day" = Option<String>, Query, description = "Day slug, e.g. `monday`"),
        ("style" = Option<String>, Query, description = "Dance style slug"),
        ("level" = Option<String>, Query, description = "Level slug")
    ),
    responses(
        (status = 200, description = "Days in order, each with its matching classes", body = [DayBucket<'static>])
    ),
    tag = "schedule"
)]
pub async fn api_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> impl IntoResponse {
    Json(filter_week(&state.catalog.schedule, &query.filter()))
}

#[utoipa::path(
    get,
    path = "/api/classes",
    params(
        ("style" = Option<String>, Query, description = "Dance style slug"),
        ("level" = Option<String>, Query, description = "Level slug")
    ),
    responses((status = 200, description = "Matching classes", body = [ClassOffering])),
    tag = "classes"
)]
pub async fn api_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> impl IntoResponse {
    let filter = ClassFilter::parse(query.style.as_deref(), query.level.as_deref());
    Json(apply(&state.catalog.classes, &filter))
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    params(("category" = Option<String>, Query, description = "Gallery category slug")),
    responses((status = 200, description = "Matching images", body = [GalleryImage])),
    tag = "gallery"
)]
pub async fn api_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> impl IntoResponse {
    let filter = GalleryFilter::parse(query.category.as_deref());
    Json(apply(&state.catalog.gallery, &filter))
}

#[utoipa::path(
    get,
    path = "/api/news",
    params(
        ("category" = Option<String>, Query, description = "Post category slug"),
        ("q" = Option<String>, Query, description = "Case-insensitive search over title and excerpt (max 100 characters)")
    ),
    responses(
        (status = 200, description = "Matching posts", body = [BlogPost]),
        (status = 400, description = "Search text too long")
    ),
    tag = "news"
)]
pub async fn api_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let q = validate_search(query.q.as_deref())?;
    let filter = NewsFilter::parse(query.category.as_deref(), q);
    Ok(Json(apply(&state.catalog.posts, &filter)))
}
