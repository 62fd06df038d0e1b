// Route exports
pub mod insights;
pub mod matching;
pub mod service;

use actix_cors::Cors;
use actix_web::{
    http::{header, Method},
    middleware::DefaultHeaders,
    web, HttpRequest, HttpResponse, Route,
};
use std::sync::Arc;

use crate::config::{CorsSettings, Settings};
use crate::core::SkillMatcher;
use crate::error::ApiError;
use crate::services::InsightService;

/// Methods advertised to cross-origin callers
pub const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: SkillMatcher,
    pub insights: Arc<InsightService>,
}

impl AppState {
    pub fn new(matcher: SkillMatcher, insights: InsightService) -> Self {
        Self {
            matcher,
            insights: Arc::new(insights),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            SkillMatcher::new(settings.matching.gap_advice_limit),
            InsightService::new(settings.insights.embedding_dimension),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SkillMatcher::default(), InsightService::default())
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(service::service_info))
            .route(preflight_route()),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(service::health_check))
            .route(preflight_route()),
    )
    .service(
        web::scope("/api/v1")
            .service(
                web::resource("/recommendations")
                    .route(web::post().to(insights::recommendations))
                    .route(preflight_route()),
            )
            .configure(configure_api),
    )
    // Legacy serverless paths
    .service(
        web::scope("/api/ai")
            .service(
                web::resource("")
                    .route(web::get().to(service::service_info))
                    .route(preflight_route()),
            )
            .service(
                web::resource("/health")
                    .route(web::get().to(service::health_check))
                    .route(preflight_route()),
            )
            .service(
                web::resource("/match")
                    .route(web::post().to(matching::match_skills))
                    .route(preflight_route()),
            )
            .service(
                web::resource("/recommendations")
                    .route(web::post().to(insights::legacy_recommendations))
                    .route(preflight_route()),
            )
            .configure(configure_api),
    );
}

/// Matching and insight endpoints shared by every API prefix
fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/match/skills")
            .route(web::post().to(matching::match_skills))
            .route(preflight_route()),
    )
    .service(
        web::resource("/embeddings/generate")
            .route(web::post().to(insights::generate_embeddings))
            .route(preflight_route()),
    )
    .service(
        web::resource("/analyze/resume")
            .route(web::post().to(insights::analyze_resume))
            .route(preflight_route()),
    );
}

fn preflight_route() -> Route {
    web::route().method(Method::OPTIONS).to(preflight)
}

/// Pre-flight response for callers that send OPTIONS without CORS request headers
///
/// Real CORS pre-flights are answered by the `Cors` middleware before they reach here.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS.join(", ")))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
        .finish()
}

/// Fallback for unknown paths
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Build the CORS middleware from configuration
///
/// Any method and any request header are accepted; only the origin list is configurable.
pub fn build_cors(settings: &CorsSettings) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(settings.max_age_secs);

    if settings.allows_any_origin() {
        cors = cors.allow_any_origin().send_wildcard();
    } else {
        for origin in &settings.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Headers added to every response that does not already carry them
///
/// With any origin allowed, `Access-Control-Allow-Origin: *` is sent even
/// when the request has no `Origin` header.
pub fn build_default_headers(settings: &CorsSettings) -> DefaultHeaders {
    let headers = DefaultHeaders::new();

    if settings.allows_any_origin() {
        headers.add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
    } else {
        headers
    }
}
