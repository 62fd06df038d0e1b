use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{decode_lenient, EmbeddingRequest, RecommendationRequest, ResumeAnalysisRequest};
use crate::routes::AppState;
use crate::services::ReasoningStyle;

fn malformed(err: serde_json::Error) -> ApiError {
    tracing::info!("Rejected request body: {}", err);
    ApiError::bad_request("invalid_input", err.to_string())
}

fn recommend(
    state: &AppState,
    body: &[u8],
    style: ReasoningStyle,
) -> Result<HttpResponse, ApiError> {
    let req: RecommendationRequest = decode_lenient(body).map_err(malformed)?;
    req.validate()?;

    Ok(HttpResponse::Ok().json(state.insights.recommend(&req, style)))
}

/// Personalized recommendations endpoint
///
/// POST /api/v1/recommendations
pub async fn recommendations(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    recommend(&state, &body, ReasoningStyle::Detailed)
}

/// Recommendations on the legacy path, with skill-agnostic reasoning
///
/// POST /api/ai/recommendations
pub async fn legacy_recommendations(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    recommend(&state, &body, ReasoningStyle::Generic)
}

/// Embedding generation endpoint
///
/// POST /api/v1/embeddings/generate
pub async fn generate_embeddings(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let req: EmbeddingRequest = decode_lenient(&body).map_err(malformed)?;

    Ok(HttpResponse::Ok().json(state.insights.generate_embedding(&req.text)))
}

/// Resume analysis endpoint
///
/// POST /api/v1/analyze/resume
pub async fn analyze_resume(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let req: ResumeAnalysisRequest = decode_lenient(&body).map_err(malformed)?;

    Ok(HttpResponse::Ok().json(state.insights.analyze_resume(&req.resume_text)))
}
