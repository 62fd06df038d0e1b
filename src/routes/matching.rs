use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::{ApiError, MatchError};
use crate::models::{decode_lenient, SkillMatchRequest};
use crate::routes::AppState;

/// Skill matching endpoint
///
/// POST /api/v1/match/skills (also /api/ai/match)
///
/// Request body:
/// ```json
/// {
///   "student_skills": ["string"],
///   "internship_skills": ["string"]
/// }
/// ```
///
/// A missing or malformed body is read as `{}` and scores 0.0. Non-string
/// skill entries are rejected with 400.
pub async fn match_skills(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let req: SkillMatchRequest = decode_lenient(&body).map_err(|e| {
        tracing::info!("Rejected skill match request: {}", e);
        MatchError::InvalidInput(e.to_string())
    })?;

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_skills request: {:?}", errors);
        return Err(errors.into());
    }

    let result = state
        .matcher
        .match_values(&req.student_skills, &req.internship_skills)
        .map_err(|e| {
            tracing::info!("Rejected skill match request: {}", e);
            e
        })?;

    tracing::info!(
        "Matched {} of {} required skills (score: {:.2}, tier: {:?})",
        result.matched_skills.len(),
        result.matched_skills.len() + result.skill_gaps.len(),
        result.score,
        result.tier
    );

    Ok(HttpResponse::Ok().json(result))
}
