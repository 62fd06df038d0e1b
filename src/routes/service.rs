use actix_web::HttpResponse;

use crate::models::{HealthResponse, ServiceInfoResponse};

pub const SERVICE_NAME: &str = "SIP AI Engine";

const ENDPOINTS: [&str; 6] = [
    "GET / - Service info",
    "GET /health - Health check",
    "POST /api/v1/match/skills - Skill matching",
    "POST /api/v1/recommendations - Get recommendations",
    "POST /api/v1/embeddings/generate - Generate embeddings",
    "POST /api/v1/analyze/resume - Analyze resume",
];

/// Service info endpoint
pub async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfoResponse {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_cover_matching() {
        assert!(ENDPOINTS.iter().any(|e| e.contains("/api/v1/match/skills")));
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, "1.0.0");
    }
}
