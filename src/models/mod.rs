// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{EmbeddingResult, InternshipRecommendation, MatchResult, ResumeAnalysis};
pub use requests::{
    decode_lenient, EmbeddingRequest, RecommendationRequest, ResumeAnalysisRequest,
    SkillMatchRequest,
};
pub use responses::{ErrorResponse, HealthResponse, ServiceInfoResponse};
