// Service exports
pub mod insights;

pub use insights::{InsightService, ReasoningStyle, DEFAULT_EMBEDDING_DIMENSION};
