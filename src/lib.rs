//! SIP AI Engine - skill matching and recommendation service
//!
//! The core of this library is the skill matcher: it compares a student's
//! skills against an internship's required skills and reports coverage,
//! gaps and guidance. The HTTP layer is a thin actix-web binding around it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchTier, SkillMatcher, SkillSet};
pub use crate::error::{ApiError, MatchError};
pub use crate::models::{MatchResult, SkillMatchRequest};
