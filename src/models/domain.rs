use serde::{Deserialize, Serialize};

use crate::core::MatchTier;

/// Result of matching a candidate's skills against a requirement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Coverage of the requirement, 0.0-1.0 with two decimals
    #[serde(rename = "match_score")]
    pub score: f64,
    /// Lowercase skills present on both sides, sorted
    pub matched_skills: Vec<String>,
    /// Lowercase required skills the candidate lacks, sorted
    pub skill_gaps: Vec<String>,
    /// Gap notice (if any) followed by exactly one tier message
    #[serde(rename = "recommendations")]
    pub advisories: Vec<String>,
    #[serde(skip)]
    pub tier: MatchTier,
}

/// Recommended internship for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipRecommendation {
    pub internship_id: String,
    pub match_score: f64,
    pub reasoning: String,
}

/// Outcome of an embedding generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResult {
    pub text: String,
    pub embedding_length: usize,
    pub status: String,
}

/// Skills and experience extracted from a resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub extracted_skills: Vec<String>,
    pub experience_level: String,
    pub suggested_roles: Vec<String>,
    pub confidence: f64,
}
