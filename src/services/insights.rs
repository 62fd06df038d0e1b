use crate::models::{
    EmbeddingResult, InternshipRecommendation, RecommendationRequest, ResumeAnalysis,
};

/// Default embedding dimension, matching the size of common hosted embedding models
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 1536;

/// Wording of the reasoning attached to recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningStyle {
    /// Names the skills behind each recommendation
    Detailed,
    /// Skill-agnostic wording served on the legacy `/api/ai` paths
    Generic,
}

/// Recommendation, embedding and resume-analysis backend
///
/// None of these are backed by a model yet: every call returns the same
/// fixed payload regardless of input. Callers get the final response shape
/// so clients can integrate against it today.
#[derive(Debug, Clone)]
pub struct InsightService {
    embedding_dimension: usize,
}

impl InsightService {
    pub fn new(embedding_dimension: usize) -> Self {
        Self { embedding_dimension }
    }

    pub fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    /// Personalized internship recommendations for a student
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        style: ReasoningStyle,
    ) -> Vec<InternshipRecommendation> {
        tracing::debug!(
            "Recommendations requested for student {:?} with {} skills (static results)",
            request.student_id,
            request.student_skills.len()
        );

        let (first, second) = match style {
            ReasoningStyle::Detailed => (
                "Strong match based on React and TypeScript skills",
                "Good fit for Python and ML background",
            ),
            ReasoningStyle::Generic => (
                "Strong match based on your skills",
                "Good fit for your background",
            ),
        };

        vec![
            InternshipRecommendation {
                internship_id: "mock-id-1".to_string(),
                match_score: 0.85,
                reasoning: first.to_string(),
            },
            InternshipRecommendation {
                internship_id: "mock-id-2".to_string(),
                match_score: 0.72,
                reasoning: second.to_string(),
            },
        ]
    }

    /// Generate an embedding for `text`
    pub fn generate_embedding(&self, text: &str) -> EmbeddingResult {
        tracing::debug!("Embedding requested for {} bytes of text", text.len());

        EmbeddingResult {
            text: text.to_string(),
            embedding_length: self.embedding_dimension,
            status: "generated".to_string(),
        }
    }

    /// Extract skills and experience from resume text
    pub fn analyze_resume(&self, resume_text: &str) -> ResumeAnalysis {
        tracing::debug!("Resume analysis requested for {} bytes of text", resume_text.len());

        ResumeAnalysis {
            extracted_skills: ["Python", "JavaScript", "React", "SQL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            experience_level: "Intermediate".to_string(),
            suggested_roles: vec![
                "Full Stack Developer".to_string(),
                "Backend Developer".to_string(),
            ],
            confidence: 0.82,
        }
    }
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSION)
    }
}
