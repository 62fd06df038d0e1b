use serde_json::Value;

use crate::core::{
    scoring::{coverage_hundredths, MatchTier},
    skills::SkillSet,
};
use crate::error::MatchError;
use crate::models::MatchResult;

/// Default number of gap skills named in the "Consider learning" advisory
pub const DEFAULT_GAP_ADVICE_LIMIT: usize = 3;

/// Skill matcher - compares a candidate's skills against a requirement
///
/// # Steps
/// 1. Lowercase both lists into skill sets
/// 2. Intersect (matched) and subtract (gaps)
/// 3. Score coverage of the requirement, rounded half-up to two decimals
/// 4. Derive advisories from the gaps and the tier of the unrounded coverage
///
/// The matcher holds no mutable state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    gap_advice_limit: usize,
}

impl SkillMatcher {
    pub fn new(gap_advice_limit: usize) -> Self {
        Self { gap_advice_limit }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_GAP_ADVICE_LIMIT)
    }

    pub fn gap_advice_limit(&self) -> usize {
        self.gap_advice_limit
    }

    /// Match a candidate's skills against a requirement
    ///
    /// # Arguments
    /// * `candidate_skills` - Skills the candidate has
    /// * `required_skills` - Skills the internship or job asks for
    ///
    /// # Returns
    /// MatchResult with sorted matched/gap lists and ordered advisories
    pub fn match_skills<C, R>(&self, candidate_skills: &[C], required_skills: &[R]) -> MatchResult
    where
        C: AsRef<str>,
        R: AsRef<str>,
    {
        let candidate: SkillSet = candidate_skills.iter().collect();
        let required: SkillSet = required_skills.iter().collect();

        self.match_sets(&candidate, &required)
    }

    /// Match skill lists decoded straight from JSON
    ///
    /// Fails with `MatchError::InvalidInput` if any entry is not a string.
    pub fn match_values(
        &self,
        candidate_skills: &[Value],
        required_skills: &[Value],
    ) -> Result<MatchResult, MatchError> {
        let candidate = SkillSet::try_from_values("student_skills", candidate_skills)?;
        let required = SkillSet::try_from_values("internship_skills", required_skills)?;

        Ok(self.match_sets(&candidate, &required))
    }

    /// Match two already-normalized skill sets
    pub fn match_sets(&self, candidate: &SkillSet, required: &SkillSet) -> MatchResult {
        let matched_skills = candidate.intersection(required);
        let skill_gaps = required.difference(candidate);

        let hundredths = coverage_hundredths(matched_skills.len(), required.len());
        let tier = MatchTier::from_ratio(matched_skills.len(), required.len());

        let mut advisories = Vec::with_capacity(2);
        if !skill_gaps.is_empty() {
            advisories.push(self.gap_advisory(&skill_gaps));
        }
        advisories.push(tier.message().to_string());

        MatchResult {
            score: hundredths as f64 / 100.0,
            matched_skills,
            skill_gaps,
            advisories,
            tier,
        }
    }

    /// "Consider learning" advisory naming the first gaps in sorted order
    fn gap_advisory(&self, skill_gaps: &[String]) -> String {
        let shown: Vec<&str> = skill_gaps
            .iter()
            .take(self.gap_advice_limit)
            .map(String::as_str)
            .collect();

        format!("Consider learning: {}", shown.join(", "))
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_requirement() {
        let matcher = SkillMatcher::with_defaults();

        let empty: Vec<String> = vec![];
        let result = matcher.match_skills(&empty, &empty);
        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.skill_gaps.is_empty());

        let result = matcher.match_skills(&skills(&["python"]), &empty);
        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.skill_gaps.is_empty());
        assert_eq!(
            result.advisories,
            vec!["Focus on building required skills first."]
        );
    }

    #[test]
    fn test_full_match() {
        let matcher = SkillMatcher::with_defaults();

        let result = matcher.match_skills(&["Python", "SQL"], &["python", "sql"]);

        assert_eq!(result.score, 1.0);
        assert_eq!(result.matched_skills, skills(&["python", "sql"]));
        assert!(result.skill_gaps.is_empty());
        assert_eq!(result.advisories, vec!["Strong match! Apply with confidence."]);
        assert_eq!(result.tier, MatchTier::Strong);
    }

    #[test]
    fn test_partial_match_with_gaps() {
        let matcher = SkillMatcher::with_defaults();

        let result = matcher.match_skills(&["python"], &["python", "react", "sql", "docker"]);

        assert_eq!(result.score, 0.25);
        assert_eq!(result.matched_skills, skills(&["python"]));
        assert_eq!(result.skill_gaps, skills(&["docker", "react", "sql"]));
        assert_eq!(result.advisories.len(), 2);
        assert_eq!(result.advisories[0], "Consider learning: docker, react, sql");
        assert_eq!(result.advisories[1], "Focus on building required skills first.");
    }

    #[test]
    fn test_gap_advisory_truncates_sorted_gaps() {
        let matcher = SkillMatcher::with_defaults();

        let result = matcher.match_skills(&["go"], &["rust", "kafka", "aws", "go", "docker"]);

        assert_eq!(result.skill_gaps, skills(&["aws", "docker", "kafka", "rust"]));
        assert_eq!(result.advisories[0], "Consider learning: aws, docker, kafka");
    }

    #[test]
    fn test_custom_gap_advice_limit() {
        let matcher = SkillMatcher::new(1);

        let result = matcher.match_skills(&Vec::<String>::new(), &["sql", "css"]);

        assert_eq!(result.advisories[0], "Consider learning: css");
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = SkillMatcher::with_defaults();

        let result = matcher.match_skills(&["PYTHON"], &["python"]);

        assert_eq!(result.matched_skills, skills(&["python"]));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_match_values_rejects_non_string() {
        let matcher = SkillMatcher::with_defaults();

        let candidate = vec![json!("python"), json!(true)];
        let required = vec![json!("python")];

        let err = matcher.match_values(&candidate, &required).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(_)));
    }

    #[test]
    fn test_match_values_agrees_with_match_skills() {
        let matcher = SkillMatcher::with_defaults();

        let from_values = matcher
            .match_values(&[json!("Rust"), json!("SQL")], &[json!("rust"), json!("go")])
            .unwrap();
        let from_strings = matcher.match_skills(&["Rust", "SQL"], &["rust", "go"]);

        assert_eq!(from_values, from_strings);
    }
}
