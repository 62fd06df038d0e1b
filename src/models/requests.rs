use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// Upper bound on entries per skill list
pub const MAX_SKILLS_PER_LIST: u64 = 1000;

/// Request to match a student against an internship
///
/// Skill entries are kept as raw JSON so the matcher can reject non-text
/// entries instead of having them coerced during decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SkillMatchRequest {
    #[validate(length(max = MAX_SKILLS_PER_LIST))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_skills: Vec<Value>,
    #[validate(length(max = MAX_SKILLS_PER_LIST))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub internship_skills: Vec<Value>,
}

/// Request for personalized internship recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub student_id: Option<String>,
    #[validate(length(max = MAX_SKILLS_PER_LIST))]
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_skills: Vec<Value>,
    #[serde(default)]
    pub preferences: Option<Value>,
}

/// Request to generate an embedding for a piece of text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Request to analyze resume text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeAnalysisRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume_text: String,
}

/// Decode a JSON request body the forgiving way
///
/// Empty bodies, malformed JSON and anything that is not a JSON object are
/// all read as `{}`. Fields that are present but of the wrong shape are
/// still reported as errors.
pub fn decode_lenient<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(_) | Err(_) => {
            if !body.is_empty() {
                tracing::debug!("Request body is not a JSON object, treating it as empty");
            }
            Value::Object(serde_json::Map::new())
        }
    };

    serde_json::from_value(value)
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_body_is_empty_object() {
        let req: SkillMatchRequest = decode_lenient(b"{not json").unwrap();
        assert!(req.student_skills.is_empty());
        assert!(req.internship_skills.is_empty());

        let req: SkillMatchRequest = decode_lenient(b"").unwrap();
        assert!(req.student_skills.is_empty());

        let req: SkillMatchRequest = decode_lenient(b"[\"python\"]").unwrap();
        assert!(req.student_skills.is_empty());
    }

    #[test]
    fn test_null_and_missing_fields_are_empty() {
        let req: SkillMatchRequest =
            decode_lenient(br#"{"student_skills": null, "internship_skills": ["Go"]}"#).unwrap();

        assert!(req.student_skills.is_empty());
        assert_eq!(req.internship_skills, vec![json!("Go")]);
    }

    #[test]
    fn test_wrong_field_shape_is_an_error() {
        let result: Result<SkillMatchRequest, _> =
            decode_lenient(br#"{"student_skills": "python"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_skill_list_length_is_validated() {
        let req = SkillMatchRequest {
            student_skills: vec![json!("x"); MAX_SKILLS_PER_LIST as usize + 1],
            internship_skills: vec![],
        };
        assert!(req.validate().is_err());

        let req = SkillMatchRequest {
            student_skills: vec![json!("x"); 3],
            internship_skills: vec![json!("y")],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_embedding_request_defaults() {
        let req: EmbeddingRequest = decode_lenient(br#"{"text": null}"#).unwrap();
        assert_eq!(req.text, "");

        let req: EmbeddingRequest = decode_lenient(br#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
    }
}
