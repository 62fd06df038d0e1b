use serde_json::Value;
use std::collections::BTreeSet;

use crate::error::MatchError;

/// Case-insensitive set of skill labels
///
/// Entries are lowercased on insertion and nothing else: surrounding
/// whitespace and Unicode forms are preserved as given. Backed by an ordered
/// set so every list derived from it comes out sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: BTreeSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a skill set from JSON entries, rejecting anything that is not a string
    ///
    /// `list` names the field the entries came from and only feeds the error message.
    pub fn try_from_values(list: &str, values: &[Value]) -> Result<Self, MatchError> {
        let mut set = Self::new();
        for (index, value) in values.iter().enumerate() {
            set.insert(skill_text(list, index, value)?);
        }
        Ok(set)
    }

    pub fn insert(&mut self, skill: &str) -> bool {
        self.skills.insert(skill.to_lowercase())
    }

    #[inline]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(&skill.to_lowercase())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Skills present in both sets, in lexicographic order
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.skills.intersection(&other.skills).cloned().collect()
    }

    /// Skills in `self` that `other` lacks, in lexicographic order
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.skills.difference(&other.skills).cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for skill in iter {
            set.insert(skill.as_ref());
        }
        set
    }
}

/// Borrow a JSON entry as skill text
fn skill_text<'a>(list: &str, index: usize, value: &'a Value) -> Result<&'a str, MatchError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(MatchError::InvalidInput(format!(
            "{}[{}] must be a string, found {}",
            list,
            index,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lowercases_and_dedupes() {
        let set: SkillSet = ["Python", "PYTHON", "python", "SQL"].into_iter().collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains("python"));
        assert!(set.contains("Sql"));
    }

    #[test]
    fn test_preserves_whitespace() {
        let set: SkillSet = [" Rust", "rust"].into_iter().collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![" rust", "rust"]);
    }

    #[test]
    fn test_set_operations_are_sorted() {
        let candidate: SkillSet = ["sql", "python", "go"].into_iter().collect();
        let required: SkillSet = ["react", "python", "docker", "sql"].into_iter().collect();

        assert_eq!(candidate.intersection(&required), vec!["python", "sql"]);
        assert_eq!(required.difference(&candidate), vec!["docker", "react"]);
    }

    #[test]
    fn test_try_from_values_accepts_strings() {
        let values = vec![json!("React"), json!("react"), json!("")];
        let set = SkillSet::try_from_values("student_skills", &values).unwrap();

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["", "react"]);
    }

    #[test]
    fn test_try_from_values_rejects_non_text() {
        let values = vec![json!("python"), json!(42)];
        let err = SkillSet::try_from_values("internship_skills", &values).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid input: internship_skills[1] must be a string, found number"
        );
    }

    #[test]
    fn test_try_from_values_rejects_null() {
        let values = vec![Value::Null];
        assert!(SkillSet::try_from_values("student_skills", &values).is_err());
    }
}
