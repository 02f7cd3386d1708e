//! The form snapshot captured at submission time.

use serde::Deserialize;

use crate::generation::tone::Tone;

/// Placeholder substituted for empty optional fields at prompt-build time.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One submission's worth of application details, captured atomically when
/// the form is posted. Lives for a single request/response cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInput {
    pub job_title: String,
    pub company: String,
    pub experience_years: String,
    pub key_skills: String,
    #[serde(default)]
    pub achievements: String,
    pub tone: Tone,
    #[serde(default)]
    pub job_description: String,
}

impl ApplicationInput {
    /// Achievements as interpolated into the generation prompt.
    /// Blank input becomes the `NOT_SPECIFIED` placeholder; no other field
    /// is defaulted.
    pub fn achievements_or_default(&self) -> &str {
        if self.achievements.trim().is_empty() {
            NOT_SPECIFIED
        } else {
            &self.achievements
        }
    }

    /// A non-blank job description gates the evaluation stage.
    pub fn wants_evaluation(&self) -> bool {
        !self.job_description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ApplicationInput {
        ApplicationInput {
            job_title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            experience_years: "3".to_string(),
            key_skills: "Python, APIs".to_string(),
            achievements: String::new(),
            tone: Tone::Professional,
            job_description: String::new(),
        }
    }

    #[test]
    fn test_empty_achievements_substituted() {
        let input = sample_input();
        assert_eq!(input.achievements_or_default(), NOT_SPECIFIED);
    }

    #[test]
    fn test_whitespace_achievements_substituted() {
        let mut input = sample_input();
        input.achievements = "   \n".to_string();
        assert_eq!(input.achievements_or_default(), NOT_SPECIFIED);
    }

    #[test]
    fn test_present_achievements_kept_verbatim() {
        let mut input = sample_input();
        input.achievements = "Increased user retention by 20%".to_string();
        assert_eq!(
            input.achievements_or_default(),
            "Increased user retention by 20%"
        );
    }

    #[test]
    fn test_blank_job_description_skips_evaluation() {
        let mut input = sample_input();
        input.job_description = "  ".to_string();
        assert!(!input.wants_evaluation());
    }

    #[test]
    fn test_job_description_gates_evaluation() {
        let mut input = sample_input();
        input.job_description = "We are hiring a backend engineer.".to_string();
        assert!(input.wants_evaluation());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = serde_json::json!({
            "job_title": "Software Engineer",
            "company": "Acme",
            "experience_years": "3",
            "key_skills": "Python, APIs",
            "tone": "Professional"
        });
        let input: ApplicationInput = serde_json::from_value(json).unwrap();
        assert!(input.achievements.is_empty());
        assert!(input.job_description.is_empty());
    }
}
