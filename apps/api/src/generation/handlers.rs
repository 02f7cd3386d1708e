//! Axum route handlers for the letter API.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::pipeline::{run_submission, SubmissionPhase};
use crate::models::application::ApplicationInput;
use crate::render::PDF_FILE_NAME;
use crate::state::AppState;

/// Response for one submission. The PDF travels base64-encoded so the whole
/// result fits in one JSON body; the page turns it into a download link.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: SubmissionPhase,
    pub letter: String,
    pub pdf_base64: String,
    pub pdf_file_name: &'static str,
    pub evaluation: Option<String>,
    pub evaluation_error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/letters
///
/// Captures the form snapshot, runs the pipeline, and returns the letter,
/// the PDF artifact, and (when a job description was pasted) the evaluation.
/// An evaluation failure still returns 200: the letter and PDF are kept and
/// the failure message rides alongside them.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(input): Json<ApplicationInput>,
) -> Result<Json<SubmitResponse>, AppError> {
    validate_presence(&input)?;

    let outcome = run_submission(state.llm.as_ref(), input).await?;

    Ok(Json(SubmitResponse {
        status: outcome.phase,
        letter: outcome.letter,
        pdf_base64: BASE64.encode(&outcome.pdf),
        pdf_file_name: PDF_FILE_NAME,
        evaluation: outcome.evaluation,
        evaluation_error: outcome.evaluation_error,
        generated_at: Utc::now(),
    }))
}

/// Presence is the only validation the form gets: the four required fields
/// must be non-blank. Content is the model's problem.
fn validate_presence(input: &ApplicationInput) -> Result<(), AppError> {
    for (value, field) in [
        (&input.job_title, "job_title"),
        (&input.company, "company"),
        (&input.experience_years, "experience_years"),
        (&input.key_skills, "key_skills"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::tone::Tone;
    use crate::llm_client::{GenerationError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    fn make_state(llm: Arc<dyn TextGenerator>) -> AppState {
        AppState { llm }
    }

    fn make_input() -> ApplicationInput {
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
    fn test_validate_presence_accepts_complete_input() {
        assert!(validate_presence(&make_input()).is_ok());
    }

    #[test]
    fn test_validate_presence_rejects_blank_required_field() {
        let mut input = make_input();
        input.key_skills = "   ".to_string();
        let err = validate_presence(&input).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("key_skills")));
    }

    #[test]
    fn test_validate_presence_allows_blank_optional_fields() {
        let input = make_input(); // blank achievements and job_description
        assert!(validate_presence(&input).is_ok());
    }

    #[tokio::test]
    async fn test_handle_submit_returns_letter_and_pdf() {
        let state = make_state(Arc::new(FixedGenerator("Dear Hiring Manager, ...")));

        let Json(response) = handle_submit(State(state), Json(make_input()))
            .await
            .unwrap();

        assert_eq!(response.status, SubmissionPhase::LetterReady);
        assert_eq!(response.letter, "Dear Hiring Manager, ...");
        assert_eq!(response.pdf_file_name, "cover_letter.pdf");
        assert!(!response.pdf_base64.is_empty());
        assert!(response.evaluation.is_none());
    }

    #[tokio::test]
    async fn test_handle_submit_rejects_blank_job_title() {
        let state = make_state(Arc::new(FixedGenerator("unused")));
        let mut input = make_input();
        input.job_title = String::new();

        let result = handle_submit(State(state), Json(input)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
