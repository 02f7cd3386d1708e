//! Submission pipeline — orchestrates one form submission end to end.
//!
//! Flow: build generation prompt → model call → letter + PDF derived together
//! → (job description present?) build evaluation prompt → second model call.
//!
//! The two model calls are strictly sequential: the evaluation prompt embeds
//! the letter produced by the first call, so they can never run concurrently.
//! An evaluation failure keeps the letter and PDF visible; a generation
//! failure produces nothing.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{build_evaluation_prompt, build_generation_prompt};
use crate::llm_client::TextGenerator;
use crate::models::application::ApplicationInput;
use crate::render;

// ────────────────────────────────────────────────────────────────────────────
// Submission state machine
// ────────────────────────────────────────────────────────────────────────────

/// Phases of one submission. `LetterReady` is terminal when no job
/// description was supplied; otherwise the machine continues into the
/// evaluation phases. The two `*Failed` phases are the error displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    LetterReady,
    EvaluationPending,
    EvaluationReady,
    /// Error display: generation failed, nothing was produced.
    GenerationFailed,
    /// Error display: evaluation failed, letter and PDF are kept.
    EvaluationFailed,
}

impl SubmissionPhase {
    /// Whether `self` is a legal successor of `prev`. These six edges are
    /// the whole machine.
    pub fn can_follow(self, prev: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (prev, self),
            (Idle, Submitting)
                | (Submitting, LetterReady)
                | (Submitting, GenerationFailed)
                | (LetterReady, EvaluationPending)
                | (EvaluationPending, EvaluationReady)
                | (EvaluationPending, EvaluationFailed)
        )
    }
}

fn advance(phase: &mut SubmissionPhase, next: SubmissionPhase) {
    debug_assert!(
        next.can_follow(*phase),
        "illegal submission transition {:?} -> {:?}",
        phase,
        next
    );
    debug!(from = ?phase, to = ?next, "submission transition");
    *phase = next;
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

/// Everything one submission leaves behind. Only exists once generation
/// succeeded — the evaluation stage can add to it but never invalidate it.
///
/// Invariants: `evaluation.is_some()` iff `phase == EvaluationReady`;
/// `evaluation_error.is_some()` iff `phase == EvaluationFailed`.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub phase: SubmissionPhase,
    pub letter: String,
    pub pdf: Vec<u8>,
    pub evaluation: Option<String>,
    pub evaluation_error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one submission to completion.
///
/// Steps:
/// 1. build_generation_prompt() → model call (failure ends the submission)
/// 2. render() the PDF — letter and artifact exist together before step 3
/// 3. if the job description is non-blank: build_evaluation_prompt() from the
///    letter of THIS submission → second model call (failure is partial:
///    letter and PDF stay in the outcome)
pub async fn run_submission(
    llm: &dyn TextGenerator,
    input: ApplicationInput,
) -> Result<SubmissionOutcome, AppError> {
    let mut phase = SubmissionPhase::Idle;
    advance(&mut phase, SubmissionPhase::Submitting);

    let prompt = build_generation_prompt(&input);
    let letter = match llm.generate(&prompt).await {
        Ok(letter) => letter,
        Err(e) => {
            advance(&mut phase, SubmissionPhase::GenerationFailed);
            return Err(AppError::Generation(e));
        }
    };
    info!(
        "letter generated for '{}' at '{}' ({} chars)",
        input.job_title,
        input.company,
        letter.len()
    );

    let pdf = render::render(&letter)?;
    advance(&mut phase, SubmissionPhase::LetterReady);

    if !input.wants_evaluation() {
        return Ok(SubmissionOutcome {
            phase,
            letter,
            pdf,
            evaluation: None,
            evaluation_error: None,
        });
    }

    advance(&mut phase, SubmissionPhase::EvaluationPending);
    let evaluation_prompt = build_evaluation_prompt(&letter, &input.job_description);

    match llm.generate(&evaluation_prompt).await {
        Ok(report) => {
            advance(&mut phase, SubmissionPhase::EvaluationReady);
            Ok(SubmissionOutcome {
                phase,
                letter,
                pdf,
                evaluation: Some(report),
                evaluation_error: None,
            })
        }
        Err(e) => {
            warn!("evaluation failed, keeping letter and PDF: {e}");
            advance(&mut phase, SubmissionPhase::EvaluationFailed);
            Ok(SubmissionOutcome {
                phase,
                letter,
                pdf,
                evaluation: None,
                evaluation_error: Some(e.to_string()),
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
