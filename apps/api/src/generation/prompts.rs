// Prompt templates for the two model calls of a submission.
// Pure string interpolation — builders always succeed, whatever the input.

use crate::generation::tone::Tone;
use crate::models::application::ApplicationInput;

/// Letter generation prompt. Each form field is interpolated exactly once.
/// Replace: {job_title}, {company}, {experience_years}, {key_skills},
///          {achievements}, {tone}, {tone_guidance}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter for the following job application:

Position: {job_title}
Company: {company}
Experience: {experience_years} years
Key Skills: {key_skills}
Achievements: {achievements}
Tone: {tone} ({tone_guidance})

Requirements:
1. Standard business letter format
2. Strong opening paragraph
3. Highlight the stated experience and skills
4. Mention why the applicant wants to work at this company specifically
5. Include quantifiable achievements where given
6. Use action verbs and avoid cliches
7. Be ATS-friendly and concise (300-400 words)

Format:
[Date]
[Hiring Manager's Name or Hiring Team]
[Company Address]

Dear Hiring Manager,

[Cover letter content]

Sincerely,
[Your Name]"#;

/// Match evaluation prompt. Embeds the full letter and job description.
/// Replace: {letter}, {job_description}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the following cover letter against this job description.

Provide:
1. A match score out of 100
2. A short explanation for the score
3. Exactly three suggestions to improve the cover letter

--- COVER LETTER ---
{letter}

--- JOB DESCRIPTION ---
{job_description}"#;

/// Builds the letter-generation prompt from one submission's input.
///
/// Deterministic: same input, same prompt. Blank achievements become the
/// `NOT_SPECIFIED` placeholder; every other field is interpolated verbatim.
pub fn build_generation_prompt(input: &ApplicationInput) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace("{company}", &input.company)
        .replace("{experience_years}", &input.experience_years)
        .replace("{key_skills}", &input.key_skills)
        .replace("{achievements}", input.achievements_or_default())
        .replace("{tone}", input.tone.as_str())
        .replace("{tone_guidance}", input.tone.guidance())
}

/// Builds the evaluation prompt from the letter generated in the SAME
/// submission plus the pasted job description. Callers only invoke this when
/// the job description is non-blank.
pub fn build_evaluation_prompt(letter: &str, job_description: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{letter}", letter)
        .replace("{job_description}", job_description)
}
