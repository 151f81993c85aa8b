// Prompt constants for application screening.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for the screening call. Same JSON-only contract as every other call.
pub const SCREENING_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Screening prompt template. Replace `{job_title}`, `{job_description}`,
/// `{candidate_name}` and `{resume_text}` before sending.
pub const SCREENING_PROMPT_TEMPLATE: &str = r#"Act as a recruitment screener. Analyze this candidate for the following job:
Job Title: {job_title}
Job Description: {job_description}
Candidate Name: {candidate_name}
Candidate Resume Info: {resume_text}

Provide a match score (0-100) and a short 1-sentence feedback.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 82,
  "feedback": "Strong React background that maps well to the product engineering scope."
}"#;

pub fn build_screening_prompt(
    job_title: &str,
    job_description: &str,
    candidate_name: &str,
    resume_text: &str,
) -> String {
    SCREENING_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description)
        .replace("{candidate_name}", candidate_name)
        .replace("{resume_text}", resume_text)
}
