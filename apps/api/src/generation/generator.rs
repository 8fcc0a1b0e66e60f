//! Resume Generation — the request pipeline.
//!
//! Flow: render prompt → invoke model → strip fences → parse JSON.
//!
//! The three stages run strictly sequentially; each fails with its own
//! `AppError` variant and a failed stage stops the pipeline. The parsed
//! object is returned to the caller verbatim, with no shape validation.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::{RESUME_PROMPT_TEMPLATE, SYSTEM_PROMPT};
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::resume::GeneratedResume;

/// Request body for resume generation.
/// `user_info` is schema-free by design; its shape is a convention with the
/// caller, not a contract this service enforces.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResumeRequest {
    pub user_info: Map<String, Value>,
    pub job_description: String,
}

/// Renders the fixed prompt from the caller's inputs.
///
/// `user_info` is canonicalized as pretty-printed JSON before substitution.
/// A serialization failure is a `PromptFormatting` error and never reaches
/// the model.
pub fn render_prompt(
    user_info: &Map<String, Value>,
    job_description: &str,
) -> Result<String, AppError> {
    let user_info_text = serde_json::to_string_pretty(user_info)
        .map_err(|e| AppError::PromptFormatting(format!("user_info is not serializable: {e}")))?;

    Ok(RESUME_PROMPT_TEMPLATE
        .replace("{system_prompt}", SYSTEM_PROMPT)
        .replace("{user_info}", &user_info_text)
        .replace("{job_description}", job_description))
}

/// Runs the full pipeline against the given generation collaborator.
pub async fn generate_resume(
    llm: &dyn TextGenerator,
    request: &GenerateResumeRequest,
) -> Result<Value, AppError> {
    let prompt = render_prompt(&request.user_info, &request.job_description)?;
    debug!("Prompt rendered: {} chars", prompt.len());

    let raw = llm.generate(&prompt).await?;

    let cleaned = strip_json_fences(&raw);
    let parsed: Value = serde_json::from_str(cleaned)
        .map_err(|e| AppError::ResponseParse(e.to_string()))?;

    // Best-effort typed view, for diagnostics only. The raw object is returned.
    let resume = GeneratedResume::from_value(&parsed);
    info!(
        "Resume generated: name={:?}, {} experience entries, ats_score={}",
        resume.name,
        resume.experience.len(),
        resume.estimated_ats_score
    );

    Ok(parsed)
}
