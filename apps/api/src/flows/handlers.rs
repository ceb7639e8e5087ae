//! Axum route handlers for the flow API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::flows::extract_profile::{ExtractProfile, ExtractProfileInput, ExtractedProfile};
use crate::flows::match_executive::{MatchExecutive, MatchInput, MatchResult};
use crate::flows::messages::{
    DraftedMessage, FollowUp, FollowUpInput, Introduction, IntroductionInput,
};
use crate::flows::resume_source::{text_from_bytes, ResumeSource};
use crate::flows::rewrite::{
    ExecutiveProfile, JobDescription, RewriteChatInput, RewriteChatMessage, RewriteField,
    RewriteFieldInput, RewriteOutput, StartupProfile,
};
use crate::flows::run_flow;
use crate::flows::status_change::{StatusChangeInput, StatusChangeMessage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractProfileRequest {
    pub resume: ResumeSource,
}

/// POST /api/v1/flows/extract-profile
pub async fn handle_extract_profile(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExtractProfileRequest>,
) -> Result<Json<ExtractedProfile>, AppError> {
    let input = ExtractProfileInput {
        resume_text: request.resume.into_text().await?,
    };
    let profile = run_flow::<ExtractProfile>(state.llm.as_ref(), &input).await?;
    Ok(Json(profile))
}

/// POST /api/v1/flows/extract-profile/upload
///
/// Multipart form with a single `resume` file (PDF or plain text).
pub async fn handle_extract_profile_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractedProfile>, AppError> {
    let mut multipart = multipart?;
    let mut resume_text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let mime = field
            .content_type()
            .unwrap_or("application/pdf")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read resume upload: {e}")))?;
        info!("Received résumé upload ({} bytes, {mime})", bytes.len());
        resume_text = Some(text_from_bytes(&mime, bytes.to_vec()).await?);
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("multipart field 'resume' is required".into()))?;
    let input = ExtractProfileInput { resume_text };
    let profile = run_flow::<ExtractProfile>(state.llm.as_ref(), &input).await?;
    Ok(Json(profile))
}

/// POST /api/v1/flows/match
pub async fn handle_match(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MatchInput>,
) -> Result<Json<MatchResult>, AppError> {
    let result = run_flow::<MatchExecutive>(state.llm.as_ref(), &input).await?;
    Ok(Json(result))
}

/// POST /api/v1/flows/rewrite/executive-profile
pub async fn handle_rewrite_executive_profile(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RewriteFieldInput>,
) -> Result<Json<RewriteOutput>, AppError> {
    let output = run_flow::<RewriteField<ExecutiveProfile>>(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/rewrite/job-description
pub async fn handle_rewrite_job_description(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RewriteFieldInput>,
) -> Result<Json<RewriteOutput>, AppError> {
    let output = run_flow::<RewriteField<JobDescription>>(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/rewrite/startup-profile
pub async fn handle_rewrite_startup_profile(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RewriteFieldInput>,
) -> Result<Json<RewriteOutput>, AppError> {
    let output = run_flow::<RewriteField<StartupProfile>>(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/rewrite/chat-message
pub async fn handle_rewrite_chat_message(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RewriteChatInput>,
) -> Result<Json<RewriteOutput>, AppError> {
    let output = run_flow::<RewriteChatMessage>(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/introduction
pub async fn handle_introduction(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<IntroductionInput>,
) -> Result<Json<DraftedMessage>, AppError> {
    let message = run_flow::<Introduction>(state.llm.as_ref(), &input).await?;
    Ok(Json(message))
}

/// POST /api/v1/flows/follow-up
pub async fn handle_follow_up(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<FollowUpInput>,
) -> Result<Json<DraftedMessage>, AppError> {
    let message = run_flow::<FollowUp>(state.llm.as_ref(), &input).await?;
    Ok(Json(message))
}

/// POST /api/v1/flows/status-change
pub async fn handle_status_change(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<StatusChangeInput>,
) -> Result<Json<DraftedMessage>, AppError> {
    let message = run_flow::<StatusChangeMessage>(state.llm.as_ref(), &input).await?;
    Ok(Json(message))
}
