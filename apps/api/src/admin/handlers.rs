use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::admin::aggregation::{
    list_applications, list_opportunities, list_saved_items, list_shortlists, list_users,
    AdminApplication, AdminOpportunity, AdminSavedItem, AdminShortlistItem, UserListItem,
};
use crate::admin::conversations::{
    get_or_create_conversation, get_or_create_conversation_by_email, post_admin_message,
    ConversationRef,
};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::marketplace::MessageRow;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerQuery {
    pub caller_uid: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenConversationRequest {
    pub caller_uid: String,
    pub target_uid: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenConversationByEmailRequest {
    pub caller_uid: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub caller_uid: String,
    pub text: String,
}

/// GET /api/v1/admin/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CallerQuery>,
) -> Result<Json<Vec<AdminApplication>>, AppError> {
    let rows = list_applications(state.store.as_ref(), &params.caller_uid).await?;
    Ok(Json(rows))
}

/// GET /api/v1/admin/opportunities
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CallerQuery>,
) -> Result<Json<Vec<AdminOpportunity>>, AppError> {
    let rows = list_opportunities(state.store.as_ref(), &params.caller_uid).await?;
    Ok(Json(rows))
}

/// GET /api/v1/admin/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CallerQuery>,
) -> Result<Json<Vec<AdminSavedItem>>, AppError> {
    let rows = list_saved_items(state.store.as_ref(), &params.caller_uid).await?;
    Ok(Json(rows))
}

/// GET /api/v1/admin/shortlists
pub async fn handle_list_shortlists(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CallerQuery>,
) -> Result<Json<Vec<AdminShortlistItem>>, AppError> {
    let rows = list_shortlists(state.store.as_ref(), &params.caller_uid).await?;
    Ok(Json(rows))
}

/// GET /api/v1/admin/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CallerQuery>,
) -> Result<Json<Vec<UserListItem>>, AppError> {
    let rows = list_users(state.store.as_ref(), &params.caller_uid).await?;
    Ok(Json(rows))
}

/// POST /api/v1/admin/conversations
pub async fn handle_open_conversation(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OpenConversationRequest>,
) -> Result<Json<ConversationRef>, AppError> {
    let conversation =
        get_or_create_conversation(state.store.as_ref(), &req.caller_uid, &req.target_uid)
            .await?;
    Ok(Json(conversation))
}

/// POST /api/v1/admin/conversations/by-email
pub async fn handle_open_conversation_by_email(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OpenConversationByEmailRequest>,
) -> Result<Json<ConversationRef>, AppError> {
    let conversation =
        get_or_create_conversation_by_email(state.store.as_ref(), &req.caller_uid, &req.email)
            .await?;
    Ok(Json(conversation))
}

/// POST /api/v1/admin/conversations/:id/messages
pub async fn handle_post_message(
    State(state): State<AppState>,
    ApiPath(conversation_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<PostMessageRequest>,
) -> Result<Json<MessageRow>, AppError> {
    let message =
        post_admin_message(state.store.as_ref(), &req.caller_uid, conversation_id, &req.text)
            .await?;
    Ok(Json(message))
}
