//! Admin-originated conversations.
//!
//! A conversation is keyed by its unordered participant pair, so opening one
//! is an idempotent get-or-create.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::admin::aggregation::require_admin;
use crate::admin::store::MarketplaceStore;
use crate::errors::AppError;
use crate::models::marketplace::MessageRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRef {
    pub conversation_id: Uuid,
    pub target_uid: String,
}

/// Returns the thread between `admin_uid` and `target_uid`, creating it on first use.
pub async fn get_or_create_conversation(
    store: &dyn MarketplaceStore,
    admin_uid: &str,
    target_uid: &str,
) -> Result<ConversationRef, AppError> {
    let admin = require_admin(store, admin_uid).await?;
    let target_uid = target_uid.trim();

    if target_uid == admin.uid {
        return Err(AppError::Validation(
            "cannot open a conversation with yourself".into(),
        ));
    }
    let target = store
        .user(target_uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {target_uid} not found")))?;

    if let Some(existing) = store.find_conversation(&admin.uid, &target.uid).await? {
        return Ok(ConversationRef {
            conversation_id: existing.id,
            target_uid: target.uid,
        });
    }

    let created = store.insert_conversation(&admin.uid, &target.uid).await?;
    info!(
        "Admin {} opened conversation {} with {}",
        admin.uid, created.id, target.uid
    );
    Ok(ConversationRef {
        conversation_id: created.id,
        target_uid: target.uid,
    })
}

/// Resolves the target by email, then behaves like `get_or_create_conversation`.
pub async fn get_or_create_conversation_by_email(
    store: &dyn MarketplaceStore,
    admin_uid: &str,
    email: &str,
) -> Result<ConversationRef, AppError> {
    require_admin(store, admin_uid).await?;
    let target = store
        .user_by_email(email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email.trim())))?;
    get_or_create_conversation(store, admin_uid, &target.uid).await
}

/// Appends an admin message to a conversation the admin takes part in.
pub async fn post_admin_message(
    store: &dyn MarketplaceStore,
    admin_uid: &str,
    conversation_id: Uuid,
    body: &str,
) -> Result<MessageRow, AppError> {
    let admin = require_admin(store, admin_uid).await?;
    if body.trim().is_empty() {
        return Err(AppError::Validation("message text cannot be empty".into()));
    }

    let conversation = store
        .conversation(conversation_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Conversation {conversation_id} not found")))?;
    if !conversation.has_participant(&admin.uid) {
        return Err(AppError::Authorization(format!(
            "admin {} is not a participant of conversation {conversation_id}",
            admin.uid
        )));
    }

    let message = store
        .insert_message(conversation_id, &admin.uid, body.trim())
        .await?;
    info!("Admin {} posted to conversation {conversation_id}", admin.uid);
    Ok(message)
}
