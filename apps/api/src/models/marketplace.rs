//! Document-store rows. Relations are held by identity reference only;
//! display names are joined in at read time by the admin layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Applied,
    InReview,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "need_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NeedStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub uid: String,
    pub name: String,
    pub email: String,
    /// "executive" | "startup" | "admin"
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NeedRow {
    pub id: Uuid,
    pub startup_uid: String,
    pub title: String,
    pub description: String,
    pub status: NeedStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub executive_uid: String,
    pub need_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// An executive bookmarking a startup need.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedNeedRow {
    pub id: Uuid,
    pub executive_uid: String,
    pub need_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

/// A startup shortlisting an executive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistRow {
    pub id: Uuid,
    pub startup_uid: String,
    pub executive_uid: String,
    pub shortlisted_at: DateTime<Utc>,
}

/// Two-party thread. Participants are stored in sorted order so a pair
/// maps to at most one row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRow {
    pub id: Uuid,
    pub participant_a: String,
    pub participant_b: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationRow {
    pub fn has_participant(&self, uid: &str) -> bool {
        self.participant_a == uid || self.participant_b == uid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MessageRow {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_uid: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Canonical (sorted) order of a participant pair. Byte order, so the
/// `conversations` check constraint compares with `COLLATE "C"`.
pub fn ordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
