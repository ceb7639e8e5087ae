//! In-memory `MarketplaceStore` for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::admin::store::MarketplaceStore;
use crate::errors::AppError;
use crate::models::marketplace::{
    ordered_pair, ApplicationRow, ApplicationStatus, ConversationRow, MessageRow, NeedRow,
    NeedStatus, SavedNeedRow, ShortlistRow, UserRow,
};

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    needs: Vec<NeedRow>,
    applications: Vec<ApplicationRow>,
    saved: Vec<SavedNeedRow>,
    shortlists: Vec<ShortlistRow>,
    conversations: Vec<ConversationRow>,
    messages: Vec<MessageRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

/// Deterministic timestamps: `at(n)` is n minutes after a fixed epoch.
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, uid: &str, name: &str, role: &str) {
        self.tables.lock().unwrap().users.push(UserRow {
            uid: uid.into(),
            name: name.into(),
            email: format!("{uid}@example.com"),
            role: role.into(),
            created_at: at(0),
        });
    }

    pub fn add_need(&self, startup_uid: &str, title: &str, minute: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.lock().unwrap().needs.push(NeedRow {
            id,
            startup_uid: startup_uid.into(),
            title: title.into(),
            description: String::new(),
            status: NeedStatus::Active,
            created_at: at(minute),
        });
        id
    }

    pub fn add_application(
        &self,
        executive_uid: &str,
        need_id: Uuid,
        status: ApplicationStatus,
        minute: i64,
    ) {
        self.tables.lock().unwrap().applications.push(ApplicationRow {
            id: Uuid::new_v4(),
            executive_uid: executive_uid.into(),
            need_id,
            status,
            applied_at: at(minute),
        });
    }

    pub fn add_saved(&self, executive_uid: &str, need_id: Uuid, minute: i64) {
        self.tables.lock().unwrap().saved.push(SavedNeedRow {
            id: Uuid::new_v4(),
            executive_uid: executive_uid.into(),
            need_id,
            saved_at: at(minute),
        });
    }

    pub fn add_shortlist(&self, startup_uid: &str, executive_uid: &str, minute: i64) {
        self.tables.lock().unwrap().shortlists.push(ShortlistRow {
            id: Uuid::new_v4(),
            startup_uid: startup_uid.into(),
            executive_uid: executive_uid.into(),
            shortlisted_at: at(minute),
        });
    }

    pub fn conversation_count(&self) -> usize {
        self.tables.lock().unwrap().conversations.len()
    }

    pub fn messages(&self) -> Vec<MessageRow> {
        self.tables.lock().unwrap().messages.clone()
    }
}

#[async_trait]
impl MarketplaceStore for MemoryStore {
    async fn user(&self, uid: &str) -> Result<Option<UserRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.uid == uid).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn users(&self) -> Result<Vec<UserRow>, AppError> {
        Ok(self.tables.lock().unwrap().users.clone())
    }

    async fn needs(&self) -> Result<Vec<NeedRow>, AppError> {
        Ok(self.tables.lock().unwrap().needs.clone())
    }

    async fn applications(&self) -> Result<Vec<ApplicationRow>, AppError> {
        Ok(self.tables.lock().unwrap().applications.clone())
    }

    async fn saved_needs(&self) -> Result<Vec<SavedNeedRow>, AppError> {
        Ok(self.tables.lock().unwrap().saved.clone())
    }

    async fn shortlists(&self) -> Result<Vec<ShortlistRow>, AppError> {
        Ok(self.tables.lock().unwrap().shortlists.clone())
    }

    async fn conversation(&self, id: Uuid) -> Result<Option<ConversationRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.conversations.iter().find(|c| c.id == id).cloned())
    }

    async fn find_conversation(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<ConversationRow>, AppError> {
        let (first, second) = ordered_pair(a, b);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .conversations
            .iter()
            .find(|c| c.participant_a == first && c.participant_b == second)
            .cloned())
    }

    async fn insert_conversation(&self, a: &str, b: &str) -> Result<ConversationRow, AppError> {
        let (first, second) = ordered_pair(a, b);
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables
            .conversations
            .iter()
            .find(|c| c.participant_a == first && c.participant_b == second)
        {
            return Ok(existing.clone());
        }
        let row = ConversationRow {
            id: Uuid::new_v4(),
            participant_a: first.into(),
            participant_b: second.into(),
            created_at: Utc::now(),
        };
        tables.conversations.push(row.clone());
        Ok(row)
    }

    async fn insert_message(
        &self,
        conversation_id: Uuid,
        sender_uid: &str,
        body: &str,
    ) -> Result<MessageRow, AppError> {
        let row = MessageRow {
            id: Uuid::new_v4(),
            conversation_id,
            sender_uid: sender_uid.into(),
            body: body.into(),
            sent_at: Utc::now(),
        };
        self.tables.lock().unwrap().messages.push(row.clone());
        Ok(row)
    }
}
