//! Admin aggregation: cross-entity listings flattened for tabular display.
//!
//! Every listing first checks that the caller currently holds the admin
//! role. Display names are joined in at read time; a reference to a missing
//! user or need renders as "Unknown" instead of dropping the row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::admin::store::MarketplaceStore;
use crate::errors::AppError;
use crate::models::marketplace::{
    ApplicationStatus, NeedRow, NeedStatus, UserRow, ADMIN_ROLE,
};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminApplication {
    pub id: Uuid,
    pub executive_uid: String,
    pub executive_name: String,
    pub need_id: Uuid,
    pub need_title: String,
    pub startup_uid: Option<String>,
    pub startup_name: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOpportunity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: NeedStatus,
    pub startup_uid: String,
    pub startup_name: String,
    pub application_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSavedItem {
    pub id: Uuid,
    pub executive_uid: String,
    pub executive_name: String,
    pub need_id: Uuid,
    pub need_title: String,
    pub startup_name: String,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminShortlistItem {
    pub id: Uuid,
    pub startup_uid: String,
    pub startup_name: String,
    pub executive_uid: String,
    pub executive_name: String,
    pub shortlisted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserListItem {
    fn from(row: UserRow) -> Self {
        Self {
            uid: row.uid,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// Fails with `AppError::Authorization` unless `caller_uid` is an admin.
pub async fn require_admin(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<UserRow, AppError> {
    match store.user(caller_uid.trim()).await? {
        Some(user) if user.role == ADMIN_ROLE => Ok(user),
        Some(user) => {
            warn!("Admin access denied for {} (role {})", user.uid, user.role);
            Err(AppError::Authorization(format!(
                "user {} does not hold the admin role",
                user.uid
            )))
        }
        None => {
            warn!("Admin access denied for unknown caller '{caller_uid}'");
            Err(AppError::Authorization(format!(
                "unknown caller '{caller_uid}'"
            )))
        }
    }
}

/// uid → display name.
struct Names(HashMap<String, String>);

impl Names {
    fn new(users: Vec<UserRow>) -> Self {
        Self(users.into_iter().map(|u| (u.uid, u.name)).collect())
    }

    fn of(&self, uid: &str) -> String {
        self.0
            .get(uid)
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

fn index_needs(needs: &[NeedRow]) -> HashMap<Uuid, &NeedRow> {
    needs.iter().map(|n| (n.id, n)).collect()
}

pub async fn list_applications(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<Vec<AdminApplication>, AppError> {
    require_admin(store, caller_uid).await?;

    let (applications, needs, users) =
        tokio::try_join!(store.applications(), store.needs(), store.users())?;
    let names = Names::new(users);
    let needs_by_id = index_needs(&needs);

    let mut rows: Vec<AdminApplication> = applications
        .into_iter()
        .map(|app| {
            let need = needs_by_id.get(&app.need_id);
            AdminApplication {
                id: app.id,
                executive_name: names.of(&app.executive_uid),
                executive_uid: app.executive_uid,
                need_id: app.need_id,
                need_title: need.map_or_else(|| UNKNOWN.to_string(), |n| n.title.clone()),
                startup_uid: need.map(|n| n.startup_uid.clone()),
                startup_name: need.map_or_else(|| UNKNOWN.to_string(), |n| names.of(&n.startup_uid)),
                status: app.status,
                applied_at: app.applied_at,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));

    info!("Admin {caller_uid} listed {} applications", rows.len());
    Ok(rows)
}

pub async fn list_opportunities(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<Vec<AdminOpportunity>, AppError> {
    require_admin(store, caller_uid).await?;

    let (needs, applications, users) =
        tokio::try_join!(store.needs(), store.applications(), store.users())?;
    let names = Names::new(users);

    let mut counts: HashMap<Uuid, usize> = HashMap::new();
    for app in &applications {
        *counts.entry(app.need_id).or_default() += 1;
    }

    let mut rows: Vec<AdminOpportunity> = needs
        .into_iter()
        .map(|need| AdminOpportunity {
            application_count: counts.get(&need.id).copied().unwrap_or(0),
            startup_name: names.of(&need.startup_uid),
            id: need.id,
            title: need.title,
            description: need.description,
            status: need.status,
            startup_uid: need.startup_uid,
            created_at: need.created_at,
        })
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    info!("Admin {caller_uid} listed {} opportunities", rows.len());
    Ok(rows)
}

pub async fn list_saved_items(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<Vec<AdminSavedItem>, AppError> {
    require_admin(store, caller_uid).await?;

    let (saved, needs, users) =
        tokio::try_join!(store.saved_needs(), store.needs(), store.users())?;
    let names = Names::new(users);
    let needs_by_id = index_needs(&needs);

    let mut rows: Vec<AdminSavedItem> = saved
        .into_iter()
        .map(|item| {
            let need = needs_by_id.get(&item.need_id);
            AdminSavedItem {
                id: item.id,
                executive_name: names.of(&item.executive_uid),
                executive_uid: item.executive_uid,
                need_id: item.need_id,
                need_title: need.map_or_else(|| UNKNOWN.to_string(), |n| n.title.clone()),
                startup_name: need.map_or_else(|| UNKNOWN.to_string(), |n| names.of(&n.startup_uid)),
                saved_at: item.saved_at,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

    info!("Admin {caller_uid} listed {} saved items", rows.len());
    Ok(rows)
}

pub async fn list_shortlists(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<Vec<AdminShortlistItem>, AppError> {
    require_admin(store, caller_uid).await?;

    let (shortlists, users) = tokio::try_join!(store.shortlists(), store.users())?;
    let names = Names::new(users);

    let mut rows: Vec<AdminShortlistItem> = shortlists
        .into_iter()
        .map(|item| AdminShortlistItem {
            id: item.id,
            startup_name: names.of(&item.startup_uid),
            executive_name: names.of(&item.executive_uid),
            startup_uid: item.startup_uid,
            executive_uid: item.executive_uid,
            shortlisted_at: item.shortlisted_at,
        })
        .collect();
    rows.sort_by(|a, b| b.shortlisted_at.cmp(&a.shortlisted_at));

    info!("Admin {caller_uid} listed {} shortlist entries", rows.len());
    Ok(rows)
}

pub async fn list_users(
    store: &dyn MarketplaceStore,
    caller_uid: &str,
) -> Result<Vec<UserListItem>, AppError> {
    require_admin(store, caller_uid).await?;

    let mut rows: Vec<UserListItem> = store
        .users()
        .await?
        .into_iter()
        .map(UserListItem::from)
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    info!("Admin {caller_uid} listed {} users", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::memory::MemoryStore;

    /// admin-1 (admin), exec-1/exec-2 (executives), startup-1 (startup),
    /// with one need, two applications, a saved item and a shortlist entry.
    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_user("admin-1", "Avery Admin", "admin");
        store.add_user("exec-1", "Priya Raman", "executive");
        store.add_user("exec-2", "Marco Diaz", "executive");
        store.add_user("startup-1", "Gridwise", "startup");

        let need = store.add_need("startup-1", "Fractional VP Partnerships", 5);
        store.add_application("exec-1", need, ApplicationStatus::Applied, 10);
        store.add_application("exec-2", need, ApplicationStatus::Hired, 20);
        store.add_saved("exec-1", need, 7);
        store.add_shortlist("startup-1", "exec-2", 8);
        store
    }

    #[tokio::test]
    async fn test_non_admin_gets_authorization_error_and_no_data() {
        let store = seeded();
        for caller in ["exec-1", "startup-1", "nobody", ""] {
            let result = list_applications(&store, caller).await;
            assert!(
                matches!(result, Err(AppError::Authorization(_))),
                "caller {caller:?} should be rejected"
            );
        }
        assert!(matches!(
            list_users(&store, "exec-1").await,
            Err(AppError::Authorization(_))
        ));
        assert!(matches!(
            list_opportunities(&store, "startup-1").await,
            Err(AppError::Authorization(_))
        ));
        assert!(matches!(
            list_saved_items(&store, "exec-2").await,
            Err(AppError::Authorization(_))
        ));
        assert!(matches!(
            list_shortlists(&store, "exec-2").await,
            Err(AppError::Authorization(_))
        ));
    }

    #[tokio::test]
    async fn test_applications_are_denormalized_newest_first() {
        let store = seeded();
        let rows = list_applications(&store, "admin-1").await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].executive_name, "Marco Diaz");
        assert_eq!(rows[0].status, ApplicationStatus::Hired);
        assert_eq!(rows[1].executive_name, "Priya Raman");
        for row in &rows {
            assert_eq!(row.need_title, "Fractional VP Partnerships");
            assert_eq!(row.startup_name, "Gridwise");
            assert_eq!(row.startup_uid.as_deref(), Some("startup-1"));
        }
    }

    #[tokio::test]
    async fn test_dangling_references_render_as_unknown() {
        let store = seeded();
        store.add_application("ghost", uuid::Uuid::new_v4(), ApplicationStatus::Rejected, 30);

        let rows = list_applications(&store, "admin-1").await.unwrap();
        assert_eq!(rows.len(), 3);
        let ghost = &rows[0];
        assert_eq!(ghost.executive_name, "Unknown");
        assert_eq!(ghost.need_title, "Unknown");
        assert_eq!(ghost.startup_name, "Unknown");
        assert_eq!(ghost.startup_uid, None);
    }

    #[tokio::test]
    async fn test_opportunities_count_applications() {
        let store = seeded();
        store.add_need("startup-1", "Interim CFO", 50);

        let rows = list_opportunities(&store, "admin-1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Interim CFO");
        assert_eq!(rows[0].application_count, 0);
        assert_eq!(rows[1].application_count, 2);
        assert_eq!(rows[1].startup_name, "Gridwise");
    }

    #[tokio::test]
    async fn test_saved_items_and_shortlists_carry_names() {
        let store = seeded();

        let saved = list_saved_items(&store, "admin-1").await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].executive_name, "Priya Raman");
        assert_eq!(saved[0].need_title, "Fractional VP Partnerships");
        assert_eq!(saved[0].startup_name, "Gridwise");

        let shortlists = list_shortlists(&store, "admin-1").await.unwrap();
        assert_eq!(shortlists.len(), 1);
        assert_eq!(shortlists[0].startup_name, "Gridwise");
        assert_eq!(shortlists[0].executive_name, "Marco Diaz");
    }

    #[tokio::test]
    async fn test_users_listing_includes_every_role() {
        let store = seeded();
        let users = list_users(&store, "admin-1").await.unwrap();
        assert_eq!(users.len(), 4);
        assert!(users.iter().any(|u| u.role == "admin"));
        assert!(users.iter().any(|u| u.email == "startup-1@example.com"));
    }
}
