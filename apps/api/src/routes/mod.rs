pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::flows::handlers as flows;
use crate::help;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Flow API
        .route(
            "/api/v1/flows/extract-profile",
            post(flows::handle_extract_profile),
        )
        .route(
            "/api/v1/flows/extract-profile/upload",
            post(flows::handle_extract_profile_upload),
        )
        .route("/api/v1/flows/match", post(flows::handle_match))
        .route(
            "/api/v1/flows/rewrite/executive-profile",
            post(flows::handle_rewrite_executive_profile),
        )
        .route(
            "/api/v1/flows/rewrite/job-description",
            post(flows::handle_rewrite_job_description),
        )
        .route(
            "/api/v1/flows/rewrite/startup-profile",
            post(flows::handle_rewrite_startup_profile),
        )
        .route(
            "/api/v1/flows/rewrite/chat-message",
            post(flows::handle_rewrite_chat_message),
        )
        .route("/api/v1/flows/introduction", post(flows::handle_introduction))
        .route("/api/v1/flows/follow-up", post(flows::handle_follow_up))
        .route(
            "/api/v1/flows/status-change",
            post(flows::handle_status_change),
        )
        // Admin API
        .route(
            "/api/v1/admin/applications",
            get(admin::handle_list_applications),
        )
        .route(
            "/api/v1/admin/opportunities",
            get(admin::handle_list_opportunities),
        )
        .route("/api/v1/admin/saved", get(admin::handle_list_saved))
        .route(
            "/api/v1/admin/shortlists",
            get(admin::handle_list_shortlists),
        )
        .route("/api/v1/admin/users", get(admin::handle_list_users))
        .route(
            "/api/v1/admin/conversations",
            post(admin::handle_open_conversation),
        )
        .route(
            "/api/v1/admin/conversations/by-email",
            post(admin::handle_open_conversation_by_email),
        )
        .route(
            "/api/v1/admin/conversations/:id/messages",
            post(admin::handle_post_message),
        )
        // Help
        .route("/api/v1/help/:role", get(help::handle_get_help))
        .with_state(state)
}
