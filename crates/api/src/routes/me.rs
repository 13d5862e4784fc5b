//! Current identity endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};

/// Who the bearer token belongs to.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// User ID.
    pub user_id: Uuid,
    /// Email address, if the token carries one.
    pub email: Option<String>,
    /// Provider role, if any.
    pub role: Option<String>,
}

async fn current_user(auth: AuthUser) -> Json<MeResponse> {
    let identity = auth.identity();
    Json(MeResponse {
        user_id: identity.user_id.into_inner(),
        email: identity.email,
        role: auth.role().map(str::to_string),
    })
}

/// Creates identity routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(current_user))
}
