//! Logout: drop the session cookie.

use axum::{Json, extract::Extension, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::instrument;

use super::{
    session::clear_session_cookie,
    state::AuthState,
    types::{ErrorResponse, MessageResponse},
};

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn logout(auth_state: Extension<Arc<AuthState>>) -> impl IntoResponse {
    // The token stays valid at the provider until it expires on its own.
    let jar = CookieJar::new().add(clear_session_cookie(auth_state.config()));

    (
        jar,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}
