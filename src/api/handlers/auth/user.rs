//! Current user lookup from the `auth_token` cookie.

use axum::{
    Json,
    extract::Extension,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    error::AuthError,
    session::{clear_session_cookie, session_token},
    state::AuthState,
    types::{ErrorResponse, UserResponse},
};
use crate::provider::ProviderError;

#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "Session is valid", body = UserResponse),
        (status = 401, description = "No session, or the provider rejected it (cookie cleared)", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn user(auth_state: Extension<Arc<AuthState>>, jar: CookieJar) -> Response {
    // No cookie means anonymous; the provider is not consulted.
    let Some(token) = session_token(&jar) else {
        return AuthError::NotAuthenticated.into_response();
    };

    let stale = match auth_state.provider().verify_token(token).await {
        Ok(Some(user)) => {
            return Json(UserResponse { user: user.into() }).into_response();
        }
        Ok(None) => "no user for token".to_string(),
        Err(ProviderError::Rejected(message)) => message,
        Err(err) => return AuthError::internal("Get user error", err).into_response(),
    };

    debug!("Clearing stale session: {stale}");

    let jar = CookieJar::new().add(clear_session_cookie(auth_state.config()));
    (jar, AuthError::InvalidSession).into_response()
}
