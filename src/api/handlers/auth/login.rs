//! Password login against the identity provider.

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    error::AuthError,
    session::session_cookie,
    state::AuthState,
    types::{ErrorResponse, LoginRequest, LoginResponse},
};
use crate::provider::ProviderError;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, sets the auth_token cookie", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Identity provider rejected the credentials", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn login(
    auth_state: Extension<Arc<AuthState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Rejected login payload: {rejection}");
            return Err(AuthError::MissingCredentials);
        }
    };

    // Fail fast: the provider is never called without both fields.
    let credentials = request
        .into_credentials()
        .ok_or(AuthError::MissingCredentials)?;

    let session = match auth_state.provider().sign_in(&credentials).await {
        Ok(session) => session,
        Err(ProviderError::Rejected(message)) => {
            debug!("Login rejected by identity provider: {message}");
            return Err(AuthError::Rejected(message));
        }
        Err(err) => return Err(AuthError::internal("Login error", err)),
    };

    debug!("Login successful for user {}", session.user.id);

    let cookie = session_cookie(
        auth_state.config(),
        session.access_token.expose_secret().to_string(),
    );
    let jar = CookieJar::new().add(cookie);

    Ok((
        jar,
        Json(LoginResponse {
            user: session.user.into(),
            message: "Login successful".to_string(),
        }),
    ))
}
