//! Error translation boundary for the auth handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use super::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid or expired session")]
    InvalidSession,
    /// Provider refused the request; its message is relayed verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl AuthError {
    /// Wrap an unexpected failure; the cause is logged, never returned.
    pub(super) fn internal(context: &str, err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        error!("{context}: {err:#}");
        Self::Internal(err)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::NotAuthenticated | Self::InvalidSession | Self::Rejected(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn status_mapping() {
        assert_eq!(
            AuthError::MissingCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::NotAuthenticated.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidSession.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Rejected("nope".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal(anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_hides_cause() {
        let err = AuthError::internal("Login error", anyhow!("connection reset by peer"));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn rejected_relays_provider_message() {
        let err = AuthError::Rejected("Email not confirmed".to_string());
        assert_eq!(err.to_string(), "Email not confirmed");
    }
}
