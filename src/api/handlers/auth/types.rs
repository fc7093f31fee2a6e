//! Request/response types for auth endpoints.

use crate::provider::{Credentials, ProviderUser};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Login body. Both fields are optional on the wire so that a missing field
/// is reported as a 400 by the handler instead of a JSON rejection.
#[derive(ToSchema, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Credentials if both fields are present and non-empty.
    #[must_use]
    pub fn into_credentials(self) -> Option<Credentials> {
        let email = self.email.filter(|email| !email.is_empty())?;
        let password = self.password.filter(|password| !password.is_empty())?;
        Some(Credentials::new(email, SecretString::from(password)))
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<ProviderUser> for UserIdentity {
    fn from(user: ProviderUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub user: UserIdentity,
    pub message: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub user: UserIdentity,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
