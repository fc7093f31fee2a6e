//! Auth handlers and supporting modules.
//!
//! The three endpoints map one identity provider call each onto an HTTP
//! response and at most one `auth_token` cookie mutation:
//!
//! - `POST /api/auth/login` sets the cookie on success.
//! - `GET /api/auth/user` reads it and clears it when the provider rejects it.
//! - `POST /api/auth/logout` always clears it and never calls the provider.

mod error;
pub(crate) mod login;
pub(crate) mod logout;
mod session;
mod state;
pub(crate) mod types;
pub(crate) mod user;

pub use error::AuthError;
pub use session::AUTH_COOKIE_NAME;
pub use state::{AuthConfig, AuthState, Environment};
