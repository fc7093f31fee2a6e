//! # Authgate (cookie session gateway)
//!
//! `authgate` fronts a hosted identity provider with three cookie-based
//! endpoints: login, get-current-user and logout. It never stores passwords
//! or tokens; the provider is the source of truth for both.
//!
//! ## Session cookie
//!
//! A successful login stores the provider's access token in the `auth_token`
//! cookie (`HttpOnly`, `SameSite=Strict`, `Secure` in production, 7 days).
//! Every later request is identified by asking the provider to verify that
//! token. A token the provider rejects is cleared from the client right away,
//! so a stale session falls back to anonymous on the next call.
//!
//! ## Provider
//!
//! The provider is consumed through the [`provider::IdentityProvider`] trait.
//! [`provider::GoTrueProvider`] speaks the hosted Supabase Auth (`GoTrue`)
//! REST API.

pub mod api;
pub mod cli;
pub mod provider;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
