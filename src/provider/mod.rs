//! Identity provider seam.
//!
//! The gateway only ever asks two questions of the provider: "are these
//! credentials good?" and "is this token still good?". Everything else
//! (password storage, token signing, expiry) stays on the provider side.

mod gotrue;

pub use gotrue::GoTrueProvider;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Email and password forwarded once to the provider and then dropped.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: String, password: SecretString) -> Self {
        Self { email, password }
    }
}

/// User identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
}

/// Result of a successful password sign-in.
#[derive(Debug, Clone)]
pub struct ProviderSession {
    pub access_token: SecretString,
    pub user: ProviderUser,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered and said no (bad credentials, expired token, ...).
    /// The message is the provider's own and is safe to relay to the client.
    #[error("{0}")]
    Rejected(String),
    #[error("identity provider returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed identity provider response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange email and password for an access token and user identity.
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderSession, ProviderError>;

    /// Resolve a previously issued access token to its user.
    ///
    /// `Ok(None)` means the provider answered but returned no user.
    async fn verify_token(&self, token: &str) -> Result<Option<ProviderUser>, ProviderError>;
}

#[derive(Clone)]
pub struct ProviderConfig {
    url: String,
    api_key: SecretString,
    timeout: Duration,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(url: String, api_key: SecretString) -> Self {
        Self {
            url,
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
