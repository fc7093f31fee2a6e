//! Auth state and configuration.

use crate::provider::IdentityProvider;
use std::{fmt, str::FromStr, sync::Arc};

const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Deployment environment; only production marks the session cookie `Secure`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("invalid environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    environment: Environment,
    session_ttl_seconds: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    #[must_use]
    pub fn session_cookie_secure(&self) -> bool {
        self.environment.is_production()
    }
}

/// Shared, read-only state for the auth handlers.
pub struct AuthState {
    config: AuthConfig,
    provider: Arc<dyn IdentityProvider>,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { config, provider }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn provider(&self) -> &dyn IdentityProvider {
        self.provider.as_ref()
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!(" PROD ".parse(), Ok(Environment::Production));
        assert_eq!("dev".parse(), Ok(Environment::Development));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn secure_cookie_only_in_production() {
        assert!(!AuthConfig::new(Environment::Development).session_cookie_secure());
        assert!(AuthConfig::new(Environment::Production).session_cookie_secure());
    }

    #[test]
    fn session_ttl_defaults_to_one_week() {
        let config = AuthConfig::new(Environment::default());
        assert_eq!(config.session_ttl_seconds(), 604_800);
        assert_eq!(
            config.with_session_ttl_seconds(60).session_ttl_seconds(),
            60
        );
    }
}
