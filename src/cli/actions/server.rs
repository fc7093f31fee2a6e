use crate::{
    api::{
        self,
        handlers::auth::{AuthConfig, AuthState, Environment},
    },
    cli::telemetry,
    provider::{GoTrueProvider, ProviderConfig},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub provider_url: String,
    pub provider_api_key: SecretString,
    pub provider_timeout_seconds: u64,
    pub environment: Environment,
    pub session_ttl_seconds: i64,
    pub cors_origin: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the provider client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let provider_config = ProviderConfig::new(args.provider_url, args.provider_api_key)
        .with_timeout_seconds(args.provider_timeout_seconds);

    debug!("Provider config: {:?}", provider_config);

    // One client for the whole process, shared read-only by every request.
    let provider =
        GoTrueProvider::new(&provider_config).context("Failed to initialize identity provider")?;

    let auth_config =
        AuthConfig::new(args.environment).with_session_ttl_seconds(args.session_ttl_seconds);

    info!(
        "Starting {} in {} mode",
        env!("CARGO_PKG_NAME"),
        auth_config.environment()
    );

    let auth_state = Arc::new(AuthState::new(auth_config, Arc::new(provider)));

    let result = api::new(args.port, auth_state, args.cors_origin.as_deref()).await;

    telemetry::shutdown_tracer();

    result
}
