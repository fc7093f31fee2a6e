//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary executes.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, provider, session};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5000);

    let provider_opts = provider::Options::parse(matches)?;
    let session_opts = session::Options::parse(matches);

    Ok(Action::Server(Args {
        port,
        provider_url: provider_opts.url,
        provider_api_key: provider_opts.api_key,
        provider_timeout_seconds: provider_opts.timeout_seconds,
        environment: session_opts.environment,
        session_ttl_seconds: session_opts.session_ttl_seconds,
        cors_origin: session_opts.cors_origin,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::auth::Environment;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_server_action() {
        temp_env::with_vars(
            [
                ("AUTHGATE_PROVIDER_URL", Some("https://project.supabase.co")),
                ("AUTHGATE_PROVIDER_API_KEY", Some("anon-key")),
                ("AUTHGATE_PORT", None),
                ("AUTHGATE_ENVIRONMENT", Some("production")),
                ("AUTHGATE_SESSION_TTL_SECONDS", None),
                ("AUTHGATE_PROVIDER_TIMEOUT_SECONDS", None),
                ("AUTHGATE_CORS_ORIGIN", None),
            ],
            || {
                let matches = crate::cli::commands::new().get_matches_from(vec!["authgate"]);
                let result = handler(&matches);
                assert!(result.is_ok());
                if let Ok(Action::Server(args)) = result {
                    assert_eq!(args.port, 5000);
                    assert_eq!(args.provider_url, "https://project.supabase.co");
                    assert_eq!(args.provider_api_key.expose_secret(), "anon-key");
                    assert_eq!(args.provider_timeout_seconds, 10);
                    assert_eq!(args.environment, Environment::Production);
                    assert_eq!(args.session_ttl_seconds, 604_800);
                    assert!(args.cors_origin.is_none());
                }
            },
        );
    }
}
