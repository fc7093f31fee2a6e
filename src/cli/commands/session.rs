use crate::api::handlers::auth::Environment;
use clap::{Arg, ArgMatches, Command, builder::ValueParser};

pub const ARG_ENVIRONMENT: &str = "environment";
pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";
pub const ARG_CORS_ORIGIN: &str = "cors-origin";

#[derive(Debug)]
pub struct Options {
    pub environment: Environment,
    pub session_ttl_seconds: i64,
    pub cors_origin: Option<String>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            environment: matches
                .get_one::<Environment>(ARG_ENVIRONMENT)
                .copied()
                .unwrap_or_default(),
            session_ttl_seconds: matches
                .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
                .copied()
                .unwrap_or(604_800),
            cors_origin: matches.get_one::<String>(ARG_CORS_ORIGIN).cloned(),
        }
    }
}

#[must_use]
pub fn validator_environment() -> ValueParser {
    ValueParser::from(|value: &str| value.parse::<Environment>())
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_ENVIRONMENT)
                .long(ARG_ENVIRONMENT)
                .help("Deployment environment: development or production (production marks the session cookie Secure)")
                .env("AUTHGATE_ENVIRONMENT")
                .default_value("development")
                .value_parser(validator_environment()),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Session cookie Max-Age in seconds")
                .env("AUTHGATE_SESSION_TTL_SECONDS")
                .default_value("604800")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new(ARG_CORS_ORIGIN)
                .long(ARG_CORS_ORIGIN)
                .help("Only allow this origin for credentialed CORS requests (default: mirror the request origin)")
                .env("AUTHGATE_CORS_ORIGIN"),
        )
}
