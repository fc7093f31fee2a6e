use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_PROVIDER_URL: &str = "provider-url";
pub const ARG_PROVIDER_API_KEY: &str = "provider-api-key";
pub const ARG_PROVIDER_TIMEOUT_SECONDS: &str = "provider-timeout-seconds";

#[derive(Debug)]
pub struct Options {
    pub url: String,
    pub api_key: SecretString,
    pub timeout_seconds: u64,
}

impl Options {
    /// # Errors
    /// Returns an error if a required provider argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let url = matches
            .get_one::<String>(ARG_PROVIDER_URL)
            .cloned()
            .context("missing required argument: --provider-url")?;
        let api_key = matches
            .get_one::<String>(ARG_PROVIDER_API_KEY)
            .cloned()
            .map(SecretString::from)
            .context("missing required argument: --provider-api-key")?;
        let timeout_seconds = matches
            .get_one::<u64>(ARG_PROVIDER_TIMEOUT_SECONDS)
            .copied()
            .unwrap_or(10);

        Ok(Self {
            url,
            api_key,
            timeout_seconds,
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PROVIDER_URL)
                .long(ARG_PROVIDER_URL)
                .help("Identity provider base URL, example: https://<project>.supabase.co")
                .env("AUTHGATE_PROVIDER_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PROVIDER_API_KEY)
                .long(ARG_PROVIDER_API_KEY)
                .help("Identity provider API key (anon key)")
                .env("AUTHGATE_PROVIDER_API_KEY")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_PROVIDER_TIMEOUT_SECONDS)
                .long(ARG_PROVIDER_TIMEOUT_SECONDS)
                .help("Timeout in seconds for identity provider requests")
                .env("AUTHGATE_PROVIDER_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
