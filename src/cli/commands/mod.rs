use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub mod provider;
pub mod session;

pub const ARG_PORT: &str = "port";
pub const ARG_VERBOSITY: &str = "verbosity";

/// Log level names, indexed by the `-v` count they stand for.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// `AUTHGATE_LOG_LEVEL` takes a level name or its `-v` count.
#[must_use]
pub fn log_level_parser() -> ValueParser {
    ValueParser::from(|value: &str| -> Result<u8, String> {
        let value = value.trim().to_lowercase();
        LOG_LEVELS
            .iter()
            .position(|level| *level == value)
            .or_else(|| value.parse::<usize>().ok().filter(|n| *n < LOG_LEVELS.len()))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("expected one of {}, or 0-4", LOG_LEVELS.join(", ")))
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("5000")
                .env("AUTHGATE_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = provider::with_args(command);
    let command = session::with_args(command);

    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more: -v warn, -vv info, -vvv debug, -vvvv trace (RUST_LOG wins)")
            .env("AUTHGATE_LOG_LEVEL")
            .action(ArgAction::Count)
            .value_parser(log_level_parser()),
    )
}
