use tracing::{metadata::LevelFilter, subscriber::SetGlobalDefaultError, Subscriber};
use tracing_subscriber::{filter::ParseError, fmt, layer::SubscriberExt, EnvFilter};

/// Builds the subscriber for a log level directive such as `info` or
/// `mosaic_core=trace,warn`. An invalid directive falls back to `debug`, the
/// parse error is handed back so it can be reported once logging is up.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
}

/// Installs the subscriber for `level` as the global default.
///
/// # Errors
///
/// Will error if a global subscriber was already set.
pub fn setup_logging(level: &str) -> Result<(), SetGlobalDefaultError> {
    let (subscriber, parse_err) = parse_log_level(level);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::error!("Invalid log level `{}`, using debug: {}", level, err);
    }
    Ok(())
}
