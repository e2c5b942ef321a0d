//! Log subscriber setup.

use crate::error::SugarError;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `default_directive`.
///
/// Stdout belongs to the demo output, so logs never go there. Calling this
/// twice is harmless: the second subscriber is simply not installed.
pub fn init_logging(default_directive: &str) -> Result<(), SugarError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|err| SugarError::Logging(format!("{default_directive}: {err}")))?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    // Already initialised elsewhere (tests, a second call): keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    Ok(())
}
