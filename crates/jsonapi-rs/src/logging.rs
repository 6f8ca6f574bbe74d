//! Logging setup
//!
//! jsonapi logs through `tracing`: emitted envelopes at `debug`, rejected
//! input at `warn`, and every 500 at `error`. These helpers install a
//! `tracing-subscriber` fmt subscriber for applications that have none.

use crate::Environment;
use tracing_subscriber::EnvFilter;

/// Install a global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level defaults to the current
/// [`Environment`]'s (`debug` in development, `info` elsewhere). Calling this
/// more than once is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Environment::current().default_log_level()));
    install(filter);
}

/// Install a global subscriber with an explicit filter such as
/// `"jsonapi_core=debug,info"`.
///
/// Invalid directives fall back to `info`.
pub fn init_with_filter(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
