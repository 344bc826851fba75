//! Shared test setup.

use std::{
    env,
    sync::Once,
};
use tracing_subscriber::{
    fmt::{
        self,
        time::uptime,
    },
    prelude::*,
    Registry,
    EnvFilter,
};


/// Default logging environment filter. Our crate is debug, everything else is warn.
const DEFAULT_FILTER: &'static str = "warn,indexable=debug";

static INIT_LOGGING: Once = Once::new();

/// Installs a `tracing` backend which outputs through the test harness's
/// captured stdout. Accepts ecosystem-standard `RUST_LOG` env filters. Safe
/// to call from every test.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let format = fmt::format()
            .compact()
            .with_timer(uptime())
            .with_line_number(true);
        let stdout_log = fmt::layer()
            .event_format(format)
            .with_test_writer();

        let mut filter = DEFAULT_FILTER.to_owned();
        if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
            filter.push(',');
            filter.push_str(&env_filter);
        }

        let subscriber = Registry::default()
            .with(EnvFilter::new(filter))
            .with(stdout_log);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
