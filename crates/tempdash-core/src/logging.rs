use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Set to any value to log at debug levels
pub const ENV_DEV_LOGGING: &str = "TEMPDASH_DEV";

pub const DEFAULT_LOG_FILTER: &str =
    "tempdash=info,tempdash_core=info,tempdash_web=info,tower_http=info";

const DEV_LOG_FILTER: &str =
    "tempdash=debug,tempdash_core=debug,tempdash_web=debug,tower_http=debug";

pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

pub fn init_dev() {
    init_with_default(DEV_LOG_FILTER);
}

/// `RUST_LOG` takes precedence over `fallback_filter`. A second call is a no-op.
pub fn init_with_default(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
