use tracing_subscriber::{EnvFilter, fmt};

/// Installs the process-wide JSON subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` is used.
pub fn init_logging(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .json()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("global tracing subscriber already installed");
    }
}
