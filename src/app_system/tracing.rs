use tracing_subscriber::EnvFilter;

use super::SystemConfig;

/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=order_placer::placer=debug,info cargo run
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
