/// Installs the global `tracing` subscriber.
///
/// Filter directives come from `RUST_LOG`, defaulting to `info`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
