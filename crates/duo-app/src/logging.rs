use tracing_subscriber::EnvFilter;

/// Logs go to stderr so rendered results on stdout stay clean.
/// Human-readable on a terminal, JSON lines otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
