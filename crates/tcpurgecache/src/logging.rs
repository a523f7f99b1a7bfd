use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG`, or `info` when unset.
pub fn init_logging() {
    init_logging_with("info");
}

/// Same as [`init_logging`] with a caller-chosen fallback directive.
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging_with(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging();
        init_logging_with("debug");
        tracing::info!("logging initialised twice");
    }
}
