use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with env-based filtering.
///
/// Reads `RUST_LOG`, then `LOG_LEVEL`, and falls back to `default_level`
/// when neither holds a valid filter.
pub fn init_tracing(default_level: &str) {
    fmt().with_env_filter(build_filter(default_level)).with_target(true).init();
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn falls_back_to_default_level() {
        let _guard = crate::env::tests::ENV_LOCK.lock().expect("env lock poisoned");
        std::env::remove_var("RUST_LOG");
        std::env::remove_var("LOG_LEVEL");

        let filter = build_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn log_level_is_used_when_rust_log_unset() {
        let _guard = crate::env::tests::ENV_LOCK.lock().expect("env lock poisoned");
        std::env::remove_var("RUST_LOG");
        std::env::set_var("LOG_LEVEL", "warn");

        let filter = build_filter("info");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        std::env::remove_var("LOG_LEVEL");
    }
}
