use std::env;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive. An explicit level (from `-v`) wins, then
/// `RUST_LOG`, then `debug` when `NUMKIT_DEBUG=true`, else `info`.
pub fn filter_directive(
    explicit: Option<&str>,
    rust_log: Option<String>,
    numkit_debug: Option<String>,
) -> String {
    if let Some(level) = explicit {
        return level.to_string();
    }
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directive;
    }
    match numkit_debug.as_deref() {
        Some("true") => "debug".to_string(),
        _ => "info".to_string(),
    }
}

pub fn init_tracing() {
    init(None);
}

/// Same as [`init_tracing`] but `level` overrides `RUST_LOG`.
pub fn init_tracing_with(level: &str) {
    init(Some(level));
}

fn init(explicit: Option<&str>) {
    let directive = filter_directive(
        explicit,
        env::var("RUST_LOG").ok(),
        env::var("NUMKIT_DEBUG").ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries results, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
