use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `level` comes from the config file and
/// only applies when `RUST_LOG` is unset.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match (verbose, level) {
        (true, _) => "people_registry=debug,info".to_string(),
        (false, Some(level)) => format!("people_registry={}", level),
        (false, None) => "people_registry=info".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // stdout carries the table, logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
