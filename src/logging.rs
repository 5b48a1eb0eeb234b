use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive, e.g. `CLOUDSTRAP_LOG=debug`.
pub const LOG_ENV: &str = "CLOUDSTRAP_LOG";

/// Default filter for a `-v` count.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr.
///
/// Stdout belongs to the launched program, so logs never go there.
/// `CLOUDSTRAP_LOG` wins over the `-v` count when set.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}
