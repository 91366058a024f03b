use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "FAIRWAY_LOG";

/// Install a stderr subscriber.
///
/// `FAIRWAY_LOG` wins when set; otherwise `verbose` selects `debug`,
/// and the default is `warn` so normal output stays clean.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "fairway=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // try_init so a second call (tests, embedding) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
