use tracing_subscriber::EnvFilter;

/// Human-readable events on stderr; stdout stays reserved for results.
///
/// Default level is `info`, `debug` with `--verbose`. `RUST_LOG` wins when set.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: a global subscriber may already be set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
