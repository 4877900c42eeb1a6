use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never interleave with JSON on stdout.
/// `RUST_LOG` wins over the `--debug` flag.
pub fn init(debug: bool) {
    let default = if debug { "copyspark=debug" } else { "copyspark=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
