use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber shared by the runtime binaries. `RUST_LOG`
/// adds to the default directive; stdout stays reserved for printed values.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "snake_runtime=debug"
    } else {
        "snake_runtime=warn"
    };
    let filter = match default_level.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
