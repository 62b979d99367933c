use env_logger::Env;

/// Initializes the process-wide logger. Defaults to info, or debug when
/// verbose; an explicit RUST_LOG setting still wins.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}
