use env_logger::Env;

/// Logs go to stderr; stdout carries the JSON results.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
