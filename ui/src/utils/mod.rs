/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL points at a local address.
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost") || url.contains("127.0.0.1"))
        .unwrap_or(false)
}
