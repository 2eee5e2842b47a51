pub mod time;

/// Returns true if the application is running in development mode.
/// Checks if TABLES_URL points at a local service.
pub fn is_dev_mode() -> bool {
    option_env!("TABLES_URL")
        .map(|url| url.contains("localhost"))
        .unwrap_or(false)
}
