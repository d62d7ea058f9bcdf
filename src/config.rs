/// Global configuration for the admin console
///
/// Every tunable used across the console lives here, mirroring the
/// constants of the server-rendered admin pages so both front ends
/// behave the same way. None of these are runtime-configurable.

use std::time::Duration;

/// Fixed tunables for the admin console.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ========== Timing ==========

    /// How long an alert stays on screen before auto-dismissing
    pub alert_timeout: Duration,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
    /// Duration of the fade used when an alert is removed
    pub animation_duration: Duration,

    // ========== Tables ==========

    /// Number of users requested per page from the server
    pub page_size: u32,
    /// Maximum page links a pagination bar would show (reserved, see DESIGN.md)
    pub max_visible_pages: u32,

    // ========== Validation ==========

    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Maximum accepted upload size in bytes (reserved, see DESIGN.md)
    pub max_file_size: u64,

    // ========== Server ==========

    /// Base URL of the library server
    pub base_url: String,
    /// Path prefix of the JSON admin API
    pub api_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_timeout: Duration::from_millis(5000),
            request_timeout: Duration::from_secs(10),
            animation_duration: Duration::from_millis(300),
            page_size: 20,
            max_visible_pages: 5,
            min_password_length: 8,
            max_file_size: 5 * 1024 * 1024,
            base_url: "http://localhost:8080".to_string(),
            api_path: "/admin/api".to_string(),
        }
    }
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_panel_constants() {
        let config = Config::new();

        assert_eq!(config.alert_timeout, Duration::from_millis(5000));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.animation_duration, Duration::from_millis(300));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.max_file_size, 5_242_880);
    }

    #[test]
    fn test_server_urls() {
        let config = Config::default();

        assert!(config.base_url.starts_with("http://"));
        assert!(config.api_path.starts_with('/'));
        // Joining must not produce a double slash
        assert!(!config.base_url.ends_with('/'));
    }
}
