//! Common test utilities for pvwa-login integration tests

use std::time::Duration;

use pvwa_login::config::Config;

/// Build a config pointed at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.trim_end_matches('/').to_string(),
        cookie_name: "ApprendaSession".to_string(),
        webdriver_url: "http://localhost:4444".to_string(),
        verify_tls: false,
        timeout: Duration::from_secs(5),
    }
}
