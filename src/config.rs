//! Runtime configuration
//!
//! Defaults match the portal constants this tool was built for; every value
//! can be overridden from the command line (see [`crate::cli`]).

use std::time::Duration;

use crate::auth::AuthMethod;
use crate::cli::Args;

/// Default PVWA portal base URL
pub const DEFAULT_PVWA_URL: &str = "https://pvwa.cybermark.lab";

/// Name of the session cookie set by the portal after a SAML login
pub const DEFAULT_COOKIE_NAME: &str = "ApprendaSession";

/// Default WebDriver endpoint for the browser-driven SAML flow
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Timeout applied to REST calls (the manual SAML wait is never timed)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal base URL, without a trailing slash
    pub base_url: String,
    /// Session cookie name to look for after SAML login
    pub cookie_name: String,
    /// WebDriver endpoint used for the SAML flow
    pub webdriver_url: String,
    /// Whether to validate TLS certificates (off by default; lab portals
    /// commonly run on private CAs)
    pub verify_tls: bool,
    /// Timeout for REST calls
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_PVWA_URL.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            verify_tls: false,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Build the configuration from parsed command-line arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            base_url: args.url.trim_end_matches('/').to_string(),
            cookie_name: args.cookie_name.clone(),
            webdriver_url: args.webdriver.clone(),
            verify_tls: args.verify_tls,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Portal landing page, the navigation target for the SAML browser flow
    pub fn portal_url(&self) -> String {
        format!("{}/PasswordVault", self.base_url)
    }

    /// Logon endpoint for a credential-POST method
    pub fn logon_url(&self, method: AuthMethod) -> String {
        format!(
            "{}/PasswordVault/API/Auth/{}/Logon",
            self.base_url,
            method.as_str()
        )
    }

    /// Accounts listing used as the authenticated verification call
    pub fn accounts_url(&self) -> String {
        format!("{}/PasswordVault/api/Accounts", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = Config::default();
        assert_eq!(
            config.logon_url(AuthMethod::Ldap),
            "https://pvwa.cybermark.lab/PasswordVault/API/Auth/LDAP/Logon"
        );
        assert_eq!(
            config.accounts_url(),
            "https://pvwa.cybermark.lab/PasswordVault/api/Accounts"
        );
        assert_eq!(
            config.portal_url(),
            "https://pvwa.cybermark.lab/PasswordVault"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        use clap::Parser;
        let args = Args::try_parse_from(["pvwa-login", "--url", "https://vault.example.org/"])
            .unwrap();
        let config = Config::from_args(&args);
        assert_eq!(config.base_url, "https://vault.example.org");
        assert_eq!(
            config.logon_url(AuthMethod::CyberArk),
            "https://vault.example.org/PasswordVault/API/Auth/CyberArk/Logon"
        );
    }
}
