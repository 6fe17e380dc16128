//! Command-line argument definitions
//!
//! The tool is interactive by default; flags only override the built-in
//! portal constants or pre-answer the method menu.

use clap::Parser;

use crate::auth::AuthMethod;
use crate::config::{DEFAULT_COOKIE_NAME, DEFAULT_PVWA_URL, DEFAULT_WEBDRIVER_URL};

/// Acquire a PVWA session interactively and verify it with one API call
#[derive(Parser, Debug)]
#[command(name = "pvwa-login", version, about)]
pub struct Args {
    /// Portal base URL
    #[arg(long, env = "PVWA_URL", default_value = DEFAULT_PVWA_URL)]
    pub url: String,

    /// Session cookie name to capture after SAML login
    #[arg(long, default_value = DEFAULT_COOKIE_NAME)]
    pub cookie_name: String,

    /// WebDriver endpoint used for the SAML browser flow
    #[arg(long, env = "WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver: String,

    /// Authentication method (skips the interactive menu)
    #[arg(long, value_enum)]
    pub method: Option<AuthMethod>,

    /// Validate TLS certificates (disabled by default for lab portals)
    #[arg(long)]
    pub verify_tls: bool,

    /// Enable verbose diagnostic output
    #[arg(long)]
    pub debug: bool,
}
