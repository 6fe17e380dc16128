//! Browser-driven SAML login
//!
//! The SSO/MFA exchange happens entirely in the browser, outside this
//! program's control. We drive the browser only far enough to reach the
//! portal, wait for the operator to finish, and lift the session cookie
//! out of the browser's cookie jar.

use cookie::Cookie;
use fantoccini::ClientBuilder;
use serde_json::json;
use tracing::debug;

use crate::auth::AcquiredAuth;
use crate::config::Config;
use crate::errors::{PvwaError, Result};
use crate::prompt;

/// A browser session that can report its cookies and be shut down.
///
/// Consuming `close` makes a double-close unrepresentable; callers are
/// responsible for reaching it on every path.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    async fn cookies(&mut self) -> Result<Vec<Cookie<'static>>>;
    async fn close(self) -> Result<()>;
}

/// Live WebDriver-backed session
pub struct WebDriverSession {
    client: fantoccini::Client,
}

impl WebDriverSession {
    /// Connect to the WebDriver endpoint and open a browser window.
    ///
    /// When TLS verification is off, the browser is told to accept the
    /// portal's certificate as well.
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut caps = serde_json::Map::new();
        if !config.verify_tls {
            caps.insert("acceptInsecureCerts".to_string(), json!(true));
        }

        let mut builder = ClientBuilder::rustls()
            .map_err(|e| PvwaError::Browser(format!("failed to build WebDriver client: {}", e)))?;
        builder.capabilities(caps);
        let client = builder.connect(&config.webdriver_url).await?;
        Ok(WebDriverSession { client })
    }

    pub async fn goto(&mut self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }
}

impl BrowserSession for WebDriverSession {
    async fn cookies(&mut self) -> Result<Vec<Cookie<'static>>> {
        Ok(self.client.get_all_cookies().await?)
    }

    async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

/// Scan the session's cookies for `cookie_name` and shut the browser down.
///
/// The session is closed exactly once on every path, including when cookie
/// retrieval fails.
pub async fn extract_session_cookie<S: BrowserSession>(
    mut session: S,
    cookie_name: &str,
) -> Result<Option<AcquiredAuth>> {
    let cookies = session.cookies().await;
    session.close().await?;
    let cookies = cookies?;

    debug!(count = cookies.len(), "scanning browser cookies");
    for cookie in cookies {
        if cookie.name() == cookie_name {
            return Ok(Some(AcquiredAuth::SessionCookie {
                name: cookie_name.to_string(),
                value: cookie.value().to_string(),
            }));
        }
    }
    Ok(None)
}

/// Run the full SAML flow: open the portal, wait for the operator, collect
/// the session cookie.
pub async fn login(config: &Config) -> Result<Option<AcquiredAuth>> {
    let mut session = WebDriverSession::connect(config).await?;
    eprintln!("Opening browser for SAML login...");

    let portal = config.portal_url();
    if let Err(e) = session.goto(&portal).await {
        session.close().await.ok();
        return Err(e);
    }

    let gate = prompt::enter_gate(
        "Complete SAML login & MFA in the browser. Press ENTER once logged in...",
    )
    .await;
    if let Err(e) = gate {
        session.close().await.ok();
        return Err(e);
    }

    let auth = extract_session_cookie(session, &config.cookie_name).await?;
    match &auth {
        Some(_) => eprintln!("[+] Session cookie acquired."),
        None => eprintln!(
            "[!] Failed to find '{}' cookie. Login may have failed.",
            config.cookie_name
        ),
    }
    Ok(auth)
}
