//! Credential-POST logon
//!
//! Posts a username/password pair to the method-specific logon endpoint.
//! A 200 response carries the bearer token as a JSON-quoted string.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::{AcquiredAuth, AuthMethod, Credentials};
use crate::config::Config;
use crate::errors::Result;

#[derive(Serialize)]
struct LogonBody<'a> {
    username: &'a str,
    password: &'a str,
}

/// Send the logon request.
///
/// Returns `Ok(Some(..))` with a bearer auth on success, `Ok(None)` when the
/// portal rejects the credentials (the status and body are reported to the
/// operator). Transport failures surface as errors.
pub async fn logon(
    client: &Client,
    config: &Config,
    method: AuthMethod,
    creds: &Credentials,
) -> Result<Option<AcquiredAuth>> {
    let url = config.logon_url(method);
    debug!(%url, method = method.as_str(), "sending logon request");

    let response = client
        .post(&url)
        .json(&LogonBody {
            username: &creds.username,
            password: &creds.password,
        })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::OK {
        let token = parse_token(&body);
        eprintln!("[+] Successfully logged in!");
        Ok(Some(AcquiredAuth::Bearer(token)))
    } else {
        warn!(status = status.as_u16(), "logon rejected");
        eprintln!("[!] Login failed: {}", status.as_u16());
        eprintln!("{}", body);
        Ok(None)
    }
}

/// The logon endpoint returns the token as a JSON string literal; strip the
/// surrounding quotes.
fn parse_token(body: &str) -> String {
    body.trim().trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_strips_quotes() {
        assert_eq!(parse_token("\"abc123\""), "abc123");
        assert_eq!(parse_token("\"abc123\"\n"), "abc123");
    }

    #[test]
    fn test_parse_token_unquoted_passthrough() {
        assert_eq!(parse_token("abc123"), "abc123");
    }
}
