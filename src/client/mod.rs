//! HTTP client construction and the authenticated verification call

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::auth::AcquiredAuth;
use crate::config::Config;
use crate::errors::Result;
use crate::output;
use crate::status::ExitStatus;

pub const USER_AGENT_STRING: &str = concat!("pvwa-login/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for logon and verification calls
pub fn build_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT_STRING)
        .timeout(config.timeout);

    if !config.verify_tls {
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder.build()?)
}

/// Status and raw body of the verification call
#[derive(Debug)]
pub struct VerifyOutcome {
    pub status: u16,
    pub body: String,
}

/// Fetch the accounts listing with the acquired auth headers
pub async fn fetch_accounts(
    client: &Client,
    config: &Config,
    auth: &AcquiredAuth,
) -> Result<VerifyOutcome> {
    let url = config.accounts_url();
    debug!(%url, "verification request");

    let response = client.get(&url).headers(auth.header_map()?).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(VerifyOutcome { status, body })
}

/// Issue the verification call and print the result.
///
/// A 200 body is pretty-printed to stdout; anything else is reported with
/// its status and raw body.
pub async fn verify_access(
    client: &Client,
    config: &Config,
    auth: &AcquiredAuth,
) -> Result<ExitStatus> {
    eprintln!("[*] Querying PVWA /api/Accounts...");
    let outcome = fetch_accounts(client, config, auth).await?;

    if outcome.status == StatusCode::OK.as_u16() {
        eprintln!("[+] Authenticated API call succeeded.");
        match output::format_json(&outcome.body) {
            Ok(pretty) => println!("{}", pretty),
            // Not JSON; show it untouched
            Err(_) => println!("{}", outcome.body),
        }
        Ok(ExitStatus::Success)
    } else {
        eprintln!("[!] API call failed: {}", outcome.status);
        println!("{}", outcome.body);
        Ok(ExitStatus::Error)
    }
}
