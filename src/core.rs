//! Main execution flow
//!
//! select method -> acquire auth headers -> (if acquired) verify, else
//! report failure. All failures are terminal for the run.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::auth::{self, AcquiredAuth};
use crate::cli::Args;
use crate::client;
use crate::config::Config;
use crate::errors::Result;
use crate::prompt;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Parses arguments, sets up logging and the async runtime, and drives the
/// linear login flow.
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_tracing(parsed.debug);
    let config = Config::from_args(&parsed);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitStatus::Error;
        }
    };

    match runtime.block_on(run_flow(&parsed, &config)) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::Error
        }
    }
}

async fn run_flow(args: &Args, config: &Config) -> Result<ExitStatus> {
    // Catch a malformed --url before any prompting
    Url::parse(&config.base_url)?;

    let method = match args.method {
        Some(method) => method,
        None => prompt::select_method_interactive().await?,
    };
    debug!(method = method.as_str(), "selected authentication method");

    let http = client::build_client(config)?;

    let acquired: Option<AcquiredAuth> = if method.uses_browser() {
        auth::saml::login(config).await?
    } else {
        let creds = prompt::read_credentials().await?;
        auth::rest::logon(&http, config, method, &creds).await?
    };

    match acquired {
        Some(auth) => client::verify_access(&http, config, &auth).await,
        None => {
            eprintln!("[!] Authentication failed. Exiting.");
            Ok(ExitStatus::Error)
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
