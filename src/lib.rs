//! pvwa-login library interface
//!
//! Interactive credential-acquisition helper for a CyberArk PVWA portal.
//!
//! # Module Organization
//!
//! - [`auth`] - Acquisition paths (credential POST, browser-driven SAML)
//! - [`client`] - HTTP client construction and the verification call
//! - [`prompt`] - Interactive prompts (method menu, credentials, ENTER gate)
//! - [`core`] - Main execution flow
//! - [`errors`] - Error types (PvwaError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod errors;
pub mod output;
pub mod prompt;
pub mod signals;
pub mod status;
