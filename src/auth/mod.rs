//! Authentication handling
//!
//! Two acquisition paths produce an auth header set:
//! - Credential POST against the portal's logon endpoint (CyberArk, LDAP,
//!   RADIUS), yielding a bearer token
//! - Browser-driven SAML login, yielding a session cookie

pub mod rest;
pub mod saml;

use std::fmt;

use clap::ValueEnum;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, COOKIE};

use crate::errors::Result;

/// The authentication methods the portal exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthMethod {
    #[value(name = "cyberark")]
    CyberArk,
    #[value(name = "ldap")]
    Ldap,
    #[value(name = "radius")]
    Radius,
    #[value(name = "saml")]
    Saml,
}

impl AuthMethod {
    /// Menu order, matching the numbered selection prompt
    pub const ALL: [AuthMethod; 4] = [
        AuthMethod::CyberArk,
        AuthMethod::Ldap,
        AuthMethod::Radius,
        AuthMethod::Saml,
    ];

    /// The method name as it appears in the logon URL path
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::CyberArk => "CyberArk",
            AuthMethod::Ldap => "LDAP",
            AuthMethod::Radius => "RADIUS",
            AuthMethod::Saml => "SAML",
        }
    }

    /// SAML is completed manually in a browser; everything else is a
    /// direct credential POST
    pub fn uses_browser(&self) -> bool {
        matches!(self, AuthMethod::Saml)
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username/password pair collected from the operator
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Proof of authentication produced by one of the acquisition paths.
///
/// Lives for the duration of one run and is consumed by exactly one
/// verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquiredAuth {
    /// Opaque token from the logon endpoint, sent as `Authorization: Bearer`
    Bearer(String),
    /// Session cookie captured from the browser after SAML login
    SessionCookie { name: String, value: String },
}

impl AcquiredAuth {
    /// Render the auth header set for the verification call
    pub fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            AcquiredAuth::Bearer(token) => {
                headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
            }
            AcquiredAuth::SessionCookie { name, value } => {
                headers.insert(COOKIE, HeaderValue::from_str(&format!("{}={}", name, value))?);
            }
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_path_segments() {
        assert_eq!(AuthMethod::CyberArk.as_str(), "CyberArk");
        assert_eq!(AuthMethod::Ldap.as_str(), "LDAP");
        assert_eq!(AuthMethod::Radius.as_str(), "RADIUS");
        assert_eq!(AuthMethod::Saml.as_str(), "SAML");
    }

    #[test]
    fn test_only_saml_uses_browser() {
        assert!(AuthMethod::Saml.uses_browser());
        assert!(!AuthMethod::CyberArk.uses_browser());
        assert!(!AuthMethod::Ldap.uses_browser());
        assert!(!AuthMethod::Radius.uses_browser());
    }

    #[test]
    fn test_bearer_header() {
        let auth = AcquiredAuth::Bearer("abc123".to_string());
        let headers = auth.header_map().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_cookie_header() {
        let auth = AcquiredAuth::SessionCookie {
            name: "ApprendaSession".to_string(),
            value: "xyz".to_string(),
        };
        let headers = auth.header_map().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(COOKIE).unwrap(), "ApprendaSession=xyz");
    }

    #[test]
    fn test_invalid_header_value_rejected() {
        let auth = AcquiredAuth::Bearer("abc\ndef".to_string());
        assert!(auth.header_map().is_err());
    }
}
