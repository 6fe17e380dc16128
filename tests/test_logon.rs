//! Credential-POST logon tests
mod common;

use pvwa_login::auth::rest;
use pvwa_login::auth::{AcquiredAuth, AuthMethod, Credentials};
use pvwa_login::client::build_client;
use reqwest::header::AUTHORIZATION;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_logon_success_yields_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/PasswordVault/API/Auth/LDAP/Logon"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"abc123\""))
        .expect(1)
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let client = build_client(&config).unwrap();

    let auth = rest::logon(&client, &config, AuthMethod::Ldap, &creds("alice", "hunter2"))
        .await
        .unwrap();

    assert_eq!(auth, Some(AcquiredAuth::Bearer("abc123".to_string())));

    let headers = auth.unwrap().header_map().unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
}

#[tokio::test]
async fn test_logon_rejected_yields_no_auth_and_skips_verification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/PasswordVault/API/Auth/CyberArk/Logon"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"ErrorCode":"PASWS013E","ErrorMessage":"Authentication failure."}"#),
        )
        .mount(&server)
        .await;

    // A rejected login must never reach the accounts endpoint
    Mock::given(method("GET"))
        .and(path("/PasswordVault/api/Accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let client = build_client(&config).unwrap();

    let auth = rest::logon(&client, &config, AuthMethod::CyberArk, &creds("alice", "wrong"))
        .await
        .unwrap();
    assert_eq!(auth, None);

    // Same gate the flow driver applies: verify only with acquired auth
    if let Some(auth) = auth {
        pvwa_login::client::verify_access(&client, &config, &auth)
            .await
            .unwrap();
    }

    server.verify().await;
}

#[tokio::test]
async fn test_logon_uses_method_specific_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/PasswordVault/API/Auth/RADIUS/Logon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"tok\""))
        .expect(1)
        .mount(&server)
        .await;

    let config = common::test_config(&server.uri());
    let client = build_client(&config).unwrap();

    let auth = rest::logon(&client, &config, AuthMethod::Radius, &creds("bob", "otp123456"))
        .await
        .unwrap();

    assert_eq!(auth, Some(AcquiredAuth::Bearer("tok".to_string())));
}

#[tokio::test]
async fn test_logon_connection_error_surfaces() {
    // Nothing listening on this port
    let config = common::test_config("http://127.0.0.1:1");
    let client = build_client(&config).unwrap();

    let result = rest::logon(&client, &config, AuthMethod::Ldap, &creds("alice", "x")).await;
    assert!(result.is_err());
}
