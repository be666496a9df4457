mod common;

use common::{Harness, ok};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use rust_edu_console::errors::ClientError;
use rust_edu_console::models::auth::{ChangePasswordRequest, LoginRequest};

fn login_request() -> LoginRequest {
    LoginRequest {
        username: "admin".to_string(),
        password: "Admin123".to_string(),
        remember_me: true,
    }
}

#[tokio::test]
async fn test_login_stores_token_before_next_request() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "admin", "password": "Admin123", "rememberMe": true})))
        .respond_with(ok(json!({
            "token": "fresh-token",
            "expiresIn": 7200,
            "user": {"id": 1, "username": "admin", "nickname": "管理员", "roles": ["admin"]}
        })))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/info"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ok(json!({"id": 1, "username": "admin", "nickname": "管理员"})))
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h.client.auth().login(&login_request()).await.expect("login");
    assert_eq!(response.token, "fresh-token");
    assert_eq!(h.client.session().token().as_deref(), Some("fresh-token"));
    assert_eq!(
        h.client.session().user().map(|u| u.display_name().to_string()),
        Some("管理员".to_string())
    );

    let profile = h.client.auth().profile().await.expect("profile");
    assert_eq!(profile.username, "admin");
}

#[tokio::test]
async fn test_invalid_login_form_sends_nothing() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ok(json!({"token": "x"})))
        .expect(0)
        .mount(&h.server)
        .await;

    let request = LoginRequest {
        username: " ".to_string(),
        ..login_request()
    };
    let err = h.client.auth().login(&request).await.expect_err("invalid");
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(!h.client.session().is_authenticated());
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ok(json!({"token": ""})))
        .mount(&h.server)
        .await;

    let err = h.client.auth().login(&login_request()).await.expect_err("no token");
    assert!(matches!(err, ClientError::Business(_)));
    assert!(!h.client.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_server_fails() {
    let h = Harness::logged_in("old-token").await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&h.server)
        .await;

    let result = h.client.auth().logout().await;
    assert!(matches!(result, Err(ClientError::Server(_))));
    assert!(!h.client.session().is_authenticated());
}

#[tokio::test]
async fn test_change_password_validates_locally() {
    let h = Harness::logged_in("t").await;
    Mock::given(method("PUT"))
        .and(path("/auth/password"))
        .respond_with(ok(Value::Null))
        .expect(1)
        .mount(&h.server)
        .await;

    let weak = ChangePasswordRequest {
        old_password: "Admin123".to_string(),
        new_password: "short".to_string(),
    };
    let err = h.client.auth().change_password(&weak).await.expect_err("weak");
    assert!(matches!(err, ClientError::Validation(_)));

    let strong = ChangePasswordRequest {
        old_password: "Admin123".to_string(),
        new_password: "Better456".to_string(),
    };
    h.client.auth().change_password(&strong).await.expect("changed");
}
