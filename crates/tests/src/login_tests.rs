use api::AuthService;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, LoginRequest, Role, SessionToken};

use crate::common::{self, reply};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "chu.quan@inno.vn".to_string(),
        password: "matkhau123".to_string(),
    }
}

#[tokio::test]
async fn login_returns_token_with_role() {
    let issued = common::token_for("Employer");
    let backend = common::spawn_backend(vec![reply(
        "POST",
        "/auth/login",
        200,
        &json!({ "token": issued.as_str() }).to_string(),
    )])
    .await;

    let response = backend.client.login(&credentials()).await.unwrap();

    let token = SessionToken::new(response.token).unwrap();
    assert_eq!(token.role().unwrap(), Role::Employer);
    let sent: Value = serde_json::from_str(&backend.requests()[0].body).unwrap();
    assert_eq!(sent, json!({"email": "chu.quan@inno.vn", "password": "matkhau123"}));
}

#[tokio::test]
async fn login_accepts_access_token_field() {
    let backend = common::spawn_backend(vec![reply(
        "POST",
        "/auth/login",
        200,
        r#"{"accessToken":"a.b.c","expiresIn":3600}"#,
    )])
    .await;

    let response = backend.client.login(&credentials()).await.unwrap();
    assert_eq!(response.token, "a.b.c");
}

#[tokio::test]
async fn rejected_credentials_are_unauthorized() {
    let backend = common::spawn_backend(vec![reply(
        "POST",
        "/auth/login",
        401,
        r#"{"message":"Sai email hoặc mật khẩu"}"#,
    )])
    .await;

    let err = backend.client.login(&credentials()).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Sai email hoặc mật khẩu");
}
