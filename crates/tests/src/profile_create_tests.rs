use api::ProfileService;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, CreateEmployerProfileRequest};

use crate::common::{self, reply};

#[tokio::test]
async fn create_profile_posts_camel_case_body() {
    let backend = common::spawn_backend(vec![reply(
        "POST",
        "/employer/profile",
        201,
        r#"{"id":"emp-1","companyName":"Inno Café","website":"https://inno.vn"}"#,
    )])
    .await;
    let token = common::token_for("Employer");
    let request = CreateEmployerProfileRequest::from_form(
        " Inno Café ",
        "",
        "12 Lý Thường Kiệt",
        "https://inno.vn",
    )
    .unwrap();

    let profile = backend.client.create_profile(&token, &request).await.unwrap();

    assert_eq!(profile.company_name.as_deref(), Some("Inno Café"));
    let requests = backend.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].authorization, Some(format!("Bearer {}", token.as_str())));
    let sent: Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        sent,
        json!({
            "companyName": "Inno Café",
            "address": "12 Lý Thường Kiệt",
            "website": "https://inno.vn"
        })
    );
}

#[tokio::test]
async fn validation_error_carries_backend_message() {
    let backend = common::spawn_backend(vec![reply(
        "POST",
        "/employer/profile",
        400,
        r#"{"message":"Mã số thuế không hợp lệ"}"#,
    )])
    .await;
    let request = CreateEmployerProfileRequest::from_form("Inno", "abc", "", "").unwrap();

    let err = backend
        .client
        .create_profile(&common::token_for("Employer"), &request)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.friendly_message(), "Mã số thuế không hợp lệ");
}
