use api::{check_profile_and_redirect, evaluate_guard, handle_avatar_click, handle_login_redirect};
use pretty_assertions::assert_eq;
use shared_types::{paths, GuardOutcome, SessionToken};

use crate::common::{self, reply, MockBackend, NavRecorder};

const PROFILE: &str = r#"{"id":3,"companyName":"Inno Café","taxCode":"0101234567"}"#;

async fn profile_backend(status: u16, body: &str) -> MockBackend {
    common::spawn_backend(vec![reply("GET", "/employer/profile", status, body)]).await
}

fn employer() -> SessionToken {
    common::token_for("Employer")
}

#[tokio::test]
async fn employer_with_profile_stays_put() {
    let backend = profile_backend(200, PROFILE).await;
    let token = common::token_for("Employer");
    let mut nav = NavRecorder::default();

    let allowed = check_profile_and_redirect(nav.navigate(), &token, &backend.client).await;

    assert!(allowed);
    assert!(nav.visited.is_empty());
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/employer/profile");
    assert_eq!(requests[0].authorization, Some(format!("Bearer {}", token.as_str())));
}

#[tokio::test]
async fn missing_profile_redirects_to_onboarding_once() {
    let backend = profile_backend(404, r#"{"message":"Employer profile not found"}"#).await;
    let mut nav = NavRecorder::default();

    let allowed = check_profile_and_redirect(nav.navigate(), &employer(), &backend.client).await;

    assert!(!allowed);
    assert_eq!(nav.visited, vec![paths::EMPLOYER_BUSINESS_INFO.to_string()]);
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn null_or_empty_profile_body_counts_as_missing() {
    for body in ["null", ""] {
        let backend = profile_backend(200, body).await;
        let outcome = evaluate_guard(&employer(), &backend.client).await;
        assert_eq!(outcome, GuardOutcome::RedirectToOnboarding, "body {body:?}");
    }
}

#[tokio::test]
async fn server_errors_fail_open() {
    for status in [401, 403, 500, 503] {
        let backend = profile_backend(status, "").await;
        let mut nav = NavRecorder::default();

        let allowed =
            check_profile_and_redirect(nav.navigate(), &employer(), &backend.client).await;

        assert!(allowed, "status {status}");
        assert!(nav.visited.is_empty(), "status {status}");
    }
}

#[tokio::test]
async fn unreachable_backend_fails_open() {
    let client = common::unreachable_client().await;
    let outcome = evaluate_guard(&employer(), &client).await;
    assert_eq!(outcome, GuardOutcome::ProceedAfterError);
}

#[tokio::test]
async fn malformed_profile_body_fails_open() {
    let backend = profile_backend(200, "<html>").await;
    let outcome = evaluate_guard(&employer(), &backend.client).await;
    assert_eq!(outcome, GuardOutcome::ProceedAfterError);
}

#[tokio::test]
async fn non_employers_never_hit_the_backend() {
    let backend = profile_backend(404, "").await;

    for role in ["Candidate", "Admin", ""] {
        let mut nav = NavRecorder::default();
        let token = common::token_for(role);
        let allowed = check_profile_and_redirect(nav.navigate(), &token, &backend.client).await;
        assert!(allowed, "role {role:?}");
        assert!(nav.visited.is_empty());
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn avatar_click_opens_dashboard_for_onboarded_employer() {
    let backend = profile_backend(200, PROFILE).await;
    let mut nav = NavRecorder::default();

    handle_avatar_click(nav.navigate(), &employer(), &backend.client).await;

    assert_eq!(nav.visited, vec![paths::EMPLOYER_DASHBOARD.to_string()]);
}

#[tokio::test]
async fn login_redirect_sends_new_employer_to_onboarding_only() {
    let backend = profile_backend(404, "").await;
    let mut nav = NavRecorder::default();

    handle_login_redirect(nav.navigate(), &employer(), &backend.client).await;

    assert_eq!(nav.visited, vec![paths::EMPLOYER_BUSINESS_INFO.to_string()]);
}
