use api::{handle_login_redirect, ApiClient, AuthService};
use dioxus::prelude::*;
use shared_types::{paths, AppError, AppErrorKind, LoginRequest, Role, SessionToken};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use super::push_path;
use crate::session::use_session;

const GENERIC_LOGIN_ERROR: &str = "Đăng nhập không thành công. Vui lòng thử lại.";
const BAD_CREDENTIALS: &str = "Email hoặc mật khẩu không đúng.";

/// Message for a failed login. Backend messages are shown as sent; bare
/// status fallbacks are replaced.
fn login_error_message(e: &AppError) -> String {
    let bare_status = e.message.is_empty() || e.message.starts_with("HTTP ");
    match e.kind {
        AppErrorKind::Unauthorized if bare_status => BAD_CREDENTIALS.to_string(),
        AppErrorKind::Network | AppErrorKind::InternalError => GENERIC_LOGIN_ERROR.to_string(),
        _ if bare_status => GENERIC_LOGIN_ERROR.to_string(),
        _ => e.message.clone(),
    }
}

/// Landing path for a freshly signed-in role. Employers go through the
/// onboarding guard instead.
fn landing_path(role: &Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_DASHBOARD,
        Role::Employer => paths::EMPLOYER_DASHBOARD,
        _ => paths::HOME,
    }
}

#[component]
pub fn Login() -> Element {
    let api: ApiClient = use_context();
    let mut session = use_session();
    let router = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if request.email.is_empty() || request.password.is_empty() {
                error_msg.set(Some("Vui lòng nhập email và mật khẩu.".to_string()));
                return;
            }

            loading.set(true);
            error_msg.set(None);

            let response = match api.login(&request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error_msg.set(Some(login_error_message(&e)));
                    loading.set(false);
                    return;
                }
            };

            let Some(token) = SessionToken::new(response.token) else {
                tracing::error!("Login response carried an empty token");
                error_msg.set(Some(GENERIC_LOGIN_ERROR.to_string()));
                loading.set(false);
                return;
            };

            let role = token.role().unwrap_or(Role::Other(String::new()));
            tracing::info!(role = role.as_str(), "Signed in");
            session.sign_in(token.clone());
            loading.set(false);

            if role.is_employer() {
                handle_login_redirect(|path: &str| push_path(router, path), &token, &api).await;
            } else {
                push_path(router, landing_path(&role));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Đăng nhập" }
                    CardDescription { "Chào mừng bạn quay lại InnoSphere" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "ban@vidu.vn",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Mật khẩu",
                            input_type: "password",
                            id: "password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            submit: true,
                            class: "auth-submit",
                            loading: loading(),
                            if loading() { "Đang đăng nhập..." } else { "Đăng nhập" }
                        }
                    }
                }
            }
        }
    }
}
