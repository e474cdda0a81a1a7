use api::{ApiClient, ProfileService};
use dioxus::prelude::*;
use shared_types::{paths, AppErrorKind, CreateEmployerProfileRequest};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, PageHeader,
};

use super::push_path;
use crate::session::use_session;

/// Employer onboarding: creates the profile the dashboard guard looks for.
#[component]
pub fn BusinessInfo() -> Element {
    let api: ApiClient = use_context();
    let session = use_session();
    let router = navigator();

    let mut company_name = use_signal(String::new);
    let mut tax_code = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut company_error = use_signal(|| Option::<String>::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            company_error.set(None);
            form_error.set(None);

            let request = match CreateEmployerProfileRequest::from_form(
                &company_name(),
                &tax_code(),
                &address(),
                &website(),
            ) {
                Ok(request) => request,
                Err(e) => {
                    company_error.set(Some(e.message));
                    return;
                }
            };

            let Some(token) = session.token() else {
                push_path(router, paths::LOGIN);
                return;
            };

            saving.set(true);
            let result = api.create_profile(&token, &request).await;
            saving.set(false);

            match result {
                Ok(_) => push_path(router, paths::EMPLOYER_DASHBOARD),
                Err(e) if e.kind == AppErrorKind::Unauthorized => {
                    tracing::warn!(error = %e, "Session rejected while saving profile");
                    push_path(router, paths::LOGIN);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Could not save employer profile");
                    form_error.set(Some(e.friendly_message()));
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader {
            title: "Thông tin doanh nghiệp",
            description: "Nhà tuyển dụng cần hồ sơ doanh nghiệp trước khi đăng tin.",
        }

        Card { class: "business-card",
            CardHeader {
                CardTitle { "Hoàn tất hồ sơ nhà tuyển dụng" }
                CardDescription {
                    "Cung cấp thông tin doanh nghiệp để bắt đầu đăng tin tuyển dụng."
                }
            }
            CardContent {
                if let Some(err) = form_error() {
                    div { class: "form-error", role: "alert", "{err}" }
                }
                form { class: "business-form", onsubmit: handle_submit,
                    Input {
                        label: "Tên công ty",
                        required: true,
                        value: company_name(),
                        error: company_error(),
                        on_input: move |e: FormEvent| company_name.set(e.value()),
                    }
                    Input {
                        label: "Mã số thuế",
                        value: tax_code(),
                        on_input: move |e: FormEvent| tax_code.set(e.value()),
                    }
                    Input {
                        label: "Địa chỉ",
                        value: address(),
                        on_input: move |e: FormEvent| address.set(e.value()),
                    }
                    Input {
                        label: "Website",
                        input_type: "url",
                        placeholder: "https://",
                        value: website(),
                        on_input: move |e: FormEvent| website.set(e.value()),
                    }
                    Button {
                        submit: true,
                        loading: saving(),
                        if saving() { "Đang lưu..." } else { "Lưu thông tin" }
                    }
                }
            }
        }
    }
}
