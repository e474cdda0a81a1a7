use dioxus::prelude::*;
use shared_types::paths;

use super::push_path;
use crate::session::use_session;

/// Clears the stored token and returns to the login page.
#[component]
pub fn Logout() -> Element {
    let mut session = use_session();
    let router = navigator();

    use_effect(move || {
        session.sign_out();
        push_path(router, paths::LOGIN);
    });

    rsx! {
        div { class: "shell-loading",
            p { "Đang đăng xuất..." }
        }
    }
}
