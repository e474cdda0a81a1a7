use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::warn!(path = %path, "No page for path");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Không tìm thấy trang" }
                p { class: "not-found-message",
                    "Trang "
                    code { "{path}" }
                    " không tồn tại hoặc đã bị gỡ."
                }
                Link { to: Route::Home {}, class: "not-found-link", "Về trang chủ" }
            }
        }
    }
}
