use dioxus::prelude::*;

/// Dashboard page heading with an optional line of context under the title.
#[component]
pub fn PageHeader(title: String, #[props(default)] description: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if let Some(description) = description {
                p { class: "page-description", "{description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_optional_description() {
        let html = dioxus_ssr::render_element(rsx! { PageHeader { title: "Ứng viên" } });
        assert!(html.contains(">Ứng viên</h1>"), "{html}");
        assert!(!html.contains("page-description"));

        let html = dioxus_ssr::render_element(rsx! {
            PageHeader { title: "Tổng quan", description: "3 mục cần xử lý" }
        });
        assert!(html.contains("3 mục cần xử lý"), "{html}");
    }
}
