use dioxus::prelude::*;

/// Card-shaped placeholder for a listing that is still loading: a title bar
/// and `lines` shorter detail bars.
#[component]
pub fn SkeletonCard(
    #[props(default = 3)] lines: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            "aria-label": "Đang tải",
            ..merged,
            div { class: "skeleton-bar", "data-size": "title" }
            for i in 0..lines {
                div { key: "{i}", class: "skeleton-bar", "data-size": "line" }
            }
        }
    }
}
