use dioxus::prelude::*;

use crate::CountBadge;

/// Fixed bottom tab bar shown on phones in the employer dashboard.
#[component]
pub fn MobileNav(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "mobile-nav", "aria-label": "Điều hướng", {children} }
    }
}

#[component]
pub fn MobileNavItem(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default)] badge: Option<u32>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "mobile-nav-item",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            span { class: "mobile-nav-icon",
                {children}
                CountBadge { count: badge }
            }
            span { class: "mobile-nav-label", "{label}" }
        }
    }
}
