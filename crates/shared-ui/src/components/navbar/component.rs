use dioxus::prelude::*;

/// Top bar used by both the marketing site and the dashboard shells.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn NavbarBrand(
    name: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let mark: String = name.chars().take(1).collect();

    rsx! {
        button {
            class: "navbar-brand",
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            span { class: "navbar-brand-mark", "{mark}" }
            span { class: "navbar-brand-name", "{name}" }
        }
    }
}

#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-links", {children} }
    }
}

/// Top-level link; `active` is decided by the caller from the current path.
#[component]
pub fn NavbarLink(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "navbar-link",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
