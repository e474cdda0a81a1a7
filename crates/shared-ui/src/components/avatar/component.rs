use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;
use shared_types::format::initials;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Clickable avatar for the dashboard header: image when available,
/// initials otherwise.
#[component]
pub fn UserAvatar(
    name: String,
    #[props(default)] image_url: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let fallback = initials(&name);

    rsx! {
        button {
            class: "user-avatar",
            r#type: "button",
            "aria-label": "{name}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            Avatar {
                if let Some(url) = image_url {
                    AvatarImage { src: url }
                }
                AvatarFallback { "{fallback}" }
            }
        }
    }
}
