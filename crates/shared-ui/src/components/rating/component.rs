use dioxus::prelude::*;

pub const MAX_RATING: u8 = 5;

/// Read-only star rating. Values above five are clamped.
#[component]
pub fn StarRating(value: u8) -> Element {
    let filled = value.min(MAX_RATING);
    let label = format!("{filled}/{MAX_RATING}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "star-rating", role: "img", "aria-label": "{label}",
            for i in 0..MAX_RATING {
                span {
                    class: "star",
                    "data-filled": if i < filled { "true" } else { "false" },
                    "★"
                }
            }
        }
    }
}
