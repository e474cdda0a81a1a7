use dioxus::prelude::*;

/// Badge tone. Listing categories use `Neutral`; counters and items waiting on
/// the employer use `Attention`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Attention,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Attention => "attention",
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Text for a menu counter: `None` and zero show nothing, large counts cap
/// at `99+`.
pub fn count_label(count: Option<u32>) -> Option<String> {
    match count {
        Some(n) if n > 99 => Some("99+".to_string()),
        Some(n) if n > 0 => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric counter pill used next to menu labels.
#[component]
pub fn CountBadge(count: Option<u32>) -> Element {
    match count_label(count) {
        Some(label) => rsx! {
            Badge { tone: BadgeTone::Attention, class: "count-badge", "{label}" }
        },
        None => rsx! {},
    }
}
