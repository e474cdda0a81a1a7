use dioxus::prelude::*;

use crate::CountBadge;

/// Dashboard sidebar state, shared through context.
///
/// Wide screens show the docked column (`expanded`); phones show an overlay
/// (`mobile_open`). The stylesheet reads whichever applies at the current
/// width, so the two flags move independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub expanded: bool,
    pub mobile_open: bool,
}

impl SidebarState {
    /// Docked column as configured, overlay always starts closed.
    pub fn initial(expanded: bool) -> Self {
        Self {
            expanded,
            mobile_open: false,
        }
    }

    /// Trigger press: collapse or restore the column, open or close the overlay.
    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
            mobile_open: !self.mobile_open,
        }
    }

    /// Menu clicks and backdrop taps close the overlay and leave the docked
    /// column as it is.
    pub fn close_overlay(self) -> Self {
        Self {
            mobile_open: false,
            ..self
        }
    }

    fn desktop_attr(&self) -> &'static str {
        if self.expanded {
            "expanded"
        } else {
            "collapsed"
        }
    }

    fn mobile_attr(&self) -> &'static str {
        if self.mobile_open {
            "open"
        } else {
            "closed"
        }
    }
}

/// Owns the sidebar state for one dashboard shell.
#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_expanded: bool,
    children: Element,
) -> Element {
    let state = use_signal(|| SidebarState::initial(default_expanded));
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sidebar-provider", {children} }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Sidebar column. Below the tablet breakpoint it overlays the page and a
/// tap on the backdrop closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", current.desktop_attr(), None, false),
        Attribute::new("data-mobile-state", current.mobile_attr(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.mobile_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| {
                    let next = state().close_overlay();
                    state.set(next);
                },
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

/// One menu entry. Shows a count badge when `badge` is non-zero. A click
/// closes the phone overlay and leaves the docked column alone.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] badge: Option<u32>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                r#type: "button",
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    let next = state().close_overlay();
                    state.set(next);
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..merged,
                span { class: "sidebar-menu-label", {children} }
                CountBadge { count: badge }
            }
        }
    }
}

/// Header button that opens and closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Mở menu",
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            {children}
        }
    }
}

/// Page column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
