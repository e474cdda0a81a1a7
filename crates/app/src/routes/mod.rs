pub mod blog;
pub mod business_info;
pub mod freelance;
pub mod home;
pub mod jobs;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod sections;

use api::{check_profile_and_redirect, handle_avatar_click, ApiClient};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use shared_types::{nav, paths, NavItem, SessionToken, SITE};
use shared_ui::{
    Button, ButtonVariant, MobileNav, MobileNavItem, Navbar, NavbarBrand, NavbarLink, NavbarLinks,
    NavbarSpacer, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarProvider, SidebarTrigger, UserAvatar,
};

use crate::icons::NavGlyph;
use crate::session::use_session;

use blog::Blog;
use business_info::BusinessInfo;
use home::Home;
use jobs::Jobs;
use login::Login;
use logout::Logout;
use not_found::NotFound;
use sections::{
    AdminDashboard, AdminJobs, AdminReports, AdminUsers, EmployerCandidates, EmployerDashboard,
    EmployerJobs, EmployerMessages, EmployerSettings,
};

/// Application routes. Paths mirror `shared_types::paths`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MarketingLayout)]
    #[route("/")]
    Home {},
    #[route("/jobs")]
    Jobs {},
    #[route("/blog")]
    Blog {},
    #[route("/login")]
    Login {},
    #[end_layout]
    #[route("/logout")]
    Logout {},
    #[layout(EmployerLayout)]
    #[route("/employer/dashboard")]
    EmployerDashboard {},
    #[route("/employer/jobs")]
    EmployerJobs {},
    #[route("/employer/candidates")]
    EmployerCandidates {},
    #[route("/employer/messages")]
    EmployerMessages {},
    #[route("/employer/business-info")]
    BusinessInfo {},
    #[route("/employer/settings")]
    EmployerSettings {},
    #[end_layout]
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/jobs")]
    AdminJobs {},
    #[route("/admin/reports")]
    AdminReports {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Navigate to one of the path constants in `shared_types::paths`.
pub fn push_path(router: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            router.push(route);
        }
        Err(_) => tracing::warn!(path, "No route for path"),
    }
}

/// Public pages: top navigation, page body, footer.
#[component]
fn MarketingLayout() -> Element {
    let route: Route = use_route();
    let current = route.to_string();
    let router = navigator();
    let session = use_session();

    let (cta_label, cta_path) = match session.role() {
        Some(role) if role.is_employer() => ("Bảng điều khiển", paths::EMPLOYER_DASHBOARD),
        Some(role) if role.is_admin() => ("Quản trị", paths::ADMIN_DASHBOARD),
        Some(_) => ("Đăng xuất", paths::LOGOUT),
        None => ("Đăng nhập", paths::LOGIN),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "marketing-shell",
            Navbar {
                NavbarBrand { name: SITE.brand, onclick: move |_| push_path(router, paths::HOME) }
                NavbarLinks {
                    for item in SITE.marketing_nav.iter() {
                        NavbarLink {
                            key: "{item.id}",
                            active: nav::is_active(&current, item.path),
                            onclick: move |_| push_path(router, item.path),
                            NavGlyph { icon: item.icon, size: 16 }
                            "{item.label}"
                        }
                    }
                }
                NavbarSpacer {}
                Button { onclick: move |_| push_path(router, cta_path), "{cta_label}" }
            }

            main { class: "marketing-main",
                Outlet::<Route> {}
            }

            footer { class: "marketing-footer",
                div { class: "marketing-footer-brand",
                    strong { "{SITE.brand}" }
                    p { "{SITE.tagline}" }
                }
                nav { class: "marketing-footer-links",
                    for item in SITE.marketing_nav.iter() {
                        button {
                            key: "{item.id}",
                            r#type: "button",
                            class: "marketing-footer-link",
                            onclick: move |_| push_path(router, item.path),
                            "{item.label}"
                        }
                    }
                }
                p { class: "marketing-footer-copy", "© 2024 {SITE.brand}" }
            }
        }
    }
}

/// Which dashboard shell is being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Employer,
    Admin,
}

/// What a dashboard shell renders for the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellAccess {
    /// The stored token has not been read back yet.
    Pending,
    RedirectToLogin,
    Enter(SessionToken),
}

/// Access rule for the dashboard shells.
///
/// Any stored token opens the employer shell; the onboarding guard sorts out
/// roles from there. The admin shell needs a token whose role decodes to
/// `Admin`.
pub fn shell_access(restored: bool, token: Option<&SessionToken>, shell: ShellKind) -> ShellAccess {
    if !restored {
        return ShellAccess::Pending;
    }
    let Some(token) = token else {
        return ShellAccess::RedirectToLogin;
    };
    match shell {
        ShellKind::Employer => ShellAccess::Enter(token.clone()),
        ShellKind::Admin if token.role().is_ok_and(|role| role.is_admin()) => {
            ShellAccess::Enter(token.clone())
        }
        ShellKind::Admin => ShellAccess::RedirectToLogin,
    }
}

/// Shown while the stored session is being read or a redirect is pending.
#[component]
fn ShellPlaceholder(message: String) -> Element {
    rsx! {
        div { class: "shell-loading",
            p { "{message}" }
        }
    }
}

/// Runs the onboarding guard once per mount of the employer shell.
#[component]
fn ProfileGate() -> Element {
    let api: ApiClient = use_context();
    let session = use_session();
    let router = navigator();

    let _guard = use_resource(move || {
        let api = api.clone();
        let token = session.token.peek().clone();
        async move {
            if let Some(token) = token {
                let navigate = |path: &str| push_path(router, path);
                check_profile_and_redirect(navigate, &token, &api).await;
            }
        }
    });

    rsx! {}
}

/// Sidebar entries for one dashboard shell.
#[component]
fn DashboardMenu(items: &'static [NavItem], current: String) -> Element {
    let router = navigator();

    rsx! {
        SidebarMenu {
            for item in items.iter() {
                SidebarMenuButton {
                    key: "{item.id}",
                    active: nav::is_active(&current, item.path),
                    badge: item.badge,
                    onclick: move |_| push_path(router, item.path),
                    NavGlyph { icon: item.icon }
                    "{item.label}"
                }
            }
        }
    }
}

/// Employer dashboard shell. Requires a stored token; employers without a
/// profile are sent to onboarding.
#[component]
fn EmployerLayout() -> Element {
    let route: Route = use_route();
    let current = route.to_string();
    let router = navigator();
    let api: ApiClient = use_context();
    let session = use_session();

    let access = shell_access(session.is_restored(), session.token().as_ref(), ShellKind::Employer);
    let token = match access {
        ShellAccess::Pending => return rsx! { ShellPlaceholder { message: "Đang tải..." } },
        ShellAccess::RedirectToLogin => {
            push_path(router, paths::LOGIN);
            return rsx! { ShellPlaceholder { message: "Đang chuyển đến trang đăng nhập..." } };
        }
        ShellAccess::Enter(token) => token,
    };

    let title = nav::page_title(SITE.employer_sidebar, &current).unwrap_or(SITE.brand);

    let on_avatar = move |_: MouseEvent| {
        let api = api.clone();
        let token = token.clone();
        spawn(async move {
            handle_avatar_click(|path: &str| push_path(router, path), &token, &api).await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        ProfileGate {}

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    NavbarBrand {
                        name: SITE.brand,
                        onclick: move |_| push_path(router, paths::HOME),
                    }
                }
                SidebarContent {
                    DashboardMenu { items: SITE.employer_sidebar, current: current.clone() }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-logout",
                        onclick: move |_| push_path(router, paths::LOGOUT),
                        "Đăng xuất"
                    }
                }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger { "☰" }
                    span { class: "navbar-divider", "aria-hidden": "true" }
                    span { class: "navbar-title", "{title}" }
                    NavbarSpacer {}
                    UserAvatar { name: "Nhà tuyển dụng", onclick: on_avatar }
                }
                div { class: "dashboard-body",
                    Outlet::<Route> {}
                }
            }
        }

        MobileNav {
            for item in SITE.employer_mobile_nav.iter() {
                MobileNavItem {
                    key: "{item.id}",
                    label: item.label,
                    active: nav::is_active(&current, item.path),
                    badge: item.badge,
                    onclick: move |_| push_path(router, item.path),
                    NavGlyph { icon: item.icon, size: 20 }
                }
            }
        }
    }
}

/// Admin dashboard shell. Only admin tokens get in.
#[component]
fn AdminLayout() -> Element {
    let route: Route = use_route();
    let current = route.to_string();
    let router = navigator();
    let session = use_session();

    match shell_access(session.is_restored(), session.token().as_ref(), ShellKind::Admin) {
        ShellAccess::Pending => return rsx! { ShellPlaceholder { message: "Đang tải..." } },
        ShellAccess::RedirectToLogin => {
            tracing::warn!(path = %current, "Admin area requires an admin session");
            push_path(router, paths::LOGIN);
            return rsx! { ShellPlaceholder { message: "Đang chuyển đến trang đăng nhập..." } };
        }
        ShellAccess::Enter(_) => {}
    }

    let title = nav::page_title(SITE.admin_sidebar, &current).unwrap_or("Quản trị");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar { class: "sidebar-admin",
                SidebarHeader {
                    NavbarBrand {
                        name: SITE.brand,
                        onclick: move |_| push_path(router, paths::HOME),
                    }
                }
                SidebarContent {
                    DashboardMenu { items: SITE.admin_sidebar, current: current.clone() }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-logout",
                        onclick: move |_| push_path(router, paths::LOGOUT),
                        "Đăng xuất"
                    }
                }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger { "☰" }
                    span { class: "navbar-title", "{title}" }
                    NavbarSpacer {}
                    UserAvatar { name: "Quản trị viên" }
                }
                div { class: "dashboard-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
