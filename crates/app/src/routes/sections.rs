use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPackage;
use dioxus_free_icons::Icon;
use shared_types::{nav, paths, NavItem, SITE};
use shared_ui::{
    Badge, BadgeTone, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
};

/// Dashboard section titled after its menu entry, with no data yet.
#[component]
fn SectionPage(items: &'static [NavItem], path: &'static str) -> Element {
    let title = nav::page_title(items, path).unwrap_or(SITE.brand);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader { title }
        EmptyState { title }
    }
}

#[component]
fn EmptyState(title: String) -> Element {
    rsx! {
        Card { class: "empty-state",
            CardContent {
                span { class: "empty-state-icon",
                    Icon::<LdPackage> { icon: LdPackage, width: 32, height: 32 }
                }
                p { class: "empty-state-title", "Chưa có dữ liệu" }
                p { class: "empty-state-hint", "Nội dung của mục {title} sẽ hiển thị tại đây." }
            }
        }
    }
}

/// Employer overview: one stat card per badged sidebar entry.
#[component]
pub fn EmployerDashboard() -> Element {
    let counters: Vec<(&'static NavItem, u32)> = SITE
        .employer_sidebar
        .iter()
        .filter_map(|item| item.badge.map(|count| (item, count)))
        .collect();
    let pending: u32 = counters.iter().map(|(_, count)| count).sum();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sections.css") }

        PageHeader { title: "Tổng quan", description: "{pending} mục đang chờ bạn xử lý" }
        div { class: "stat-grid",
            for (item, count) in counters {
                Card { key: "{item.id}", class: "stat-card",
                    CardHeader {
                        CardDescription { "{item.label}" }
                        CardTitle { "{count}" }
                    }
                    CardContent {
                        Badge { tone: BadgeTone::Attention, "Cần xử lý" }
                    }
                }
            }
        }
        EmptyState { title: "Tổng quan" }
    }
}

#[component]
pub fn EmployerJobs() -> Element {
    rsx! { SectionPage { items: SITE.employer_sidebar, path: paths::EMPLOYER_JOBS } }
}

#[component]
pub fn EmployerCandidates() -> Element {
    rsx! { SectionPage { items: SITE.employer_sidebar, path: paths::EMPLOYER_CANDIDATES } }
}

#[component]
pub fn EmployerMessages() -> Element {
    rsx! { SectionPage { items: SITE.employer_sidebar, path: paths::EMPLOYER_MESSAGES } }
}

#[component]
pub fn EmployerSettings() -> Element {
    rsx! { SectionPage { items: SITE.employer_sidebar, path: paths::EMPLOYER_SETTINGS } }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { SectionPage { items: SITE.admin_sidebar, path: paths::ADMIN_DASHBOARD } }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { SectionPage { items: SITE.admin_sidebar, path: paths::ADMIN_USERS } }
}

#[component]
pub fn AdminJobs() -> Element {
    rsx! { SectionPage { items: SITE.admin_sidebar, path: paths::ADMIN_JOBS } }
}

#[component]
pub fn AdminReports() -> Element {
    rsx! { SectionPage { items: SITE.admin_sidebar, path: paths::ADMIN_REPORTS } }
}
