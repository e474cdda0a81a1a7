use api::{ApiClient, ListingService};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::{project_listings, AppError, JobListing, ListingCard};
use shared_ui::{Badge, Card, CardContent, CardFooter, CardHeader, CardTitle, SkeletonCard};

use crate::config::client_config;

/// Shown instead of the grid whenever the listing request fails.
pub const LISTINGS_ERROR: &str = "Không thể tải danh sách công việc.";
pub const LISTINGS_EMPTY: &str = "Chưa có công việc nào phù hợp.";

const SKELETON_CARDS: usize = 4;

/// What the listing section should render for the current resource state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingsView {
    Loading,
    Failed,
    Empty,
    Ready(Vec<ListingCard>),
}

pub fn listings_view(
    state: Option<&Result<Vec<JobListing>, AppError>>,
    now: DateTime<Utc>,
) -> ListingsView {
    match state {
        None => ListingsView::Loading,
        Some(Err(_)) => ListingsView::Failed,
        Some(Ok(items)) => {
            let cards = project_listings(items, now);
            if cards.is_empty() {
                ListingsView::Empty
            } else {
                ListingsView::Ready(cards)
            }
        }
    }
}

/// Latest hourly jobs, fetched once when the section mounts.
#[component]
pub fn FreelanceSection(
    #[props(default = "Việc làm mới nhất".to_string())] heading: String,
    #[props(default = false)] full_width: bool,
) -> Element {
    let api: ApiClient = use_context();
    let limit = client_config().homepage_listing_limit;

    let listings = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.homepage_listings(limit).await;
            match &result {
                Ok(items) => tracing::info!(count = items.len(), "Homepage listings loaded"),
                Err(e) => tracing::error!(error = %e, "Failed to load homepage listings"),
            }
            result
        }
    });

    let view = listings_view(listings.read().as_ref(), Utc::now());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./freelance.css") }

        section {
            class: "freelance-section",
            "data-full-width": if full_width { "true" } else { "false" },
            h2 { class: "section-title", "{heading}" }

            match view {
                ListingsView::Loading => rsx! {
                    div { class: "listing-grid", "aria-busy": "true",
                        for i in 0..SKELETON_CARDS {
                            SkeletonCard { key: "{i}", lines: 3 }
                        }
                    }
                },
                ListingsView::Failed => rsx! {
                    p { class: "listing-error", role: "alert", "{LISTINGS_ERROR}" }
                },
                ListingsView::Empty => rsx! {
                    p { class: "listing-empty", "{LISTINGS_EMPTY}" }
                },
                ListingsView::Ready(cards) => rsx! {
                    div { class: "listing-grid",
                        for card in cards {
                            ListingCardView { key: "{card.id}", card: card.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ListingCardView(card: ListingCard) -> Element {
    rsx! {
        Card { class: "listing-card",
            CardHeader {
                Badge { "{card.category}" }
                CardTitle { "{card.title}" }
                p { class: "listing-company", "{card.company}" }
            }
            CardContent {
                if !card.city.is_empty() {
                    p { class: "listing-meta",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                        "{card.city}"
                    }
                }
                if !card.time_range.is_empty() {
                    p { class: "listing-meta",
                        Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                        "{card.time_range}"
                    }
                }
            }
            CardFooter {
                span { class: "listing-rate", "{card.rate}" }
                span { class: "listing-age", "{card.time_ago}" }
            }
        }
    }
}
