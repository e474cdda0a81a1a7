use dioxus::prelude::*;
use shared_types::{paths, SITE};
use shared_ui::{Button, ButtonVariant, Card, CardContent, StarRating};

use super::blog::BlogTeaserGrid;
use super::freelance::FreelanceSection;
use super::push_path;
use crate::icons::NavGlyph;

#[component]
pub fn Home() -> Element {
    let router = navigator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "hero",
            div { class: "hero-copy",
                h1 { "Tìm việc theo giờ, nhận ca ngay hôm nay" }
                p { "{SITE.tagline}" }
                div { class: "hero-actions",
                    Button { onclick: move |_| push_path(router, paths::JOBS), "Tìm việc ngay" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| push_path(router, paths::LOGIN),
                        "Đăng tin tuyển dụng"
                    }
                }
            }
        }

        section { class: "home-section",
            h2 { class: "section-title", "Ngành nghề nổi bật" }
            div { class: "category-grid",
                for category in SITE.home_categories.iter() {
                    Card { key: "{category.label}", class: "category-card",
                        CardContent {
                            span { class: "category-icon",
                                NavGlyph { icon: category.icon, size: 22 }
                            }
                            strong { "{category.label}" }
                            span { class: "category-count", "{category.open_jobs} việc đang tuyển" }
                        }
                    }
                }
            }
        }

        FreelanceSection {}

        section { class: "home-section",
            h2 { class: "section-title", "Từ blog" }
            BlogTeaserGrid { posts: SITE.blog_posts }
        }

        section { class: "home-section testimonials",
            h2 { class: "section-title", "Người dùng nói gì" }
            div { class: "testimonial-grid",
                for testimonial in SITE.testimonials.iter() {
                    Card { key: "{testimonial.author}", class: "testimonial-card",
                        CardContent {
                            StarRating { value: testimonial.rating }
                            blockquote { "“{testimonial.quote}”" }
                            p { class: "testimonial-author", "{testimonial.author}" }
                            p { class: "testimonial-role", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
