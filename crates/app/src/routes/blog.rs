use dioxus::prelude::*;
use shared_types::{BlogPost, SITE};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Blog index: every teaser in the static table.
#[component]
pub fn Blog() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        section { class: "home-section",
            h1 { class: "section-title", "Blog InnoSphere" }
            p { class: "section-lead", "Kinh nghiệm tuyển dụng và làm việc theo giờ." }
            BlogTeaserGrid { posts: SITE.blog_posts }
        }
    }
}

#[component]
pub fn BlogTeaserGrid(posts: &'static [BlogPost]) -> Element {
    rsx! {
        div { class: "blog-grid",
            for post in posts.iter() {
                Card { key: "{post.slug}", class: "blog-card",
                    CardHeader {
                        CardTitle { "{post.title}" }
                        CardDescription { "{post.published_on} · {post.read_minutes} phút đọc" }
                    }
                    CardContent {
                        p { "{post.excerpt}" }
                    }
                    CardFooter {
                        span { class: "blog-more", "Đọc tiếp →" }
                    }
                }
            }
        }
    }
}
