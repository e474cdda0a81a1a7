use api::ApiClient;
use dioxus::prelude::*;

mod config;
mod icons;
mod routes;
mod session;

use routes::Route;
use session::{SessionSeed, SessionState};

const BASE_CSS: Asset = asset!("/assets/base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::from_config(config::client_config()));
    use_context_provider(SessionState::new);

    rsx! {
        document::Title { "InnoSphere" }
        document::Link { rel: "stylesheet", href: BASE_CSS }
        SessionSeed {}
        Router::<Route> {}
    }
}
