use dioxus::prelude::*;

use super::freelance::FreelanceSection;

#[component]
pub fn Jobs() -> Element {
    rsx! {
        FreelanceSection { heading: "Tất cả việc làm theo giờ", full_width: true }
    }
}
