use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading-spinner",
            span { class: "loading-spinner__wheel", "⟳" }
            br {}
            span { class: "loading-spinner__truck", "🚚" }
        }
    }
}
