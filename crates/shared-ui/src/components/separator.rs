use dioxus::prelude::*;

/// Horizontal rule between content sections.
#[component]
pub fn Separator() -> Element {
    rsx! {
        div { class: "separator", role: "separator" }
    }
}
