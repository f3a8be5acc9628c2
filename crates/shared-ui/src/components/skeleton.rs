use dioxus::prelude::*;

/// Loading placeholder with animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        div { class: "skeleton", ..attributes }
    }
}
