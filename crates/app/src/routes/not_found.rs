use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let attempted = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing registered here" }
                p { class: "not-found-message",
                    "No page exists at "
                    code { "{attempted}" }
                    "."
                }
                Link {
                    to: Route::Dashboard {},
                    class: "not-found-link",
                    "Return to the dashboard"
                }
            }
        }
    }
}
