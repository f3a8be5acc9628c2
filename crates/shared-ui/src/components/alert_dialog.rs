use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Modal confirmation dialog for destructive actions.
///
/// Renders nothing while `open` is false. `on_confirm` fires on the
/// destructive action button, `on_cancel` on the cancel button or backdrop.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    #[props(default)] description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert-dialog-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "alert-dialog",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "alert-dialog-title", "{title}" }
                if !description.is_empty() {
                    p { class: "alert-dialog-description", "{description}" }
                }
                div { class: "alert-dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        button_type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        button_type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
