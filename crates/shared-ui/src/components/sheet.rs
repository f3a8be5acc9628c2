use dioxus::prelude::*;

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }
}

/// Sliding panel overlay. Clicking the backdrop closes it; clicks inside the
/// panel do not propagate out.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "sheet-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Content area inside a Sheet.
#[component]
pub fn SheetContent(children: Element) -> Element {
    rsx! {
        div { class: "sheet-content", {children} }
    }
}

/// Header section of a Sheet.
#[component]
pub fn SheetHeader(children: Element) -> Element {
    rsx! {
        div { class: "sheet-header", {children} }
    }
}

/// Footer section of a Sheet.
#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}

/// Title element within a SheetHeader.
#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

/// Description text within a SheetHeader.
#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

/// Close button for a Sheet.
#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
