use dioxus::prelude::*;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastItem {
    id: u64,
    message: String,
    toast_type: ToastType,
}

/// Handle for pushing toast notifications, provided by [`ToastProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastType::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastType::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastType::Info);
    }

    fn push(&mut self, message: String, toast_type: ToastType) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.items.write().push(ToastItem {
            id,
            message,
            toast_type,
        });
    }

    fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|t| t.id != id);
    }
}

/// Access the toast handle. Panics outside a [`ToastProvider`] subtree.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the stacked notification viewport.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<ToastItem>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div { class: "toast-viewport",
            for item in items.read().iter().cloned() {
                ToastCard { key: "{item.id}", item, toasts }
            }
        }
    }
}

#[component]
fn ToastCard(item: ToastItem, toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let id = item.id;
    rsx! {
        div { class: "toast", "data-type": item.toast_type.class(),
            span { class: "toast-message", "{item.message}" }
            button {
                class: "toast-dismiss",
                r#type: "button",
                "aria-label": "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                "\u{2715}"
            }
        }
    }
}
