use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, ROLES};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormSelect, Input,
};
use std::collections::HashMap;

/// Login page with username/password and a role picker.
///
/// The picked role is advisory only: the server authenticates on the
/// credentials and returns the stored role, and the session follows that —
/// picking "admin" on a police account still signs in as police.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut toast = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut selected_role = use_signal(|| "police".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |_: FormEvent| {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        spawn(async move {
            match server::api::login(username(), password()).await {
                Ok(user) => {
                    if user.role.as_str() != selected_role() {
                        toast.info(format!("Signed in as {}", user.role));
                    }
                    auth.set_user(user);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the registry" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    Form {
                        onsubmit: handle_login,

                        Input {
                            label: "Username",
                            value: username(),
                            placeholder: "username",
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("username") {
                            span { class: "field-error", "{err}" }
                        }

                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("password") {
                            span { class: "field-error", "{err}" }
                        }

                        FormSelect {
                            label: "Sign in as",
                            value: selected_role(),
                            onchange: move |evt: FormEvent| selected_role.set(evt.value()),
                            for role in ROLES {
                                option { value: role, "{role}" }
                            }
                        }

                        Button {
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                if flags.open_registration {
                    CardFooter {
                        span { class: "auth-footer-text",
                            "No account yet? "
                            Link { to: Route::Register {}, "Register" }
                        }
                    }
                }
            }
        }
    }
}
