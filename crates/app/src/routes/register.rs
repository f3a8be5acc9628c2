use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, Role, ROLES};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormSelect, Input,
};
use std::collections::HashMap;

/// Self-service signup page.
///
/// Only shown while the `open_registration` flag is on; otherwise operators
/// are created by an admin. Picking the police role reveals the rank and
/// station fields that seed the officer profile.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut selected_role = use_signal(|| "police".to_string());
    let mut rank_title = use_signal(String::new);
    let mut station = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_register = move |_: FormEvent| {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        spawn(async move {
            let role = Role::from_str_or_default(&selected_role());
            let (rank, stn) = if role == Role::Police {
                (opt_str(&rank_title()), opt_str(&station()))
            } else {
                (None, None)
            };

            match server::api::register(username(), password(), name(), role, rank, stn).await {
                Ok(user) => {
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
                    CardTitle { "Create Account" }
                    CardDescription { "Register an operator account for the registry" }
                }

                CardContent {
                    if !flags.open_registration {
                        div { class: "auth-error",
                            "Self-service registration is disabled. Ask an admin to create your account."
                        }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        Form {
                            onsubmit: handle_register,

                            Input {
                                label: "Username",
                                value: username(),
                                on_input: move |evt: FormEvent| username.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("username") {
                                span { class: "field-error", "{err}" }
                            }

                            Input {
                                label: "Full name",
                                value: name(),
                                on_input: move |evt: FormEvent| name.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("name") {
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
                                label: "Role",
                                value: selected_role(),
                                onchange: move |evt: FormEvent| selected_role.set(evt.value()),
                                for role in ROLES {
                                    option { value: role, "{role}" }
                                }
                            }

                            if selected_role() == "police" {
                                Input {
                                    label: "Rank",
                                    value: rank_title(),
                                    placeholder: "e.g. Inspector",
                                    on_input: move |evt: FormEvent| rank_title.set(evt.value()),
                                }
                                Input {
                                    label: "Station",
                                    value: station(),
                                    on_input: move |evt: FormEvent| station.set(evt.value()),
                                }
                            }

                            Button {
                                disabled: loading(),
                                if loading() { "Creating..." } else { "Create Account" }
                            }
                        }
                    }
                }

                CardFooter {
                    span { class: "auth-footer-text",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

fn opt_str(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
