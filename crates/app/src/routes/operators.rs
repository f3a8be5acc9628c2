use crate::auth::use_is_admin;
use dioxus::prelude::*;
use shared_types::{
    CreateOperatorRequest, Role, UpdateOperatorRequest, UserResponse, ROLES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, ConfirmDialog,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form,
    FormSelect, Input, PageActions, PageHeader, PageTitle, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetFooter, SheetHeader, SheetTitle, Skeleton,
};

/// Operator account management, admin only.
///
/// The edit form leaves the password blank; a blank password is simply not
/// sent, so the stored credential survives every other edit.
#[component]
pub fn OperatorList() -> Element {
    let mut toast = use_toast();
    let is_admin = use_is_admin();

    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut form_username = use_signal(String::new);
    let mut form_name = use_signal(String::new);
    let mut form_password = use_signal(String::new);
    let mut form_role = use_signal(|| "police".to_string());
    let mut form_rank = use_signal(String::new);
    let mut form_station = use_signal(String::new);

    let mut delete_target = use_signal(|| Option::<UserResponse>::None);
    let mut saving = use_signal(|| false);

    let mut data = use_resource(|| async move { server::api::list_operators().await });

    if !is_admin {
        return rsx! {
            div { class: "container",
                Card {
                    CardContent {
                        p { "Only admins can manage operator accounts." }
                    }
                }
            }
        };
    }

    let mut open_create = move || {
        editing.set(None);
        form_username.set(String::new());
        form_name.set(String::new());
        form_password.set(String::new());
        form_role.set("police".to_string());
        form_rank.set(String::new());
        form_station.set(String::new());
        show_sheet.set(true);
    };

    let mut open_edit = move |user: &UserResponse| {
        editing.set(Some(user.user_id));
        form_username.set(user.username.clone());
        form_name.set(user.name.clone());
        // Blank on purpose: typing a new value rotates the password,
        // leaving it blank keeps the old one
        form_password.set(String::new());
        form_role.set(user.role.as_str().to_string());
        form_rank.set(String::new());
        form_station.set(String::new());
        show_sheet.set(true);
    };

    let handle_save = move |_: FormEvent| {
        // Ignore re-submits while a save is already on the wire
        if saving() {
            return;
        }
        let role = Role::from_str_or_default(&form_role.read());
        let rank_title = opt_str(&form_rank.read());
        let station = opt_str(&form_station.read());

        saving.set(true);
        spawn(async move {
            let result = match *editing.read() {
                Some(id) => {
                    let req = UpdateOperatorRequest {
                        username: Some(form_username.read().trim().to_string()),
                        name: Some(form_name.read().trim().to_string()),
                        role: Some(role),
                        password: opt_str(&form_password.read()),
                        rank_title,
                        station,
                    };
                    server::api::update_operator(id, req).await.map(|_| ())
                }
                None => {
                    let req = CreateOperatorRequest {
                        username: form_username.read().trim().to_string(),
                        password: form_password.read().clone(),
                        name: form_name.read().trim().to_string(),
                        role,
                        rank_title,
                        station,
                    };
                    server::api::create_operator(req).await.map(|_| ())
                }
            };

            match result {
                Ok(()) => {
                    data.restart();
                    show_sheet.set(false);
                    toast.success("Operator saved");
                }
                Err(e) => {
                    toast.error(shared_types::AppError::friendly_message(&e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        let Some(target) = delete_target.read().clone() else {
            return;
        };
        spawn(async move {
            match server::api::delete_operator(target.user_id).await {
                Ok(()) => {
                    data.restart();
                    toast.success(format!("Deleted account {}", target.username));
                }
                Err(e) => {
                    toast.error(shared_types::AppError::friendly_message(&e.to_string()));
                }
            }
            delete_target.set(None);
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Operators" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| open_create(),
                        "New Operator"
                    }
                }
            }

            match &*data.read() {
                Some(Ok(list)) => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "ID" }
                            DataTableColumn { "Username" }
                            DataTableColumn { "Name" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            for user in list.iter() {
                                OperatorRow {
                                    key: "{user.user_id}",
                                    user: user.clone(),
                                    on_edit: move |u: UserResponse| open_edit(&u),
                                    on_delete: move |u: UserResponse| delete_target.set(Some(u)),
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "load-error",
                                {shared_types::AppError::friendly_message(&e.to_string())}
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }

            Sheet {
                open: show_sheet(),
                on_close: move |_| show_sheet.set(false),
                SheetContent {
                    SheetHeader {
                        SheetTitle {
                            if editing.read().is_some() { "Edit Operator" } else { "New Operator" }
                        }
                        SheetDescription {
                            if editing.read().is_some() {
                                "Leave the password blank to keep the current one."
                            } else {
                                "Create an account for a station or court operator."
                            }
                        }
                        SheetClose { on_close: move |_| show_sheet.set(false) }
                    }

                    Form {
                        onsubmit: handle_save,

                        Input {
                            label: "Username",
                            value: form_username(),
                            on_input: move |evt: FormEvent| form_username.set(evt.value()),
                        }
                        Input {
                            label: "Full name",
                            value: form_name(),
                            on_input: move |evt: FormEvent| form_name.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: form_password(),
                            placeholder: if editing.read().is_some() { "Unchanged" } else { "" },
                            on_input: move |evt: FormEvent| form_password.set(evt.value()),
                        }
                        FormSelect {
                            label: "Role",
                            value: form_role(),
                            onchange: move |evt: FormEvent| form_role.set(evt.value()),
                            for role in ROLES {
                                option { value: role, "{role}" }
                            }
                        }
                        if form_role() == "police" {
                            Input {
                                label: "Rank",
                                value: form_rank(),
                                placeholder: "e.g. Inspector",
                                on_input: move |evt: FormEvent| form_rank.set(evt.value()),
                            }
                            Input {
                                label: "Station",
                                value: form_station(),
                                on_input: move |evt: FormEvent| form_station.set(evt.value()),
                            }
                        }

                        SheetFooter {
                            Button {
                                variant: ButtonVariant::Outline,
                                button_type: "button",
                                onclick: move |_| show_sheet.set(false),
                                "Cancel"
                            }
                            Button {
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: delete_target.read().is_some(),
                title: "Delete operator account?",
                description: delete_target
                    .read()
                    .as_ref()
                    .map(|u| format!("The account {} will lose access immediately.", u.username))
                    .unwrap_or_default(),
                on_confirm: handle_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

#[component]
fn OperatorRow(
    user: UserResponse,
    on_edit: EventHandler<UserResponse>,
    on_delete: EventHandler<UserResponse>,
) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{user.user_id}" }
            DataTableCell { "{user.username}" }
            DataTableCell { "{user.name}" }
            DataTableCell {
                Badge { variant: BadgeVariant::Outline, "{user.role}" }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_delete.call(delete_target.clone()),
                        "Delete"
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
