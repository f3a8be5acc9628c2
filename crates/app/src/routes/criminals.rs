use crate::auth::use_can_write_records;
use dioxus::prelude::*;
use shared_types::{
    CreateCriminalRequest, CriminalResponse, CriminalStatus, Gender, UpdateCriminalRequest,
    CRIMINAL_STATUSES, GENDERS,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, ConfirmDialog,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form,
    FormSelect, Input, PageActions, PageHeader, PageTitle, SearchBar, Sheet, SheetClose,
    SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetTitle, Skeleton, Textarea,
};

fn status_badge(status: CriminalStatus) -> BadgeVariant {
    match status {
        CriminalStatus::UnderTrial => BadgeVariant::Secondary,
        CriminalStatus::Released => BadgeVariant::Outline,
        CriminalStatus::Convicted => BadgeVariant::Destructive,
    }
}

/// Criminal register: searchable list with create/edit sheet and guarded delete.
/// Court operators see the register read-only.
#[component]
pub fn CriminalList() -> Element {
    let mut toast = use_toast();
    let can_write = use_can_write_records();

    let mut search_input = use_signal(String::new);

    // Sheet state; `editing` holds the id when the form edits an existing record
    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut form_name = use_signal(String::new);
    let mut form_age = use_signal(String::new);
    let mut form_gender = use_signal(String::new);
    let mut form_address = use_signal(String::new);
    let mut form_status = use_signal(|| "Under Trial".to_string());

    let mut delete_target = use_signal(|| Option::<CriminalResponse>::None);
    let mut saving = use_signal(|| false);

    let mut data = use_resource(|| async move { server::api::list_criminals().await });

    let mut open_create = move || {
        editing.set(None);
        form_name.set(String::new());
        form_age.set(String::new());
        form_gender.set(String::new());
        form_address.set(String::new());
        form_status.set("Under Trial".to_string());
        show_sheet.set(true);
    };

    let mut open_edit = move |criminal: &CriminalResponse| {
        editing.set(Some(criminal.criminal_id));
        form_name.set(criminal.name.clone());
        form_age.set(criminal.age.map(|a| a.to_string()).unwrap_or_default());
        form_gender.set(
            criminal
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
        );
        form_address.set(criminal.address.clone().unwrap_or_default());
        form_status.set(criminal.status.as_str().to_string());
        show_sheet.set(true);
    };

    let handle_save = move |_: FormEvent| {
        // Ignore re-submits while a save is already on the wire
        if saving() {
            return;
        }
        if form_name.read().trim().is_empty() {
            toast.error("Name is required.");
            return;
        }

        let age = form_age.read().trim().parse::<i32>().ok();
        let gender = Gender::parse(&form_gender.read());
        let address = opt_str(&form_address.read());
        let status = CriminalStatus::from_str_or_default(&form_status.read());

        saving.set(true);
        spawn(async move {
            let result = match *editing.read() {
                Some(id) => {
                    let req = UpdateCriminalRequest {
                        name: Some(form_name.read().trim().to_string()),
                        age,
                        gender,
                        address,
                        status: Some(status),
                    };
                    server::api::update_criminal(id, req).await.map(|_| ())
                }
                None => {
                    let req = CreateCriminalRequest {
                        name: form_name.read().trim().to_string(),
                        age,
                        gender,
                        address,
                        status: Some(status),
                    };
                    server::api::create_criminal(req).await.map(|_| ())
                }
            };

            match result {
                Ok(()) => {
                    data.restart();
                    show_sheet.set(false);
                    toast.success("Criminal record saved");
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
            match server::api::delete_criminal(target.criminal_id).await {
                Ok(()) => {
                    data.restart();
                    toast.success(format!("Deleted record for {}", target.name));
                }
                Err(e) => {
                    // Deleting a case-linked record comes back as a conflict
                    toast.error(shared_types::AppError::friendly_message(&e.to_string()));
                }
            }
            delete_target.set(None);
        });
    };

    let query = search_input.read().trim().to_lowercase();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Criminal Records" }
                if can_write {
                    PageActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| open_create(),
                            "New Record"
                        }
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input(),
                    placeholder: "Filter by name or address...",
                    on_input: move |evt: FormEvent| search_input.set(evt.value()),
                }
            }

            match &*data.read() {
                Some(Ok(list)) => {
                    let visible: Vec<CriminalResponse> = list
                        .iter()
                        .filter(|c| {
                            query.is_empty()
                                || c.name.to_lowercase().contains(&query)
                                || c.address
                                    .as_deref()
                                    .map(|a| a.to_lowercase().contains(&query))
                                    .unwrap_or(false)
                        })
                        .cloned()
                        .collect();

                    if visible.is_empty() {
                        rsx! {
                            Card {
                                CardContent {
                                    p { "No criminal records found." }
                                }
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "ID" }
                                    DataTableColumn { "Name" }
                                    DataTableColumn { "Age" }
                                    DataTableColumn { "Gender" }
                                    DataTableColumn { "Address" }
                                    DataTableColumn { "Status" }
                                    DataTableColumn { "" }
                                }
                                DataTableBody {
                                    for criminal in visible {
                                        CriminalRow {
                                            key: "{criminal.criminal_id}",
                                            criminal: criminal.clone(),
                                            can_write,
                                            on_edit: move |c: CriminalResponse| open_edit(&c),
                                            on_delete: move |c: CriminalResponse| delete_target.set(Some(c)),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
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
                            if editing.read().is_some() { "Edit Record" } else { "New Record" }
                        }
                        SheetDescription { "Criminal record details." }
                        SheetClose { on_close: move |_| show_sheet.set(false) }
                    }

                    Form {
                        onsubmit: handle_save,

                        Input {
                            label: "Name",
                            value: form_name(),
                            on_input: move |evt: FormEvent| form_name.set(evt.value()),
                        }
                        Input {
                            label: "Age",
                            input_type: "number",
                            value: form_age(),
                            on_input: move |evt: FormEvent| form_age.set(evt.value()),
                        }
                        FormSelect {
                            label: "Gender",
                            value: form_gender(),
                            onchange: move |evt: FormEvent| form_gender.set(evt.value()),
                            option { value: "", "Not recorded" }
                            for gender in GENDERS {
                                option { value: gender, "{gender}" }
                            }
                        }
                        Textarea {
                            label: "Address",
                            value: form_address(),
                            on_input: move |evt: FormEvent| form_address.set(evt.value()),
                        }
                        FormSelect {
                            label: "Status",
                            value: form_status(),
                            onchange: move |evt: FormEvent| form_status.set(evt.value()),
                            for status in CRIMINAL_STATUSES {
                                option { value: status, "{status}" }
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
                title: "Delete criminal record?",
                description: delete_target
                    .read()
                    .as_ref()
                    .map(|c| format!("This permanently removes the record for {}.", c.name))
                    .unwrap_or_default(),
                on_confirm: handle_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

#[component]
fn CriminalRow(
    criminal: CriminalResponse,
    can_write: bool,
    on_edit: EventHandler<CriminalResponse>,
    on_delete: EventHandler<CriminalResponse>,
) -> Element {
    let edit_target = criminal.clone();
    let delete_target = criminal.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{criminal.criminal_id}" }
            DataTableCell { "{criminal.name}" }
            DataTableCell {
                {criminal.age.map(|a| a.to_string()).unwrap_or_else(|| "—".to_string())}
            }
            DataTableCell {
                {criminal.gender.map(|g| g.to_string()).unwrap_or_else(|| "—".to_string())}
            }
            DataTableCell {
                {criminal.address.clone().unwrap_or_else(|| "—".to_string())}
            }
            DataTableCell {
                Badge { variant: status_badge(criminal.status), "{criminal.status}" }
            }
            DataTableCell {
                if can_write {
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
}

fn opt_str(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
