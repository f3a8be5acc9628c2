use crate::auth::{use_can_record_verdicts, use_can_write_records};
use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{
    CaseResponse, CaseStatus, CreateCaseRequest, UpdateCaseRequest, Verdict, CASE_STATUSES,
    VERDICTS,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, ConfirmDialog,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Form,
    FormSelect, Input, PageActions, PageHeader, PageTitle, SearchBar, Sheet, SheetClose,
    SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetTitle, Skeleton, Textarea,
};

fn status_badge(status: CaseStatus) -> BadgeVariant {
    match status {
        CaseStatus::Open => BadgeVariant::Primary,
        CaseStatus::InCourt => BadgeVariant::Secondary,
        CaseStatus::Closed => BadgeVariant::Outline,
    }
}

fn verdict_badge(verdict: Verdict) -> BadgeVariant {
    match verdict {
        Verdict::Pending => BadgeVariant::Secondary,
        Verdict::Guilty => BadgeVariant::Destructive,
        Verdict::NotGuilty => BadgeVariant::Outline,
    }
}

/// FIR case register: list with create/edit sheet and delete confirmation.
///
/// The form refuses to submit without at least one linked criminal, so the
/// empty-selection case never reaches the server from here. What the edit
/// sheet shows depends on the operator's role: police maintain the FIR side,
/// court records the outcome, admins see both.
#[component]
pub fn CaseList() -> Element {
    let mut toast = use_toast();
    let can_write = use_can_write_records();
    let can_verdict = use_can_record_verdicts();

    let mut search_input = use_signal(String::new);

    let mut show_sheet = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut form_officer = use_signal(String::new);
    let mut form_fir_date = use_signal(String::new);
    let mut form_crime_type = use_signal(String::new);
    let mut form_crime_date = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut form_status = use_signal(|| "Open".to_string());
    let mut form_verdict = use_signal(|| "Pending".to_string());
    let mut form_punishment_type = use_signal(String::new);
    let mut form_punishment_years = use_signal(String::new);
    let mut form_punishment_start = use_signal(String::new);
    let mut selected_criminals = use_signal(Vec::<i64>::new);

    let mut delete_target = use_signal(|| Option::<CaseResponse>::None);
    let mut saving = use_signal(|| false);

    let mut data = use_resource(|| async move { server::api::list_cases().await });

    // Pickers for the form: all officers and all criminal records
    let officers = use_resource(|| async move { server::api::list_officers().await.ok() });
    let criminals = use_resource(|| async move { server::api::list_criminals().await.ok() });

    let mut open_create = move || {
        editing.set(None);
        form_officer.set(String::new());
        form_fir_date.set(String::new());
        form_crime_type.set(String::new());
        form_crime_date.set(String::new());
        form_description.set(String::new());
        form_status.set("Open".to_string());
        form_verdict.set("Pending".to_string());
        form_punishment_type.set(String::new());
        form_punishment_years.set(String::new());
        form_punishment_start.set(String::new());
        selected_criminals.set(Vec::new());
        show_sheet.set(true);
    };

    let mut open_edit = move |case: &CaseResponse| {
        editing.set(Some(case.fir_id));
        form_officer.set(case.officer_id.map(|id| id.to_string()).unwrap_or_default());
        form_fir_date.set(case.fir_date.to_string());
        form_crime_type.set(case.crime_type.clone().unwrap_or_default());
        form_crime_date.set(case.crime_date.map(|d| d.to_string()).unwrap_or_default());
        form_description.set(case.crime_description.clone().unwrap_or_default());
        form_status.set(case.case_status.as_str().to_string());
        form_verdict.set(case.verdict.as_str().to_string());
        form_punishment_type.set(case.punishment_type.clone().unwrap_or_default());
        form_punishment_years.set(
            case.punishment_duration_years
                .map(|y| y.to_string())
                .unwrap_or_default(),
        );
        form_punishment_start.set(
            case.punishment_start_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        );
        selected_criminals.set(case.criminals.iter().map(|c| c.criminal_id).collect());
        show_sheet.set(true);
    };

    let handle_save = move |_: FormEvent| {
        // Ignore re-submits while a save is already on the wire
        if saving() {
            return;
        }

        let fir_date = parse_date(&form_fir_date.read());

        // FIR-side validation only applies to roles that edit the FIR side;
        // court operators submit the outcome alone.
        if can_write {
            if selected_criminals.read().is_empty() {
                toast.error("Select at least one criminal.");
                return;
            }
            if fir_date.is_none() {
                toast.error("FIR date is required.");
                return;
            }
        }

        let officer_id = form_officer.read().parse::<i64>().ok();
        let crime_type = opt_str(&form_crime_type.read());
        let crime_date = parse_date(&form_crime_date.read());
        let crime_description = opt_str(&form_description.read());
        let case_status = CaseStatus::from_str_or_default(&form_status.read());
        let verdict = Verdict::from_str_or_default(&form_verdict.read());
        let punishment_type = opt_str(&form_punishment_type.read());
        let punishment_duration_years = form_punishment_years.read().trim().parse::<i32>().ok();
        let punishment_start_date = parse_date(&form_punishment_start.read());
        let criminal_ids = selected_criminals.read().clone();

        saving.set(true);
        spawn(async move {
            let result = match *editing.read() {
                Some(id) => {
                    // Only send the fields this role is allowed to touch
                    let req = UpdateCaseRequest {
                        officer_id: if can_write { officer_id } else { None },
                        fir_date: if can_write { fir_date } else { None },
                        crime_type: if can_write { crime_type } else { None },
                        crime_date: if can_write { crime_date } else { None },
                        crime_description: if can_write { crime_description } else { None },
                        case_status: Some(case_status),
                        verdict: if can_verdict { Some(verdict) } else { None },
                        punishment_type: if can_verdict { punishment_type } else { None },
                        punishment_duration_years: if can_verdict {
                            punishment_duration_years
                        } else {
                            None
                        },
                        punishment_start_date: if can_verdict {
                            punishment_start_date
                        } else {
                            None
                        },
                        criminal_ids: if can_write { Some(criminal_ids) } else { None },
                    };
                    server::api::update_case(id, req).await.map(|_| ())
                }
                None => {
                    let Some(fir_date) = fir_date else {
                        saving.set(false);
                        return;
                    };
                    let req = CreateCaseRequest {
                        officer_id,
                        fir_date,
                        crime_type,
                        crime_date,
                        crime_description,
                        case_status: Some(case_status),
                        verdict: Some(verdict),
                        punishment_type,
                        punishment_duration_years,
                        punishment_start_date,
                        criminal_ids,
                    };
                    server::api::create_case(req).await.map(|_| ())
                }
            };

            match result {
                Ok(()) => {
                    data.restart();
                    show_sheet.set(false);
                    toast.success("Case saved");
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
            match server::api::delete_case(target.fir_id).await {
                Ok(()) => {
                    data.restart();
                    toast.success(format!("Deleted case #{}", target.fir_id));
                }
                Err(e) => {
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
                PageTitle { "FIR Cases" }
                if can_write {
                    PageActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| open_create(),
                            "New Case"
                        }
                    }
                }
            }

            SearchBar {
                Input {
                    value: search_input(),
                    placeholder: "Filter by crime type or officer...",
                    on_input: move |evt: FormEvent| search_input.set(evt.value()),
                }
            }

            match &*data.read() {
                Some(Ok(list)) => {
                    let visible: Vec<CaseResponse> = list
                        .iter()
                        .filter(|c| {
                            query.is_empty()
                                || c.crime_type
                                    .as_deref()
                                    .map(|t| t.to_lowercase().contains(&query))
                                    .unwrap_or(false)
                                || c.officer_name
                                    .as_deref()
                                    .map(|n| n.to_lowercase().contains(&query))
                                    .unwrap_or(false)
                        })
                        .cloned()
                        .collect();

                    if visible.is_empty() {
                        rsx! {
                            Card {
                                CardContent {
                                    p { "No cases on file." }
                                }
                            }
                        }
                    } else {
                        rsx! {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "FIR #" }
                                    DataTableColumn { "Date" }
                                    DataTableColumn { "Crime" }
                                    DataTableColumn { "Officer" }
                                    DataTableColumn { "Status" }
                                    DataTableColumn { "Verdict" }
                                    DataTableColumn { "Criminals" }
                                    DataTableColumn { "" }
                                }
                                DataTableBody {
                                    for case in visible {
                                        CaseRow {
                                            key: "{case.fir_id}",
                                            case: case.clone(),
                                            can_write,
                                            on_edit: move |c: CaseResponse| open_edit(&c),
                                            on_delete: move |c: CaseResponse| delete_target.set(Some(c)),
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
                            if editing.read().is_some() { "Edit Case" } else { "New Case" }
                        }
                        SheetDescription { "FIR details, court outcome, and linked criminals." }
                        SheetClose { on_close: move |_| show_sheet.set(false) }
                    }

                    Form {
                        onsubmit: handle_save,

                        if can_write {
                            FormSelect {
                                label: "Investigating officer",
                                value: form_officer(),
                                onchange: move |evt: FormEvent| form_officer.set(evt.value()),
                                option { value: "", "Unassigned" }
                                if let Some(Some(list)) = &*officers.read() {
                                    for officer in list.iter() {
                                        option {
                                            value: "{officer.officer_id}",
                                            "{officer.name}"
                                        }
                                    }
                                }
                            }
                            Input {
                                label: "FIR date",
                                input_type: "date",
                                value: form_fir_date(),
                                on_input: move |evt: FormEvent| form_fir_date.set(evt.value()),
                            }
                            Input {
                                label: "Crime type",
                                value: form_crime_type(),
                                placeholder: "e.g. Burglary",
                                on_input: move |evt: FormEvent| form_crime_type.set(evt.value()),
                            }
                            Input {
                                label: "Crime date",
                                input_type: "date",
                                value: form_crime_date(),
                                on_input: move |evt: FormEvent| form_crime_date.set(evt.value()),
                            }
                            Textarea {
                                label: "Description",
                                value: form_description(),
                                on_input: move |evt: FormEvent| form_description.set(evt.value()),
                            }
                        }
                        FormSelect {
                            label: "Case status",
                            value: form_status(),
                            onchange: move |evt: FormEvent| form_status.set(evt.value()),
                            for status in CASE_STATUSES {
                                option { value: status, "{status}" }
                            }
                        }
                        if can_verdict {
                            FormSelect {
                                label: "Verdict",
                                value: form_verdict(),
                                onchange: move |evt: FormEvent| form_verdict.set(evt.value()),
                                for verdict in VERDICTS {
                                    option { value: verdict, "{verdict}" }
                                }
                            }
                            Input {
                                label: "Punishment",
                                value: form_punishment_type(),
                                placeholder: "e.g. Imprisonment",
                                on_input: move |evt: FormEvent| form_punishment_type.set(evt.value()),
                            }
                            Input {
                                label: "Duration (years)",
                                input_type: "number",
                                value: form_punishment_years(),
                                on_input: move |evt: FormEvent| form_punishment_years.set(evt.value()),
                            }
                            Input {
                                label: "Punishment start",
                                input_type: "date",
                                value: form_punishment_start(),
                                on_input: move |evt: FormEvent| form_punishment_start.set(evt.value()),
                            }
                        }

                        if can_write {
                            fieldset { class: "criminal-picker",
                                legend { "Linked criminals" }
                                match &*criminals.read() {
                                    Some(Some(list)) if !list.is_empty() => rsx! {
                                        for criminal in list.iter() {
                                            {
                                                let id = criminal.criminal_id;
                                                let checked = selected_criminals.read().contains(&id);
                                                rsx! {
                                                    label {
                                                        class: "criminal-picker-item",
                                                        key: "{id}",
                                                        input {
                                                            r#type: "checkbox",
                                                            checked: checked,
                                                            onchange: move |_| {
                                                                let mut selected = selected_criminals.write();
                                                                if let Some(pos) = selected.iter().position(|c| *c == id) {
                                                                    selected.remove(pos);
                                                                } else {
                                                                    selected.push(id);
                                                                }
                                                            },
                                                        }
                                                        "{criminal.name}"
                                                    }
                                                }
                                            }
                                        }
                                    },
                                    Some(_) => rsx! {
                                        p { class: "criminal-picker-empty",
                                            "No criminal records yet. Add one before filing a case."
                                        }
                                    },
                                    None => rsx! { Skeleton {} },
                                }
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
                title: "Delete case?",
                description: delete_target
                    .read()
                    .as_ref()
                    .map(|c| format!("Case #{} will be removed. Linked criminal records are kept.", c.fir_id))
                    .unwrap_or_default(),
                on_confirm: handle_delete,
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

#[component]
fn CaseRow(
    case: CaseResponse,
    can_write: bool,
    on_edit: EventHandler<CaseResponse>,
    on_delete: EventHandler<CaseResponse>,
) -> Element {
    let edit_target = case.clone();
    let delete_target = case.clone();

    rsx! {
        DataTableRow {
            DataTableCell { "{case.fir_id}" }
            DataTableCell { "{case.fir_date}" }
            DataTableCell {
                {case.crime_type.clone().unwrap_or_else(|| "—".to_string())}
            }
            DataTableCell {
                {case.officer_name.clone().unwrap_or_else(|| "Unassigned".to_string())}
            }
            DataTableCell {
                Badge { variant: status_badge(case.case_status), "{case.case_status}" }
            }
            DataTableCell {
                Badge { variant: verdict_badge(case.verdict), "{case.verdict}" }
            }
            DataTableCell {
                div { class: "linked-criminals",
                    for criminal in case.criminals.iter() {
                        Badge {
                            key: "{criminal.criminal_id}",
                            variant: BadgeVariant::Outline,
                            "{criminal.name}"
                        }
                    }
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                    if can_write {
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

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn opt_str(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
