use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{CaseStatus, Role};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

/// Role-keyed landing page with registry counts.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    let criminals = use_resource(|| async move { server::api::list_criminals().await.ok() });
    let cases = use_resource(|| async move { server::api::list_cases().await.ok() });

    // Police operators have an officer profile to show
    let officer_user_id = user.as_ref().filter(|u| u.role == Role::Police).map(|u| u.user_id);
    let officer = use_resource(move || async move {
        match officer_user_id {
            Some(id) => server::api::get_officer(id).await.ok().flatten(),
            None => None,
        }
    });

    let (greeting, blurb) = match user.as_ref().map(|u| u.role) {
        Some(Role::Admin) => (
            "Admin console",
            "Manage operator accounts and oversee the criminal and case registers.",
        ),
        Some(Role::Court) => (
            "Court desk",
            "Review pending cases and record verdicts and punishments.",
        ),
        _ => (
            "Station desk",
            "File FIRs and keep the criminal register up to date.",
        ),
    };

    rsx! {
        div { class: "container",
            Card {
                CardHeader {
                    CardTitle {
                        if let Some(user) = &user {
                            "Welcome, {user.name}"
                        } else {
                            "Welcome"
                        }
                    }
                    CardDescription { "{greeting}: {blurb}" }
                }
            }

            div { class: "stat-grid",
                match &*criminals.read() {
                    Some(Some(list)) => {
                        let on_trial = list
                            .iter()
                            .filter(|c| c.status == shared_types::CriminalStatus::UnderTrial)
                            .count();
                        rsx! {
                            StatCard { label: "Criminal records", value: list.len(), to: Route::CriminalList {} }
                            StatCard { label: "Under trial", value: on_trial, to: Route::CriminalList {} }
                        }
                    }
                    Some(None) => rsx! {
                        StatCard { label: "Criminal records", value: 0, to: Route::CriminalList {} }
                    },
                    None => rsx! { Skeleton {} },
                }

                match &*cases.read() {
                    Some(Some(list)) => {
                        let open = list
                            .iter()
                            .filter(|c| c.case_status != CaseStatus::Closed)
                            .count();
                        rsx! {
                            StatCard { label: "FIR cases", value: list.len(), to: Route::CaseList {} }
                            StatCard { label: "Open cases", value: open, to: Route::CaseList {} }
                        }
                    }
                    Some(None) => rsx! {
                        StatCard { label: "FIR cases", value: 0, to: Route::CaseList {} }
                    },
                    None => rsx! { Skeleton {} },
                }
            }

            if let Some(Some(profile)) = &*officer.read() {
                Card {
                    CardHeader {
                        CardTitle { "Officer profile" }
                    }
                    CardContent {
                        dl { class: "officer-profile",
                            dt { "Rank" }
                            dd { {profile.rank_title.clone().unwrap_or_else(|| "—".to_string())} }
                            dt { "Station" }
                            dd { {profile.station.clone().unwrap_or_else(|| "—".to_string())} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize, to: Route) -> Element {
    rsx! {
        Link { to,
            Card {
                class: "stat-card",
                CardContent {
                    span { class: "stat-value", "{value}" }
                    span { class: "stat-label", "{label}" }
                }
            }
        }
    }
}
