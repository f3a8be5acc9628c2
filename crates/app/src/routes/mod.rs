pub mod cases;
pub mod criminals;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod operators;
pub mod register;

use crate::auth::{use_auth, use_sidebar_visibility};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdLayoutDashboard, LdLogOut, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant};

use cases::CaseList;
use criminals::CriminalList;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use operators::OperatorList;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/criminals")]
    CriminalList {},
    #[route("/cases")]
    CaseList {},
    #[route("/operators")]
    OperatorList {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// During hydration the embedded data is available immediately.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with sidebar and top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let vis = use_sidebar_visibility();

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::CriminalList {} => "Criminal Records",
        Route::CaseList {} => "FIR Cases",
        Route::OperatorList {} => "Operators",
        Route::Login {} | Route::Register {} => "Sign In",
        _ => "",
    };

    let user = auth.current_user.read().clone();

    let handle_logout = move |_| async move {
        let _ = server::api::logout().await;
        auth.clear_auth();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "FIR Registry" }
                }

                ul { class: "sidebar-menu",
                    li {
                        Link { to: Route::Dashboard {},
                            span {
                                class: if matches!(route, Route::Dashboard {}) { "sidebar-link active" } else { "sidebar-link" },
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                        }
                    }
                    if vis.criminals {
                        li {
                            Link { to: Route::CriminalList {},
                                span {
                                    class: if matches!(route, Route::CriminalList {}) { "sidebar-link active" } else { "sidebar-link" },
                                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                    "Criminals"
                                }
                            }
                        }
                    }
                    if vis.cases {
                        li {
                            Link { to: Route::CaseList {},
                                span {
                                    class: if matches!(route, Route::CaseList {}) { "sidebar-link active" } else { "sidebar-link" },
                                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                    "Cases"
                                }
                            }
                        }
                    }
                    if vis.operators {
                        li {
                            Link { to: Route::OperatorList {},
                                span {
                                    class: if matches!(route, Route::OperatorList {}) { "sidebar-link active" } else { "sidebar-link" },
                                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                    "Operators"
                                }
                            }
                        }
                    }
                }

                div { class: "sidebar-footer",
                    if let Some(user) = user {
                        div { class: "sidebar-user",
                            span { class: "sidebar-user-name", "{user.name}" }
                            Badge { variant: BadgeVariant::Outline, "{user.role}" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Log out"
                    }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    h2 { class: "topbar-title", "{page_title}" }
                }
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
