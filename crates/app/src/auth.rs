use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The signed-in operator's role, `Police` (the default) when signed out.
pub fn use_role() -> Role {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|u| u.role).unwrap_or_default()
}

/// Hook to check if the current user has the admin role.
pub fn use_is_admin() -> bool {
    use_role() == Role::Admin
}

/// Whether the current user may register and maintain criminal records and
/// FIR cases. Court operators are read-only on those registers.
pub fn use_can_write_records() -> bool {
    matches!(use_role(), Role::Admin | Role::Police)
}

/// Whether the current user may record verdicts and punishments.
pub fn use_can_record_verdicts() -> bool {
    matches!(use_role(), Role::Admin | Role::Court)
}

/// Which sidebar entries are visible for the current user's role.
///
/// Every role works the criminal and case registers; only admins manage
/// operator accounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub criminals: bool,
    pub cases: bool,
    pub operators: bool,
}

pub fn use_sidebar_visibility() -> SidebarVisibility {
    match use_role() {
        Role::Admin => SidebarVisibility {
            criminals: true,
            cases: true,
            operators: true,
        },
        Role::Police | Role::Court => SidebarVisibility {
            criminals: true,
            cases: true,
            operators: false,
        },
    }
}
