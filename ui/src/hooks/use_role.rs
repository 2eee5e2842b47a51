use tables::{Role, rows::UserRole};
use yew::prelude::*;
use yewdux::prelude::*;

use super::RequestSeq;
use crate::{State, get_table_client};

/// Resolved capability of the current session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleHandle {
    /// `None` while signed out, while unresolved, or after a failed
    /// lookup. A signed-in user with no stored override resolves to
    /// `Some(Role::User)`.
    pub role: Option<Role>,
    pub is_loading: bool,
}

impl RoleHandle {
    /// True only for a resolved role at least as privileged as
    /// `required`. Unresolved or failed lookups never grant anything.
    pub fn has_role(&self, required: Role) -> bool {
        self.role.is_some_and(|role| role.meets(required))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_editor(&self) -> bool {
        self.has_role(Role::Editor)
    }
}

/// Role resolved from a `user_roles` lookup outcome.
///
/// A missing row is an ordinary `user`. A failed lookup resolves to no
/// role at all and is logged rather than surfaced; the affected user
/// sees missing affordances, not an error page.
pub fn resolved_role<E: std::fmt::Display>(
    outcome: Result<Option<UserRole>, E>,
) -> Option<Role> {
    match outcome {
        Ok(Some(row)) => Some(row.role),
        // No override row stored for this user.
        Ok(None) => Some(Role::User),
        Err(err) => {
            tracing::error!("role lookup failed: {err}");
            None
        }
    }
}

/// Hook to resolve the signed-in user's role, re-resolving whenever the
/// session identity changes.
#[hook]
pub fn use_role() -> RoleHandle {
    let (state, _) = use_store::<State>();
    let role = use_state(|| None::<Role>);
    let is_loading = use_state(|| false);
    let seq = use_memo((), |_| RequestSeq::default());

    let user_id = state.identity().map(|identity| identity.user_id);

    {
        let role = role.clone();
        let is_loading = is_loading.clone();
        let seq = seq.clone();

        use_effect_with(user_id, move |user_id| {
            let Some(user_id) = *user_id else {
                // Invalidate any lookup still in flight for a previous
                // identity.
                seq.issue();
                role.set(None);
                is_loading.set(false);
                return;
            };

            let role = role.clone();
            let is_loading = is_loading.clone();
            let seq = seq.clone();

            yew::platform::spawn_local(async move {
                let token = seq.issue();
                is_loading.set(true);

                let client = get_table_client();
                let outcome = client
                    .from("user_roles")
                    .eq("user_id", user_id)
                    .fetch_maybe::<UserRole>()
                    .await;

                if !seq.is_current(token) {
                    return;
                }
                role.set(resolved_role(outcome));
                is_loading.set(false);
            });
        });
    }

    RoleHandle {
        role: *role,
        is_loading: *is_loading,
    }
}

#[cfg(test)]
mod tests {
    use tables::UserId;
    use uuid::Uuid;

    use super::*;

    fn override_row(role: Role) -> UserRole {
        UserRole {
            user_id: UserId(Uuid::new_v4()),
            role,
            updated_at: "2024-06-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn stored_override_wins() {
        assert_eq!(
            resolved_role::<String>(Ok(Some(override_row(Role::Editor)))),
            Some(Role::Editor)
        );
    }

    #[test]
    fn missing_row_is_an_ordinary_user() {
        assert_eq!(resolved_role::<String>(Ok(None)), Some(Role::User));
    }

    #[test]
    fn failed_lookup_resolves_to_no_role() {
        assert_eq!(resolved_role(Err("service unavailable")), None);
    }

    #[test]
    fn unresolved_role_grants_nothing() {
        let handle = RoleHandle {
            role: None,
            is_loading: true,
        };
        assert!(!handle.has_role(Role::User));
        assert!(!handle.is_editor());
        assert!(!handle.is_admin());
    }

    #[test]
    fn editor_check_accepts_editor_and_admin() {
        for (role, expected) in [
            (Role::User, false),
            (Role::Editor, true),
            (Role::Admin, true),
        ] {
            let handle = RoleHandle {
                role: Some(role),
                is_loading: false,
            };
            assert_eq!(handle.is_editor(), expected, "{role}");
        }
    }

    #[test]
    fn admin_check_rejects_everyone_below_admin() {
        let admin = RoleHandle {
            role: Some(Role::Admin),
            is_loading: false,
        };
        let editor = RoleHandle {
            role: Some(Role::Editor),
            is_loading: false,
        };
        assert!(admin.is_admin());
        assert!(!editor.is_admin());
    }
}
