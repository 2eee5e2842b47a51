use tables::{Role, changes::RoleUpsert, rows::UserRole};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::use_toast;
use crate::{State, get_table_client};

/// Lifecycle of the one-time first-admin bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupPhase {
    Checking,
    NoAdmin,
    AdminExists,
    CheckFailed(String),
    Promoting,
}

/// Phase after the admin-existence probe completes. A failed probe is
/// surfaced instead of checking forever, and never shows the
/// promotion prompt.
pub fn phase_after_check(outcome: Result<bool, String>) -> SetupPhase {
    match outcome {
        Ok(true) => SetupPhase::AdminExists,
        Ok(false) => SetupPhase::NoAdmin,
        Err(message) => SetupPhase::CheckFailed(message),
    }
}

/// Phase after a promotion attempt completes. Failure returns to the
/// prompt so the user can retry.
pub fn phase_after_promotion(outcome: Result<(), String>) -> SetupPhase {
    match outcome {
        Ok(()) => SetupPhase::AdminExists,
        Err(_) => SetupPhase::NoAdmin,
    }
}

/// One-time bootstrap card for the very first administrator.
///
/// Probes for any admin role row on mount. Once one exists (including
/// right after a successful self-promotion) the component renders
/// nothing, so the admin dashboard carries no trace of it afterwards.
#[function_component]
pub fn AdminUserSetup() -> Html {
    let (state, _) = use_store::<State>();
    let phase = use_state(|| SetupPhase::Checking);
    let toast = use_toast();

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                let client = get_table_client();
                let outcome = client
                    .from("user_roles")
                    .eq("role", Role::Admin)
                    .limit(1)
                    .fetch::<UserRole>()
                    .await
                    .map(|rows| !rows.is_empty())
                    .map_err(|e| e.to_string());
                if let Err(message) = &outcome {
                    tracing::error!("admin existence check failed: {message}");
                }
                phase.set(phase_after_check(outcome));
            });
        });
    }

    let identity = state.identity().cloned();
    let can_promote = identity.is_some();

    let on_promote = {
        let phase = phase.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            // Without a signed-in identity there is nobody to promote.
            let Some(identity) = identity.clone() else {
                return;
            };
            let phase = phase.clone();
            let toast = toast.clone();

            phase.set(SetupPhase::Promoting);
            yew::platform::spawn_local(async move {
                let client = get_table_client();
                let upsert = RoleUpsert {
                    user_id: identity.user_id,
                    role: Role::Admin,
                };
                let outcome = client
                    .upsert("user_roles", "user_id", &upsert)
                    .await
                    .map_err(|e| e.to_string());
                match &outcome {
                    Ok(()) => toast.success(
                        "Administrator created",
                        "Your account now has admin access.",
                    ),
                    Err(message) => {
                        toast.error("Promotion failed", message.clone())
                    }
                }
                phase.set(phase_after_promotion(outcome));
            });
        })
    };

    match &*phase {
        SetupPhase::Checking | SetupPhase::AdminExists => html! {},
        SetupPhase::CheckFailed(message) => html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-6">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Could not verify administrator setup: {}", message)}
                </p>
            </div>
        },
        SetupPhase::NoAdmin | SetupPhase::Promoting => {
            let promoting = *phase == SetupPhase::Promoting;
            html! {
                <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700 mb-6">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                        {"Administrator setup"}
                    </h2>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-4">
                        {"No administrator account exists yet. Promote your \
                          account to manage products, news and user roles."}
                    </p>
                    if !can_promote {
                        <p class="text-sm text-neutral-500 dark:text-neutral-500 mb-4">
                            {"Sign in first to become the administrator."}
                        </p>
                    }
                    <button
                        onclick={on_promote}
                        disabled={promoting || !can_promote}
                        class="px-4 py-2 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {if promoting { "Promoting..." } else { "Become administrator" }}
                    </button>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_admin_ends_the_flow() {
        assert_eq!(phase_after_check(Ok(true)), SetupPhase::AdminExists);
    }

    #[test]
    fn absent_admin_offers_promotion() {
        assert_eq!(phase_after_check(Ok(false)), SetupPhase::NoAdmin);
    }

    #[test]
    fn failed_check_is_surfaced_not_stuck() {
        let phase = phase_after_check(Err("service unavailable".to_string()));
        assert_eq!(
            phase,
            SetupPhase::CheckFailed("service unavailable".to_string())
        );
        // The prompt is only shown for NoAdmin/Promoting, so a failed
        // check can never offer promotion.
        assert_ne!(phase, SetupPhase::NoAdmin);
    }

    #[test]
    fn promotion_outcomes() {
        assert_eq!(phase_after_promotion(Ok(())), SetupPhase::AdminExists);
        assert_eq!(
            phase_after_promotion(Err("denied".to_string())),
            SetupPhase::NoAdmin
        );
    }
}
