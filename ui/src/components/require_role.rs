use tables::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_role;
use crate::{Route, SessionState, State};

/// Component that only renders its children when the signed-in user's
/// role meets `min`.
///
/// Shows a spinner while the session or role is still unresolved, a
/// sign-in prompt when signed out, and an access-denied card when the
/// role check fails. Child components and their hooks therefore only
/// run for users who are allowed to see them.
#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    pub min: Role,
    pub children: Children,
}

#[function_component]
pub fn RequireRole(props: &RequireRoleProps) -> Html {
    let (state, _) = use_store::<State>();
    let role = use_role();

    match &state.session {
        SessionState::Unknown => spinner(),
        SessionState::SignedOut => html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="max-w-md w-full text-center space-y-4">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Sign in required"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"This area is only available to signed-in staff."}
                    </p>
                    <Link<Route>
                        to={Route::SignIn}
                        classes="inline-block px-4 py-2 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200"
                    >
                        {"Sign in"}
                    </Link<Route>>
                </div>
            </div>
        },
        SessionState::SignedIn(_) => {
            if role.is_loading {
                spinner()
            } else if role.has_role(props.min) {
                html! {
                    <>
                        {for props.children.iter()}
                    </>
                }
            } else {
                html! {
                    <div class="flex items-center justify-center min-h-[60vh]">
                        <div class="max-w-md w-full text-center space-y-4">
                            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                                {"Access denied"}
                            </h1>
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!(
                                    "Your account does not have the {} access this page needs.",
                                    props.min
                                )}
                            </p>
                        </div>
                    </div>
                }
            }
        }
    }
}

fn spinner() -> Html {
    html! {
        <div class="text-center py-8">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
        </div>
    }
}
