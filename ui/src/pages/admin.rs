use tables::Identity;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::AdminUserSetup;
use crate::hooks::{RoleHandle, use_role, use_title};
use crate::{Route, SessionState, State};

/// Admin landing page.
///
/// Deliberately not wrapped in `RequireRole`: the first-admin bootstrap
/// has to be reachable while nobody holds a role yet. Signed-in users
/// without a role see the setup card (when applicable) and an otherwise
/// empty dashboard.
#[function_component]
pub fn AdminPage() -> Html {
    use_title("Admin - Vektra Machinery");

    let (state, _) = use_store::<State>();
    let role = use_role();

    match &state.session {
        SessionState::Unknown => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        },
        SessionState::SignedOut => html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="max-w-md w-full text-center space-y-4">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Sign in required"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"The admin panel is only available to signed-in staff."}
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
        SessionState::SignedIn(identity) => {
            html! { <Dashboard identity={identity.clone()} role={role} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    identity: Identity,
    role: RoleHandle,
}

#[function_component]
fn Dashboard(props: &DashboardProps) -> Html {
    let role = props.role;

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Admin panel"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {format!("Signed in as {}", props.identity.email)}
                </p>
            </div>

            <AdminUserSetup />

            if role.is_loading {
                <div class="text-center py-8">
                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
                </div>
            } else if role.is_editor() {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <DashboardCard
                        title="News"
                        description="Write, publish, and retire company stories"
                        to={Route::AdminNews}
                    />
                    <DashboardCard
                        title="Products"
                        description="Maintain the equipment catalog"
                        to={Route::AdminProducts}
                    />
                    if role.is_admin() {
                        <DashboardCard
                            title="Users"
                            description="Grant and revoke editor and admin roles"
                            to={Route::AdminUsers}
                        />
                    }
                </div>
            } else {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Your account has no content permissions yet. Ask an
                         administrator to grant you a role."}
                    </p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardCardProps {
    title: AttrValue,
    description: AttrValue,
    to: Route,
}

#[function_component]
fn DashboardCard(props: &DashboardCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="space-y-4">
                <div>
                    <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h3>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                        {&props.description}
                    </p>
                </div>
                <div class="pt-2">
                    <Link<Route>
                        to={props.to.clone()}
                        classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                    >
                        {"Open"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
