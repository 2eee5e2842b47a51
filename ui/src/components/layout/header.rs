use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ThemeToggle;
use crate::hooks::use_sign_out;
use crate::{Route, SessionState, State};

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-8">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"Vektra Machinery"}
                        </Link<Route>>
                        <nav class="hidden sm:flex items-center space-x-6">
                            <Link<Route> to={Route::Products} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                                {"Products"}
                            </Link<Route>>
                            <Link<Route> to={Route::News} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                                {"News"}
                            </Link<Route>>
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        <ThemeToggle />
                        <SessionWidget />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// The signed-in user's email with admin/sign-out actions, or a
/// sign-in link. Nothing while the session is still being restored.
#[function_component]
fn SessionWidget() -> Html {
    let (state, _) = use_store::<State>();
    let on_sign_out = use_sign_out();

    match &state.session {
        SessionState::Unknown => html! {},
        SessionState::SignedOut => html! {
            <Link<Route> to={Route::SignIn} classes="text-sm font-medium text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                {"Sign in"}
            </Link<Route>>
        },
        SessionState::SignedIn(identity) => html! {
            <div class="flex items-center space-x-4">
                <span class="hidden md:inline text-sm text-neutral-500 dark:text-neutral-400">
                    {&identity.email}
                </span>
                <Link<Route> to={Route::Admin} classes="text-sm font-medium text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                    {"Admin"}
                </Link<Route>>
                <button
                    onclick={on_sign_out}
                    class="text-sm font-medium text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white"
                >
                    {"Sign out"}
                </button>
            </div>
        },
    }
}
