use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::{State, theme};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let (state, _) = use_store::<State>();

    // Keep the document-level dark class in sync with the store.
    use_effect_with(state.is_dark_mode(), |dark| {
        theme::apply_dark_class(*dark);
    });

    html! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <main class="flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
            <Footer />
        </div>
    }
}
