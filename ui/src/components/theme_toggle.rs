use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, ThemeMode, theme};

/// Button that flips between explicit light and dark. The choice is
/// persisted; the document class itself is applied by the layout
/// effect watching the store.
#[function_component]
pub fn ThemeToggle() -> Html {
    let (state, dispatch) = use_store::<State>();
    let dark = state.is_dark_mode();

    let toggle_theme = use_callback(
        (dark, dispatch),
        move |_: MouseEvent, (dark, dispatch)| {
            let new_mode = if *dark {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            theme::store_theme_mode(&new_mode);
            dispatch.reduce_mut(|state| state.theme_mode = new_mode);
        },
    );

    let (icon, title) = if dark {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-neutral-200 dark:hover:bg-neutral-700 transition-colors"
            onclick={toggle_theme}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}
