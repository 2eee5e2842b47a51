use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub title: String,
    pub message: String,
    /// Label for the destructive button, e.g. "Delete story".
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_busy: bool,
}

/// Confirm/cancel dialog used before destructive admin actions.
#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop) = backdrop_ref.cast::<web_sys::Element>() {
                if let Some(target) = e.target() {
                    if let Ok(element) = target.dyn_into::<web_sys::Element>() {
                        if element == backdrop {
                            on_close.emit(());
                        }
                    }
                }
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4"
            onclick={on_backdrop_click}
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl max-w-md w-full p-6">
                <h3 class="text-lg font-medium text-neutral-900 dark:text-neutral-100 mb-2">
                    {&props.title}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-6">
                    {&props.message}
                </p>
                <div class="flex justify-end space-x-3">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 \
                               bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 \
                               rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600"
                        disabled={props.is_busy}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        onclick={on_confirm}
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-md \
                               hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={props.is_busy}
                    >
                        {if props.is_busy { "Working..." } else { props.confirm_label.as_str() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
