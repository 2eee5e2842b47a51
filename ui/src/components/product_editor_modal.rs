use tables::changes::ProductChanges;
use tables::rows::Product;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_table_client;

#[derive(Properties, PartialEq)]
pub struct ProductEditorModalProps {
    /// Row being edited, or `None` when adding a new product.
    #[prop_or_default]
    pub existing: Option<Product>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

#[function_component]
pub fn ProductEditorModal(props: &ProductEditorModalProps) -> Html {
    let name = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|product| product.name.clone())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|product| product.category.clone())
            .unwrap_or_default()
    });
    let summary = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|product| product.summary.clone())
            .unwrap_or_default()
    });
    let description = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|product| product.description.clone())
            .unwrap_or_default()
    });
    let is_saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let toast = use_toast();
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

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            name.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            category.set(input.value());
        })
    };

    let on_summary_change = {
        let summary = summary.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            summary.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlTextAreaElement>();
            description.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let category = category.clone();
        let summary = summary.clone();
        let description = description.clone();
        let is_saving = is_saving.clone();
        let error_message = error_message.clone();
        let toast = toast.clone();
        let existing = props.existing.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() {
                error_message.set(Some("A name is required.".to_string()));
                return;
            }
            if category.trim().is_empty() {
                error_message.set(Some("A category is required.".to_string()));
                return;
            }

            error_message.set(None);
            is_saving.set(true);

            let changes = ProductChanges {
                name: (*name).clone(),
                category: (*category).clone(),
                summary: (*summary).clone(),
                description: (*description).clone(),
            };

            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let existing = existing.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let client = get_table_client();
                let result = match &existing {
                    Some(product) => {
                        client.update("products", "id", product.id, &changes).await
                    }
                    None => client.insert("products", &changes).await,
                };
                match result {
                    Ok(()) => {
                        let heading = if existing.is_some() {
                            "Product updated"
                        } else {
                            "Product created"
                        };
                        toast.success(heading, changes.name.clone());
                        on_saved.emit(());
                    }
                    Err(err) => {
                        toast.error("Save failed", err.to_string());
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let heading = if props.existing.is_some() {
        "Edit product"
    } else {
        "New product"
    };

    html! {
        <div
            ref={backdrop_ref}
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4"
            onclick={on_backdrop_click}
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl max-w-2xl w-full p-6 \
                        max-h-full overflow-y-auto">
                <h3 class="text-lg font-medium text-neutral-900 dark:text-neutral-100 mb-4">
                    {heading}
                </h3>

                <form onsubmit={on_submit}>
                    <div class="mb-4">
                        <label
                            for="product-name"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Name"}
                        </label>
                        <input
                            type="text"
                            id="product-name"
                            value={(*name).clone()}
                            onchange={on_name_change}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    <div class="mb-4">
                        <label
                            for="product-category"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Category"}
                        </label>
                        <input
                            type="text"
                            id="product-category"
                            value={(*category).clone()}
                            onchange={on_category_change}
                            placeholder="e.g. CNC milling"
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    <div class="mb-4">
                        <label
                            for="product-summary"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Summary"}
                        </label>
                        <input
                            type="text"
                            id="product-summary"
                            value={(*summary).clone()}
                            onchange={on_summary_change}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    <div class="mb-4">
                        <label
                            for="product-description"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Description"}
                        </label>
                        <textarea
                            id="product-description"
                            rows="8"
                            value={(*description).clone()}
                            onchange={on_description_change}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    if let Some(error) = error_message.as_ref() {
                        <p class="text-red-600 dark:text-red-400 text-sm mb-4">{error}</p>
                    }

                    <div class="flex justify-end space-x-3">
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 \
                                   bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600"
                            disabled={*is_saving}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 \
                                   dark:bg-neutral-100 dark:text-neutral-900 rounded-md \
                                   hover:bg-neutral-700 dark:hover:bg-neutral-300 \
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled={*is_saving}
                        >
                            {if *is_saving { "Saving..." } else { "Save product" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
