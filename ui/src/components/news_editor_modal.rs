use jiff::Timestamp;
use tables::changes::NewsChanges;
use tables::rows::NewsItem;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::contexts::use_toast;
use crate::get_table_client;

#[derive(Properties, PartialEq)]
pub struct NewsEditorModalProps {
    /// Row being edited, or `None` when drafting a new story.
    #[prop_or_default]
    pub existing: Option<NewsItem>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

#[function_component]
pub fn NewsEditorModal(props: &NewsEditorModalProps) -> Html {
    let title = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|item| item.title.clone())
            .unwrap_or_default()
    });
    let summary = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|item| item.summary.clone())
            .unwrap_or_default()
    });
    let body = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|item| item.body.clone())
            .unwrap_or_default()
    });
    let published = use_state(|| {
        props
            .existing
            .as_ref()
            .is_some_and(|item| item.published)
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

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            title.set(input.value());
        })
    };

    let on_summary_change = {
        let summary = summary.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            summary.set(input.value());
        })
    };

    let on_body_change = {
        let body = body.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlTextAreaElement>();
            body.set(input.value());
        })
    };

    let on_published_change = {
        let published = published.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            published.set(input.checked());
        })
    };

    let on_submit = {
        let title = title.clone();
        let summary = summary.clone();
        let body = body.clone();
        let published = published.clone();
        let is_saving = is_saving.clone();
        let error_message = error_message.clone();
        let toast = toast.clone();
        let existing = props.existing.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if title.trim().is_empty() {
                error_message.set(Some("A title is required.".to_string()));
                return;
            }
            if summary.trim().is_empty() {
                error_message.set(Some("A summary is required.".to_string()));
                return;
            }

            error_message.set(None);
            is_saving.set(true);

            // A story publishing for the first time is stamped now; an already
            // published one keeps its original timestamp. Drafts carry none.
            let published_at = if *published {
                existing
                    .as_ref()
                    .and_then(|item| item.published_at)
                    .or_else(|| Some(Timestamp::now()))
            } else {
                None
            };
            let changes = NewsChanges {
                title: (*title).clone(),
                summary: (*summary).clone(),
                body: (*body).clone(),
                published: *published,
                published_at,
            };

            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let existing = existing.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let client = get_table_client();
                let result = match &existing {
                    Some(item) => client.update("news", "id", item.id, &changes).await,
                    None => client.insert("news", &changes).await,
                };
                match result {
                    Ok(()) => {
                        let heading = if existing.is_some() {
                            "Story updated"
                        } else {
                            "Story created"
                        };
                        toast.success(heading, changes.title.clone());
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
        "Edit story"
    } else {
        "New story"
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
                            for="story-title"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Title"}
                        </label>
                        <input
                            type="text"
                            id="story-title"
                            value={(*title).clone()}
                            onchange={on_title_change}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    <div class="mb-4">
                        <label
                            for="story-summary"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Summary"}
                        </label>
                        <input
                            type="text"
                            id="story-summary"
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
                            for="story-body"
                            class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2"
                        >
                            {"Body"}
                        </label>
                        <textarea
                            id="story-body"
                            rows="10"
                            value={(*body).clone()}
                            onchange={on_body_change}
                            class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
                                   rounded-md shadow-sm focus:outline-none focus:ring-neutral-500 \
                                   focus:border-neutral-500 dark:bg-neutral-700 dark:text-white"
                            disabled={*is_saving}
                        />
                    </div>

                    <div class="mb-4">
                        <label class="inline-flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                            <input
                                type="checkbox"
                                checked={*published}
                                onchange={on_published_change}
                                disabled={*is_saving}
                            />
                            {"Published"}
                        </label>
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
                            {if *is_saving { "Saving..." } else { "Save story" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
