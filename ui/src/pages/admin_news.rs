use jiff::Timestamp;
use tables::changes::PublishChange;
use tables::rows::NewsItem;
use tables::{NewsId, Role};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{ConfirmationModal, NewsEditorModal, RequireRole};
use crate::contexts::use_toast;
use crate::get_table_client;
use crate::hooks::{use_all_news, use_title};
use crate::utils::time::format_date;

#[function_component]
pub fn AdminNewsPage() -> Html {
    use_title("News admin - Vektra Machinery");

    html! {
        <RequireRole min={Role::Editor}>
            <AdminNewsPageInner />
        </RequireRole>
    }
}

#[function_component]
fn AdminNewsPageInner() -> Html {
    let news = use_all_news();
    let toast = use_toast();

    let show_editor = use_state(|| false);
    let editing = use_state(|| None::<NewsItem>);
    let delete_target = use_state(|| None::<NewsItem>);
    let is_deleting = use_state(|| false);
    let toggling = use_state(|| None::<NewsId>);

    let on_new_story = {
        let show_editor = show_editor.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            show_editor.set(true);
        })
    };

    let on_edit = {
        let show_editor = show_editor.clone();
        let editing = editing.clone();
        Callback::from(move |item: NewsItem| {
            editing.set(Some(item));
            show_editor.set(true);
        })
    };

    let on_editor_close = {
        let show_editor = show_editor.clone();
        Callback::from(move |_| {
            show_editor.set(false);
        })
    };

    let on_editor_saved = {
        let show_editor = show_editor.clone();
        let refetch = news.refetch.clone();
        Callback::from(move |_| {
            show_editor.set(false);
            refetch.emit(());
        })
    };

    let on_toggle_published = {
        let toggling = toggling.clone();
        let toast = toast.clone();
        let refetch = news.refetch.clone();

        Callback::from(move |item: NewsItem| {
            let toggling = toggling.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            toggling.set(Some(item.id));
            spawn_local(async move {
                // Publishing stamps the first publication time; a story
                // republished later keeps its original timestamp.
                let change = if item.published {
                    PublishChange {
                        published: false,
                        published_at: None,
                    }
                } else {
                    PublishChange {
                        published: true,
                        published_at: item
                            .published_at
                            .or_else(|| Some(Timestamp::now())),
                    }
                };

                let client = get_table_client();
                match client.update("news", "id", item.id, &change).await {
                    Ok(()) => {
                        let heading = if change.published {
                            "Story published"
                        } else {
                            "Story unpublished"
                        };
                        toast.success(heading, item.title.clone());
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error("Update failed", e.to_string());
                    }
                }
                toggling.set(None);
            });
        })
    };

    let on_confirm_delete = {
        let delete_target = delete_target.clone();
        let is_deleting = is_deleting.clone();
        let toast = toast.clone();
        let refetch = news.refetch.clone();

        Callback::from(move |_| {
            let Some(item) = (*delete_target).clone() else {
                return;
            };
            let delete_target = delete_target.clone();
            let is_deleting = is_deleting.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            is_deleting.set(true);
            spawn_local(async move {
                let client = get_table_client();
                match client.delete("news", "id", item.id).await {
                    Ok(()) => {
                        toast.success("Story deleted", item.title.clone());
                        delete_target.set(None);
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error("Delete failed", e.to_string());
                    }
                }
                is_deleting.set(false);
            });
        })
    };

    let on_cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |_| {
            delete_target.set(None);
        })
    };

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"News"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Drafts and published stories, newest first"}
                    </p>
                </div>
                <button
                    onclick={on_new_story}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New story"}
                </button>
            </div>

            {news.render("news", |items| {
                if items.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No stories yet. Write the first one."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="space-y-4">
                        {items.iter().map(|item| {
                            let is_toggling = *toggling == Some(item.id);
                            let on_edit = {
                                let on_edit = on_edit.clone();
                                let item = item.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_edit.emit(item.clone());
                                })
                            };
                            let on_toggle = {
                                let on_toggle_published = on_toggle_published.clone();
                                let item = item.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_toggle_published.emit(item.clone());
                                })
                            };
                            let on_delete = {
                                let delete_target = delete_target.clone();
                                let item = item.clone();
                                Callback::from(move |_: MouseEvent| {
                                    delete_target.set(Some(item.clone()));
                                })
                            };

                            html! {
                                <div key={item.id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
                                    <div class="flex justify-between items-start gap-4">
                                        <div class="min-w-0">
                                            <div class="flex items-center gap-2 mb-1">
                                                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 truncate">
                                                    {&item.title}
                                                </h3>
                                                <PublishedBadge published={item.published} />
                                            </div>
                                            <p class="text-sm text-neutral-500 dark:text-neutral-400 mb-2">
                                                {match item.published_at {
                                                    Some(at) => format!("Published {}", format_date(at)),
                                                    None => "Not published".to_string(),
                                                }}
                                            </p>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {&item.summary}
                                            </p>
                                        </div>
                                        <div class="flex gap-2 shrink-0">
                                            <button
                                                onclick={on_edit}
                                                class="px-3 py-1.5 text-sm font-medium rounded-md bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100"
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                onclick={on_toggle}
                                                disabled={is_toggling}
                                                class="px-3 py-1.5 text-sm font-medium rounded-md bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 disabled:opacity-50"
                                            >
                                                {if is_toggling {
                                                    "Working..."
                                                } else if item.published {
                                                    "Unpublish"
                                                } else {
                                                    "Publish"
                                                }}
                                            </button>
                                            <button
                                                onclick={on_delete}
                                                class="px-3 py-1.5 text-sm font-medium rounded-md text-red-700 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20"
                                            >
                                                {"Delete"}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            })}

            if *show_editor {
                <NewsEditorModal
                    existing={(*editing).clone()}
                    on_close={on_editor_close}
                    on_saved={on_editor_saved}
                />
            }

            if let Some(item) = &*delete_target {
                <ConfirmationModal
                    title="Delete story"
                    message={format!(
                        "\"{}\" will be removed permanently, including its draft history.",
                        item.title
                    )}
                    confirm_label="Delete story"
                    on_confirm={on_confirm_delete}
                    on_close={on_cancel_delete}
                    is_busy={*is_deleting}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PublishedBadgeProps {
    published: bool,
}

#[function_component]
fn PublishedBadge(props: &PublishedBadgeProps) -> Html {
    let (classes, label) = if props.published {
        (
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
            "Published",
        )
    } else {
        (
            "bg-neutral-100 text-neutral-600 dark:bg-neutral-700 dark:text-neutral-300",
            "Draft",
        )
    };

    html! {
        <span class={format!(
            "inline-block px-2 py-0.5 text-xs font-medium rounded-full shrink-0 {}",
            classes
        )}>
            {label}
        </span>
    }
}
