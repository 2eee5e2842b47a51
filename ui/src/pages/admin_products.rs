use tables::Role;
use tables::rows::Product;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{ConfirmationModal, ProductEditorModal, RequireRole};
use crate::contexts::use_toast;
use crate::get_table_client;
use crate::hooks::{use_products, use_title};

#[function_component]
pub fn AdminProductsPage() -> Html {
    use_title("Product admin - Vektra Machinery");

    html! {
        <RequireRole min={Role::Editor}>
            <AdminProductsPageInner />
        </RequireRole>
    }
}

#[function_component]
fn AdminProductsPageInner() -> Html {
    let products = use_products();
    let toast = use_toast();

    let show_editor = use_state(|| false);
    let editing = use_state(|| None::<Product>);
    let delete_target = use_state(|| None::<Product>);
    let is_deleting = use_state(|| false);

    let on_new_product = {
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
        Callback::from(move |product: Product| {
            editing.set(Some(product));
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
        let refetch = products.refetch.clone();
        Callback::from(move |_| {
            show_editor.set(false);
            refetch.emit(());
        })
    };

    let on_confirm_delete = {
        let delete_target = delete_target.clone();
        let is_deleting = is_deleting.clone();
        let toast = toast.clone();
        let refetch = products.refetch.clone();

        Callback::from(move |_| {
            let Some(product) = (*delete_target).clone() else {
                return;
            };
            let delete_target = delete_target.clone();
            let is_deleting = is_deleting.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            is_deleting.set(true);
            spawn_local(async move {
                let client = get_table_client();
                match client.delete("products", "id", product.id).await {
                    Ok(()) => {
                        toast.success("Product deleted", product.name.clone());
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
                        {"Products"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Everything in the public equipment catalog"}
                    </p>
                </div>
                <button
                    onclick={on_new_product}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"New product"}
                </button>
            </div>

            {products.render("products", |items| {
                if items.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"The catalog is empty. Add the first machine."}
                            </p>
                        </div>
                    };
                }
                html! {
                    <div class="space-y-4">
                        {items.iter().map(|product| {
                            let on_edit = {
                                let on_edit = on_edit.clone();
                                let product = product.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_edit.emit(product.clone());
                                })
                            };
                            let on_delete = {
                                let delete_target = delete_target.clone();
                                let product = product.clone();
                                Callback::from(move |_: MouseEvent| {
                                    delete_target.set(Some(product.clone()));
                                })
                            };

                            html! {
                                <div key={product.id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
                                    <div class="flex justify-between items-start gap-4">
                                        <div class="min-w-0">
                                            <div class="flex items-center gap-2 mb-1">
                                                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 truncate">
                                                    {&product.name}
                                                </h3>
                                                <span class="inline-block px-2 py-0.5 text-xs font-medium rounded-full shrink-0 bg-neutral-100 dark:bg-neutral-700 text-neutral-600 dark:text-neutral-300">
                                                    {&product.category}
                                                </span>
                                            </div>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {&product.summary}
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
                <ProductEditorModal
                    existing={(*editing).clone()}
                    on_close={on_editor_close}
                    on_saved={on_editor_saved}
                />
            }

            if let Some(product) = &*delete_target {
                <ConfirmationModal
                    title="Delete product"
                    message={format!(
                        "\"{}\" will be removed from the public catalog permanently.",
                        product.name
                    )}
                    confirm_label="Delete product"
                    on_confirm={on_confirm_delete}
                    on_close={on_cancel_delete}
                    is_busy={*is_deleting}
                />
            }
        </div>
    }
}
