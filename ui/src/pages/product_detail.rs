use tables::ProductId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_product, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: ProductId,
}

#[function_component]
pub fn ProductDetailPage(props: &Props) -> Html {
    use_title("Equipment - Vektra Machinery");

    let product = use_product(props.id);

    html! {
        <div class="max-w-3xl mx-auto">
            {product.render("product", |found| match found {
                Some(product) => html! {
                    <div class="space-y-6">
                        <div>
                            <span class="inline-block px-2 py-1 text-xs font-medium rounded-full bg-neutral-100 dark:bg-neutral-700 text-neutral-600 dark:text-neutral-300 mb-2">
                                {&product.category}
                            </span>
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&product.name}
                            </h1>
                            <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                                {&product.summary}
                            </p>
                        </div>
                        <div class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line leading-relaxed">
                            {&product.description}
                        </div>
                        <div class="bg-neutral-50 dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                                {"Interested in this machine?"}
                            </h2>
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"Write to sales@vektra-machinery.example for quotes, lead
                                 times, and on-site demonstrations."}
                            </p>
                        </div>
                        <div class="pt-4 border-t border-neutral-200 dark:border-neutral-700">
                            <Link<Route>
                                to={Route::Products}
                                classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100"
                            >
                                {"Back to all equipment"}
                            </Link<Route>>
                        </div>
                    </div>
                },
                None => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400 mb-4">
                            {"This product is no longer in the catalog."}
                        </p>
                        <Link<Route>
                            to={Route::Products}
                            classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100"
                        >
                            {"Back to all equipment"}
                        </Link<Route>>
                    </div>
                },
            })}
        </div>
    }
}
