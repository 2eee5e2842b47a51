use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_products, use_title};

#[function_component]
pub fn ProductsPage() -> Html {
    use_title("Equipment - Vektra Machinery");

    let products = use_products();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Equipment"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Machining centers, lathes, and automation built by Vektra"}
                </p>
            </div>

            {products.render("products", |items| {
                if items.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"The catalog is empty right now. Check back soon."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {items.iter().map(|product| {
                                html! {
                                    <div key={product.id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                                        <div class="space-y-4">
                                            <div>
                                                <span class="inline-block px-2 py-1 text-xs font-medium rounded-full bg-neutral-100 dark:bg-neutral-700 text-neutral-600 dark:text-neutral-300 mb-2">
                                                    {&product.category}
                                                </span>
                                                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                                                    {&product.name}
                                                </h3>
                                            </div>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {&product.summary}
                                            </p>
                                            <div class="pt-2">
                                                <Link<Route>
                                                    to={Route::ProductDetail { id: product.id }}
                                                    classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                                                >
                                                    {"View details"}
                                                </Link<Route>>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                }
            })}
        </div>
    }
}
