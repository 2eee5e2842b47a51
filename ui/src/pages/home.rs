use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::NewsCard;
use crate::hooks::{use_news, use_title};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Vektra Machinery");

    let news = use_news();

    html! {
        <div class="space-y-16">
            <div class="text-center space-y-8">
                <div>
                    <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100 mb-4">
                        {"Vektra Machinery"}
                    </h1>
                    <p class="text-xl text-neutral-600 dark:text-neutral-400 mb-8">
                        {"Industrial machining equipment built to run for decades"}
                    </p>
                </div>

                <div class="max-w-2xl mx-auto">
                    <p class="text-lg text-neutral-600 dark:text-neutral-400">
                        {"Vektra designs and manufactures CNC machining centers, turning
                         lathes, and automation cells for workshops that cannot afford
                         downtime. Every machine ships with full service coverage and
                         locally stocked spare parts."}
                    </p>
                </div>

                <div class="flex justify-center gap-4">
                    <Link<Route>
                        to={Route::Products}
                        classes="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-6 py-3 rounded-md text-sm font-medium transition-colors"
                    >
                        {"Browse equipment"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::News}
                        classes="bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-6 py-3 rounded-md text-sm font-medium transition-colors"
                    >
                        {"Company news"}
                    </Link<Route>>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mt-12">
                    <div class="text-center">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                            {"Precision Machining"}
                        </h3>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Five-axis machining centers with micron-level repeatability for demanding tolerances"}
                        </p>
                    </div>

                    <div class="text-center">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                            {"Automation Cells"}
                        </h3>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Robotic loading and pallet systems that keep spindles cutting through the night shift"}
                        </p>
                    </div>

                    <div class="text-center">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                            {"Lifetime Service"}
                        </h3>
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Field engineers, retrofits, and spare parts for every machine we have ever shipped"}
                        </p>
                    </div>
                </div>
            </div>

            <div class="space-y-6">
                <div class="flex justify-between items-center">
                    <h2 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Latest news"}
                    </h2>
                    <Link<Route>
                        to={Route::News}
                        classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100"
                    >
                        {"All news"}
                    </Link<Route>>
                </div>
                {news.render("news", |items| {
                    if items.is_empty() {
                        html! {
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No stories have been published yet."}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {items.iter().take(3).map(|item| {
                                    html! {
                                        <NewsCard key={item.id.to_string()} item={item.clone()} />
                                    }
                                }).collect::<Html>()}
                            </div>
                        }
                    }
                })}
            </div>
        </div>
    }
}
