use yew::prelude::*;

use crate::components::NewsCard;
use crate::hooks::{use_news, use_title};

#[function_component]
pub fn NewsPage() -> Html {
    use_title("News - Vektra Machinery");

    let news = use_news();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Company news"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Product launches, trade shows, and shop floor stories"}
                </p>
            </div>

            {news.render("news", |items| {
                if items.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No stories have been published yet."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {items.iter().map(|item| {
                                html! {
                                    <NewsCard key={item.id.to_string()} item={item.clone()} />
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                }
            })}
        </div>
    }
}
