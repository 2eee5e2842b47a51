use tables::NewsId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_news_item, use_title};
use crate::utils::time::format_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: NewsId,
}

#[function_component]
pub fn NewsDetailPage(props: &Props) -> Html {
    use_title("News - Vektra Machinery");

    let item = use_news_item(props.id);

    html! {
        <div class="max-w-3xl mx-auto">
            {item.render("story", |found| match found {
                Some(item) => {
                    let date = item.published_at.map(format_date).unwrap_or_default();
                    html! {
                        <article class="space-y-6">
                            <div>
                                <p class="text-sm text-neutral-500 dark:text-neutral-400 mb-2">
                                    {date}
                                </p>
                                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {&item.title}
                                </h1>
                                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                                    {&item.summary}
                                </p>
                            </div>
                            <div class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line leading-relaxed">
                                {&item.body}
                            </div>
                            <div class="pt-4 border-t border-neutral-200 dark:border-neutral-700">
                                <Link<Route>
                                    to={Route::News}
                                    classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100"
                                >
                                    {"Back to all news"}
                                </Link<Route>>
                            </div>
                        </article>
                    }
                }
                None => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400 mb-4">
                            {"This story does not exist or has not been published."}
                        </p>
                        <Link<Route>
                            to={Route::News}
                            classes="text-sm font-medium text-neutral-600 hover:text-neutral-900 dark:text-neutral-400 dark:hover:text-neutral-100"
                        >
                            {"Back to all news"}
                        </Link<Route>>
                    </div>
                },
            })}
        </div>
    }
}
