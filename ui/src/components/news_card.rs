use tables::rows::NewsItem;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::utils::time::format_date;

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub item: NewsItem,
}

/// Listing card for one published story.
#[function_component]
pub fn NewsCard(props: &NewsCardProps) -> Html {
    let item = &props.item;
    // Public listings only carry rows with a publication timestamp.
    let date = item.published_at.map(format_date).unwrap_or_default();

    html! {
        <article class="bg-white dark:bg-neutral-800 p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
            <p class="text-sm text-neutral-500 dark:text-neutral-400 mb-1">
                {date}
            </p>
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                <Link<Route>
                    to={Route::NewsDetail { id: item.id }}
                    classes="hover:text-neutral-700 dark:hover:text-neutral-300"
                >
                    {&item.title}
                </Link<Route>>
            </h3>
            <p class="text-neutral-600 dark:text-neutral-400">
                {&item.summary}
            </p>
        </article>
    }
}
