use tables::{NewsId, Order, rows::NewsItem};
use yew::prelude::*;

use super::{FetchHandle, use_fetch};
use crate::get_table_client;

/// Keep only rows fit for the public listing: published, with a
/// publication timestamp, newest first. The service query already asks
/// for this shape; filtering again here keeps the listing correct even
/// if a row slips through with `published` set but no timestamp.
pub fn published_news(mut rows: Vec<NewsItem>) -> Vec<NewsItem> {
    rows.retain(|row| row.published && row.published_at.is_some());
    rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    rows
}

/// Public news listing.
#[hook]
pub fn use_news() -> FetchHandle<Vec<NewsItem>> {
    use_fetch((), || async move {
        let client = get_table_client();
        let rows = client
            .from("news")
            .eq("published", true)
            .order("published_at", Order::Desc)
            .fetch::<NewsItem>()
            .await
            .map_err(|e| e.to_string())?;
        Ok(published_news(rows))
    })
}

/// One published story by id. `Success(None)` is the not-found case;
/// drafts are filtered out here too, so they cannot be reached by
/// guessing urls.
#[hook]
pub fn use_news_item(id: NewsId) -> FetchHandle<Option<NewsItem>> {
    use_fetch(id, move || async move {
        let client = get_table_client();
        client
            .from("news")
            .eq("id", id)
            .eq("published", true)
            .fetch_maybe::<NewsItem>()
            .await
            .map_err(|e| e.to_string())
    })
}

/// Admin listing: drafts included, newest created first.
#[hook]
pub fn use_all_news() -> FetchHandle<Vec<NewsItem>> {
    use_fetch((), || async move {
        let client = get_table_client();
        client
            .from("news")
            .order("created_at", Order::Desc)
            .fetch::<NewsItem>()
            .await
            .map_err(|e| e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tables::NewsId;
    use uuid::Uuid;

    use super::*;

    fn story(
        title: &str,
        published: bool,
        published_at: Option<&str>,
    ) -> NewsItem {
        NewsItem {
            id: NewsId(Uuid::new_v4()),
            title: title.to_string(),
            summary: String::new(),
            body: String::new(),
            published,
            published_at: published_at
                .map(|raw| raw.parse::<Timestamp>().unwrap()),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn drops_drafts_and_rows_without_timestamps() {
        let rows = vec![
            story("draft", false, None),
            story("ok", true, Some("2024-03-01T00:00:00Z")),
            story("published but dateless", true, None),
            story("unpublished with date", false, Some("2024-02-01T00:00:00Z")),
        ];

        let titles: Vec<_> = published_news(rows)
            .into_iter()
            .map(|row| row.title)
            .collect();
        assert_eq!(titles, ["ok"]);
    }

    #[test]
    fn orders_newest_first() {
        let rows = vec![
            story("middle", true, Some("2024-02-01T00:00:00Z")),
            story("oldest", true, Some("2024-01-01T00:00:00Z")),
            story("newest", true, Some("2024-03-01T00:00:00Z")),
        ];

        let titles: Vec<_> = published_news(rows)
            .into_iter()
            .map(|row| row.title)
            .collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(published_news(Vec::new()).is_empty());
    }
}
