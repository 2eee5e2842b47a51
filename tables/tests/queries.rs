use tables::{Order, TableClient};

fn client() -> TableClient {
    TableClient::new("http://localhost:54321", "publishable-key")
}

#[test]
fn bare_query_selects_everything() {
    let client = client();
    let query = client.from("news");
    assert_eq!(query.query_string(), "select=*");
}

#[test]
fn equality_filter() {
    let client = client();
    let query = client.from("news").eq("published", true);
    assert_eq!(query.query_string(), "select=*&published=eq.true");
}

#[test]
fn filters_keep_call_order() {
    let client = client();
    let query = client
        .from("products")
        .eq("category", "crushers")
        .eq("name", "CR-200");
    assert_eq!(
        query.query_string(),
        "select=*&category=eq.crushers&name=eq.CR-200"
    );
}

#[test]
fn ordering_renders_direction_keyword() {
    let client = client();
    let asc = client.from("products").order("name", Order::Asc);
    assert_eq!(asc.query_string(), "select=*&order=name.asc");

    let desc = client.from("news").order("published_at", Order::Desc);
    assert_eq!(desc.query_string(), "select=*&order=published_at.desc");
}

#[test]
fn last_ordering_wins() {
    let client = client();
    let query = client
        .from("news")
        .order("created_at", Order::Asc)
        .order("published_at", Order::Desc);
    assert_eq!(query.query_string(), "select=*&order=published_at.desc");
}

#[test]
fn limit_is_rendered_last() {
    let client = client();
    let query = client
        .from("news")
        .eq("published", true)
        .order("published_at", Order::Desc)
        .limit(3);
    assert_eq!(
        query.query_string(),
        "select=*&published=eq.true&order=published_at.desc&limit=3"
    );
}
