use tables::{Order, ProductId, rows::Product};
use yew::prelude::*;

use super::{FetchHandle, use_fetch};
use crate::get_table_client;

/// Catalog listing, ordered by name. Shared by the public catalog page
/// and the admin products table.
#[hook]
pub fn use_products() -> FetchHandle<Vec<Product>> {
    use_fetch((), || async move {
        let client = get_table_client();
        client
            .from("products")
            .order("name", Order::Asc)
            .fetch::<Product>()
            .await
            .map_err(|e| e.to_string())
    })
}

/// One product by id. `Success(None)` is the not-found case.
#[hook]
pub fn use_product(id: ProductId) -> FetchHandle<Option<Product>> {
    use_fetch(id, move || async move {
        let client = get_table_client();
        client
            .from("products")
            .eq("id", id)
            .fetch_maybe::<Product>()
            .await
            .map_err(|e| e.to_string())
    })
}
